//! # Authentication Result
//!
//! The terminal outcome of one sign-in attempt.

use super::errors::AuthError;

/// Outcome of one verification attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Whether every step passed
    pub success: bool,
    /// Why the attempt failed, `None` on success
    pub error: Option<AuthError>,
    /// Authenticated address (`0x` lowercase hex), `None` on failure
    pub recovered_address: Option<String>,
}

impl AuthenticationResult {
    /// Successful authentication of `address`.
    pub fn success(address: String) -> Self {
        Self {
            success: true,
            error: None,
            recovered_address: Some(address),
        }
    }

    /// Failed authentication.
    pub fn failure(error: AuthError) -> Self {
        Self {
            success: false,
            error: Some(error),
            recovered_address: None,
        }
    }

    /// Human-readable failure reason.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

impl From<Result<String, AuthError>> for AuthenticationResult {
    fn from(result: Result<String, AuthError>) -> Self {
        match result {
            Ok(address) => Self::success(address),
            Err(error) => Self::failure(error),
        }
    }
}
