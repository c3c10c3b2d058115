//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::result::AuthenticationResult;
use crate::ports::outbound::NonceStore;
use crate::self_test::{SelfTestError, SelfTestReport};
use chrono::{DateTime, Utc};

/// Primary Authentication API.
///
/// Implementations must be thread-safe (`Send + Sync`) and hold no mutable
/// state; nonce records are always supplied by the caller.
pub trait AuthenticationApi: Send + Sync {
    /// Generate a fresh nonce to embed in a SIWE message.
    fn generate_nonce(&self) -> String;

    /// Lowercase hex hash binding `nonce` to `address`, for the caller to store.
    fn nonce_hash(&self, address: &str, nonce: &str) -> String;

    /// Verify a signed SIWE message against the current time.
    fn authenticate_siwe(
        &self,
        message: &str,
        signature: &str,
        expected_address: &str,
        stored_nonce_hash: &str,
    ) -> AuthenticationResult {
        self.authenticate_siwe_at(
            message,
            signature,
            expected_address,
            stored_nonce_hash,
            Utc::now(),
        )
    }

    /// Verify a signed SIWE message as of `now`.
    ///
    /// # Security
    /// Steps run in a fixed order: signature recovery, signer check, parse,
    /// message address check, validation, constant-time nonce comparison.
    /// Every failure is returned as data naming the step that failed.
    fn authenticate_siwe_at(
        &self,
        message: &str,
        signature: &str,
        expected_address: &str,
        stored_nonce_hash: &str,
        now: DateTime<Utc>,
    ) -> AuthenticationResult;

    /// Look up the nonce record for `address` and verify against it.
    fn authenticate_with_store(
        &self,
        store: &dyn NonceStore,
        message: &str,
        signature: &str,
        address: &str,
        now: DateTime<Utc>,
    ) -> AuthenticationResult;

    /// Run the cryptographic self-test.
    fn self_test(&self) -> Result<SelfTestReport, SelfTestError>;
}
