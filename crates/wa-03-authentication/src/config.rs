//! Authentication configuration with validation.
//!
//! The only secret in the pipeline is the HMAC key used to bind nonces to
//! addresses. It is wiped from memory when the configuration is dropped.

use std::env;
use std::fmt;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Environment variable holding the hex-encoded HMAC secret.
pub const ENV_HMAC_SECRET: &str = "WA_HMAC_SECRET";

/// Environment variable holding the expected SIWE domain.
pub const ENV_EXPECTED_DOMAIN: &str = "WA_EXPECTED_DOMAIN";

/// Minimum HMAC secret length in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Configuration errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Server HMAC secret is not configured (set WA_HMAC_SECRET)")]
    MissingSecret,

    #[error("Server HMAC secret is not valid hex: {0}")]
    InvalidSecretEncoding(String),

    #[error("Server HMAC secret is {actual} bytes, at least 32 required")]
    SecretTooShort { actual: usize },

    #[error("Server HMAC secret is all zero bytes")]
    WeakSecret,

    #[error("Expected domain must not be empty")]
    EmptyDomain,
}

/// Authentication service configuration.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AuthConfig {
    /// HMAC-SHA256 key for nonce hashes
    hmac_secret: Vec<u8>,

    /// Domain every SIWE message must name, when set
    #[zeroize(skip)]
    pub expected_domain: Option<String>,
}

impl AuthConfig {
    /// Build and validate a configuration.
    pub fn new(hmac_secret: Vec<u8>, expected_domain: Option<String>) -> Result<Self, ConfigError> {
        let config = Self {
            hmac_secret,
            expected_domain,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from a hex secret, with or without `0x`.
    pub fn from_hex_secret(
        secret_hex: &str,
        expected_domain: Option<String>,
    ) -> Result<Self, ConfigError> {
        let digits = secret_hex.trim();
        let digits = digits.strip_prefix("0x").unwrap_or(digits);
        let secret =
            hex::decode(digits).map_err(|e| ConfigError::InvalidSecretEncoding(e.to_string()))?;
        Self::new(secret, expected_domain)
    }

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `WA_HMAC_SECRET`: hex-encoded HMAC key, at least 32 bytes (required)
    /// - `WA_EXPECTED_DOMAIN`: domain SIWE messages must name (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = lookup(ENV_HMAC_SECRET)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingSecret)?;
        let expected_domain = lookup(ENV_EXPECTED_DOMAIN).filter(|value| !value.is_empty());
        Self::from_hex_secret(&secret, expected_domain)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hmac_secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.hmac_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::SecretTooShort {
                actual: self.hmac_secret.len(),
            });
        }
        if self.hmac_secret.iter().all(|&b| b == 0) {
            return Err(ConfigError::WeakSecret);
        }
        if self.expected_domain.as_deref() == Some("") {
            return Err(ConfigError::EmptyDomain);
        }
        Ok(())
    }

    /// The HMAC key.
    pub fn hmac_secret(&self) -> &[u8] {
        &self.hmac_secret
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("hmac_secret", &"<redacted>")
            .field("expected_domain", &self.expected_domain)
            .finish()
    }
}
