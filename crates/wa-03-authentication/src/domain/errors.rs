//! # Authentication Errors
//!
//! One variant per way a sign-in attempt can fail. Errors from the recovery
//! and SIWE crates are carried unchanged so the caller sees the precise cause.

use crate::config::ConfigError;
use crate::ports::outbound::NonceStoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use wa_01_signature_recovery::SignatureError;
use wa_02_siwe_message::SiweError;

/// Which of the two address comparisons failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressCheck {
    /// Recovered signer vs. the claimed address
    RecoveredSigner,
    /// Address written in the SIWE message vs. the claimed address
    MessageAddress,
}

impl fmt::Display for AddressCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RecoveredSigner => f.write_str("recovered signer"),
            Self::MessageAddress => f.write_str("message address"),
        }
    }
}

/// Authentication failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Signature could not be decoded or recovered
    #[error("Signature rejected: {0}")]
    Signature(#[from] SignatureError),

    /// The claimed address is not `0x` + 40 hex digits
    #[error("Claimed address is malformed: {0}")]
    MalformedAddress(String),

    /// An address comparison failed
    #[error("Address mismatch ({leg}): expected {expected}, got {actual}")]
    AddressMismatch {
        /// Comparison that failed
        leg: AddressCheck,
        /// Claimed address, lowercase
        expected: String,
        /// Address found instead, lowercase
        actual: String,
    },

    /// SIWE message failed parsing or validation
    #[error("SIWE message rejected: {0}")]
    Siwe(#[from] SiweError),

    /// Recomputed nonce hash differs from the stored one
    #[error("Nonce does not match the one issued for this address")]
    NonceMismatch,

    /// No nonce has been issued for this address
    #[error("No nonce issued for address {0}")]
    NonceNotFound(String),

    /// The stored nonce record has expired
    #[error("Nonce expired at {expired_at}")]
    NonceExpired {
        /// When the record stopped being valid
        expired_at: DateTime<Utc>,
    },

    /// Server configuration is unusable
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Nonce store lookup failed
    #[error("Nonce store error: {0}")]
    Store(#[from] NonceStoreError),
}

impl AuthError {
    /// Short stable label, used as a metrics dimension.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Signature(SignatureError::MalformedInput(_)) => "malformed_signature",
            Self::Signature(SignatureError::OutOfRange { .. }) => "signature_out_of_range",
            Self::Signature(SignatureError::Malleable) => "malleable_signature",
            Self::Signature(_) => "invalid_recovery",
            Self::MalformedAddress(_) => "malformed_address",
            Self::AddressMismatch { .. } => "address_mismatch",
            Self::Siwe(error) if error.is_parse_error() => "siwe_parse",
            Self::Siwe(_) => "siwe_validation",
            Self::NonceMismatch => "nonce_mismatch",
            Self::NonceNotFound(_) => "nonce_not_found",
            Self::NonceExpired { .. } => "nonce_expired",
            Self::Config(_) => "config",
            Self::Store(_) => "store",
        }
    }
}
