//! # Outbound Ports (Driven Ports / SPI)
//!
//! Nonce records live in the host application's identity store. This crate
//! only reads them; issuing, persisting and expiring records is the host's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error from nonce store operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NonceStoreError {
    /// The store could not be reached
    #[error("Nonce store unavailable: {0}")]
    Unavailable(String),

    /// The stored record is unreadable
    #[error("Corrupt nonce record: {0}")]
    Corrupt(String),
}

/// Nonce hash issued to one wallet address, with its expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonceRecord {
    /// Lowercase hex HMAC of address and nonce
    pub nonce_hash: String,
    /// Moment the record stops being accepted
    pub expires_at: DateTime<Utc>,
}

impl NonceRecord {
    /// Create a record.
    pub fn new(nonce_hash: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            nonce_hash: nonce_hash.into(),
            expires_at,
        }
    }

    /// Whether the record is no longer valid at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Read access to issued nonces, keyed by wallet address.
///
/// Addresses are passed as `0x` + 40 lowercase hex digits.
pub trait NonceStore: Send + Sync {
    /// Look up the record for `address`, `None` when nothing was issued.
    fn nonce_record(&self, address: &str) -> Result<Option<NonceRecord>, NonceStoreError>;
}
