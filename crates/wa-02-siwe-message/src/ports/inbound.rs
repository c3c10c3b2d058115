//! # Inbound Ports (Driving Ports / API)

use crate::domain::entities::SiweMessage;
use crate::domain::errors::SiweError;
use chrono::{DateTime, Utc};

/// Primary SIWE codec API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait SiweCodecApi: Send + Sync {
    /// Parse message text, tolerating CRLF and trailing blank lines.
    fn parse(&self, raw: &str) -> Result<SiweMessage, SiweError>;

    /// Parse message text and require it to be exactly canonical.
    ///
    /// # Security
    /// Use this on text that was signed, so the verified bytes and the parsed
    /// fields cannot disagree.
    fn parse_canonical(&self, raw: &str) -> Result<SiweMessage, SiweError>;

    /// Rebuild the canonical text of a parsed message.
    fn reconstruct(&self, message: &SiweMessage) -> String {
        message.to_canonical_string()
    }

    /// Check domain, chain id, version and time window at `now`.
    fn validate(
        &self,
        message: &SiweMessage,
        expected_domain: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<(), SiweError>;
}
