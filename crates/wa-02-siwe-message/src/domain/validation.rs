//! # Message Validation
//!
//! Semantic checks on a parsed message. Parsing only guarantees shape; this
//! module decides whether the message is acceptable at time `now`.

use super::entities::{SiweField, SiweMessage, SUPPORTED_VERSION};
use super::errors::SiweError;
use chrono::{DateTime, Utc};

/// Parse an RFC 3339 timestamp, naming `field` on failure.
pub fn parse_timestamp(field: SiweField, value: &str) -> Result<DateTime<Utc>, SiweError> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|e| SiweError::Validation {
            field,
            reason: format!("'{value}' is not an RFC 3339 timestamp: {e}"),
        })
}

/// Validate domain, chain id, version and the time window of `message`.
///
/// Checks run in that order and the first failure is returned.
pub fn validate(
    message: &SiweMessage,
    expected_domain: Option<&str>,
    now: DateTime<Utc>,
) -> Result<(), SiweError> {
    if message.domain.is_empty() {
        return Err(SiweError::Validation {
            field: SiweField::Domain,
            reason: "domain is empty".to_string(),
        });
    }
    if let Some(expected) = expected_domain {
        if message.domain != expected {
            return Err(SiweError::Validation {
                field: SiweField::Domain,
                reason: format!("expected '{expected}', got '{}'", message.domain),
            });
        }
    }

    if message.chain_id.is_empty() || !message.chain_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SiweError::Validation {
            field: SiweField::ChainId,
            reason: format!("'{}' is not a decimal chain id", message.chain_id),
        });
    }

    if message.version != SUPPORTED_VERSION {
        return Err(SiweError::UnsupportedVersion(message.version.clone()));
    }

    parse_timestamp(SiweField::IssuedAt, &message.issued_at)?;

    if let Some(expiration) = &message.expiration_time {
        let expires_at = parse_timestamp(SiweField::ExpirationTime, expiration)?;
        if expires_at <= now {
            return Err(SiweError::Validation {
                field: SiweField::ExpirationTime,
                reason: format!("message expired at {expiration}"),
            });
        }
    }

    if let Some(not_before) = &message.not_before {
        let valid_from = parse_timestamp(SiweField::NotBefore, not_before)?;
        if valid_from > now {
            return Err(SiweError::Validation {
                field: SiweField::NotBefore,
                reason: format!("message not valid before {not_before}"),
            });
        }
    }

    Ok(())
}
