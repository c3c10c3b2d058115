//! # SIWE Errors
//!
//! Parse errors name the field that is missing or malformed; validation
//! errors name the field whose value is unacceptable.

use super::entities::SiweField;
use thiserror::Error;

/// Errors produced while parsing or validating an EIP-4361 message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SiweError {
    /// A required field line is absent
    #[error("Parse error: missing required field '{0}'")]
    MissingField(SiweField),

    /// A field is present but malformed
    #[error("Parse error in '{field}': {reason}")]
    InvalidField {
        /// The offending field
        field: SiweField,
        /// Human-readable reason
        reason: String,
    },

    /// A field appears more than once
    #[error("Parse error: duplicate field '{0}'")]
    DuplicateField(SiweField),

    /// A line after the URI is not a recognised field
    #[error("Parse error: unrecognised line '{0}'")]
    UnknownField(String),

    /// A parsed value fails a semantic rule
    #[error("Validation failed for '{field}': {reason}")]
    Validation {
        /// The offending field
        field: SiweField,
        /// Human-readable reason
        reason: String,
    },

    /// Version other than "1"
    #[error("Unsupported SIWE version: {0}")]
    UnsupportedVersion(String),

    /// The signed text differs from the canonical rendering of its own fields
    #[error("Signed message is not in canonical EIP-4361 form")]
    NonCanonical,
}

impl SiweError {
    /// Whether this came from the parser (as opposed to validation).
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::InvalidField { .. }
                | Self::DuplicateField(_)
                | Self::UnknownField(_)
                | Self::NonCanonical
        )
    }

    /// Whether this came from [`validate`](crate::validate).
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::UnsupportedVersion(_))
    }

    /// The field this error is about, when there is one.
    pub fn field(&self) -> Option<SiweField> {
        match self {
            Self::MissingField(field)
            | Self::DuplicateField(field)
            | Self::InvalidField { field, .. }
            | Self::Validation { field, .. } => Some(*field),
            Self::UnsupportedVersion(_) => Some(SiweField::Version),
            Self::UnknownField(_) | Self::NonCanonical => None,
        }
    }
}
