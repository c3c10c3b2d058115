//! # Domain Entities
//!
//! The structured form of an EIP-4361 message and the names of its fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix of the first line, after the domain.
pub const HEADER_SUFFIX: &str = " wants you to sign in with your Ethereum account:";

/// Line that opens the resource list.
pub const RESOURCES_HEADER: &str = "Resources:";

/// Prefix of each resource line.
pub const RESOURCE_PREFIX: &str = "- ";

/// The only protocol version this codec accepts.
pub const SUPPORTED_VERSION: &str = "1";

/// Fields of a SIWE message, used to name parse and validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SiweField {
    /// RFC 3986 authority requesting the signature
    Domain,
    /// Signing account
    Address,
    /// Human-readable assertion
    Statement,
    /// Subject of the signing
    Uri,
    /// Message format version
    Version,
    /// EIP-155 chain id
    ChainId,
    /// Anti-replay token
    Nonce,
    /// Creation time
    IssuedAt,
    /// Expiry time
    ExpirationTime,
    /// Validity start time
    NotBefore,
    /// System-specific request identifier
    RequestId,
    /// Resource URIs
    Resources,
}

impl SiweField {
    /// Fields rendered as `Label: value` lines, in canonical order.
    pub const TAGGED: [SiweField; 8] = [
        SiweField::Uri,
        SiweField::Version,
        SiweField::ChainId,
        SiweField::Nonce,
        SiweField::IssuedAt,
        SiweField::ExpirationTime,
        SiweField::NotBefore,
        SiweField::RequestId,
    ];

    /// Label used in the message text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Domain => "Domain",
            Self::Address => "Address",
            Self::Statement => "Statement",
            Self::Uri => "URI",
            Self::Version => "Version",
            Self::ChainId => "Chain ID",
            Self::Nonce => "Nonce",
            Self::IssuedAt => "Issued At",
            Self::ExpirationTime => "Expiration Time",
            Self::NotBefore => "Not Before",
            Self::RequestId => "Request ID",
            Self::Resources => "Resources",
        }
    }

    /// Look up a tagged field by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::TAGGED.into_iter().find(|field| field.label() == label)
    }
}

impl fmt::Display for SiweField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A parsed EIP-4361 message.
///
/// Produced by [`parse`](crate::parse), consumed by
/// [`validate`](crate::validate) and by canonical rendering (`Display`).
/// Timestamps are kept as the exact strings that were signed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiweMessage {
    /// Domain requesting the signature
    pub domain: String,
    /// `0x` + 40 hex digits, case preserved
    pub address: String,
    /// Optional statement, may span several lines
    pub statement: Option<String>,
    /// URI the signing refers to
    pub uri: String,
    /// Version (must be "1" to validate)
    pub version: String,
    /// Chain id as written (must be decimal digits to validate)
    pub chain_id: String,
    /// Server-issued nonce
    pub nonce: String,
    /// RFC 3339 creation time
    pub issued_at: String,
    /// RFC 3339 expiry time
    pub expiration_time: Option<String>,
    /// RFC 3339 validity start
    pub not_before: Option<String>,
    /// Request identifier
    pub request_id: Option<String>,
    /// Resource URIs, empty when the message has no `Resources:` block
    pub resources: Vec<String>,
}

impl SiweMessage {
    /// A version-1 message with every optional field absent.
    pub fn new(
        domain: impl Into<String>,
        address: impl Into<String>,
        uri: impl Into<String>,
        chain_id: impl Into<String>,
        nonce: impl Into<String>,
        issued_at: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            address: address.into(),
            statement: None,
            uri: uri.into(),
            version: SUPPORTED_VERSION.to_string(),
            chain_id: chain_id.into(),
            nonce: nonce.into(),
            issued_at: issued_at.into(),
            expiration_time: None,
            not_before: None,
            request_id: None,
            resources: Vec::new(),
        }
    }

    /// Value of a tagged field, `None` when absent.
    pub fn tagged_value(&self, field: SiweField) -> Option<&str> {
        match field {
            SiweField::Uri => Some(&self.uri),
            SiweField::Version => Some(&self.version),
            SiweField::ChainId => Some(&self.chain_id),
            SiweField::Nonce => Some(&self.nonce),
            SiweField::IssuedAt => Some(&self.issued_at),
            SiweField::ExpirationTime => self.expiration_time.as_deref(),
            SiweField::NotBefore => self.not_before.as_deref(),
            SiweField::RequestId => self.request_id.as_deref(),
            SiweField::Domain => Some(&self.domain),
            SiweField::Address => Some(&self.address),
            SiweField::Statement => self.statement.as_deref(),
            SiweField::Resources => None,
        }
    }
}
