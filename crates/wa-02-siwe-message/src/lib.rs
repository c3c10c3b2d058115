//! # SIWE Message Codec (WA-02)
//!
//! Parses, canonically renders and validates EIP-4361 "Sign-In With Ethereum"
//! messages.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): parser, canonical renderer, validation
//! - **Ports Layer** (`ports/`): the `SiweCodecApi` trait
//! - **Service Layer** (`service.rs`): `SiweCodecService`
//!
//! ## Canonical Form
//!
//! `parse` is lenient about line endings; `parse_canonical` is not. Signed
//! text must go through `parse_canonical`, which re-renders the parsed
//! fields and rejects anything that does not match byte for byte.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::canonical::parse_canonical;
pub use domain::entities::{
    SiweField, SiweMessage, HEADER_SUFFIX, RESOURCES_HEADER, RESOURCE_PREFIX, SUPPORTED_VERSION,
};
pub use domain::errors::SiweError;
pub use domain::parser::parse;
pub use domain::validation::{parse_timestamp, validate};
pub use ports::inbound::SiweCodecApi;
pub use service::SiweCodecService;
