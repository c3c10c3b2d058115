//! # Signature Recovery Subsystem (WA-01)
//!
//! Recovers the Ethereum address that signed a personal message, using the
//! in-house secp256k1 and Keccak-256 from `shared-crypto`.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound interfaces
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Security Notes
//!
//! - **Malleability Prevention (EIP-2)**: Signatures with `s > n/2` are rejected
//! - **Defensive Checks**: Every recovered point is checked for the identity
//!   and for curve membership before an address is derived
//! - **Named Failures**: Each rejection maps to its own `SignatureError` variant

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::entities::{
    format_address, parse_address, to_checksum_address, Address, BatchRecoveryResult,
    EthSignature, RecoveryRequest, RecoveryResult, SIGNATURE_LENGTH,
};
pub use domain::errors::{RecoveryFailure, SignatureError};
pub use domain::recovery::{
    address_from_point, batch_recover, invert_s, recover_address, recover_from_prehash,
    recover_public_key, EthRecoverer,
};
pub use domain::signer::{sign_message, sign_prehash_recoverable, SecretKey};
pub use ports::inbound::SignatureRecoveryApi;
pub use service::SignatureRecoveryService;
