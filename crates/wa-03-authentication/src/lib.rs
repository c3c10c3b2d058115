//! # Authentication Subsystem (WA-03)
//!
//! Sign-In With Ethereum verification: nonce issuance, nonce hashing, the
//! six-step verification pipeline, and the startup self-test.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): failure taxonomy, results, nonces
//! - **Ports Layer** (`ports/`): `AuthenticationApi` in, `NonceStore` out
//! - **Service Layer** (`service.rs`): `AuthenticationService`
//!
//! ## Verification Order
//!
//! 1. Recover the signer from the signature and the raw message bytes
//! 2. Recovered signer must equal the claimed address
//! 3. Parse the message, requiring canonical EIP-4361 text
//! 4. Address inside the message must equal the claimed address
//! 5. Validate domain, version, chain id and time window
//! 6. Compare the recomputed nonce hash in constant time
//!
//! ## Security Notes
//!
//! - The HMAC secret is zeroized on drop and never printed
//! - Nonce records belong to the caller; this crate holds no mutable state

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use config::{AuthConfig, ConfigError, ENV_EXPECTED_DOMAIN, ENV_HMAC_SECRET, MIN_SECRET_LEN};
pub use domain::errors::{AddressCheck, AuthError};
pub use domain::nonce::{generate_nonce, nonce_hash, NONCE_BYTES};
pub use domain::result::AuthenticationResult;
pub use ports::inbound::AuthenticationApi;
pub use ports::outbound::{NonceRecord, NonceStore, NonceStoreError};
pub use self_test::{run_self_test, SelfTestError, SelfTestReport};
pub use service::AuthenticationService;
