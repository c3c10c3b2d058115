//! # Wallet-Auth Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Wallets, signed messages, in-memory nonce store
//! ├── benchmarks/       # Criterion benchmarks per subsystem
//! ├── exploits/         # Attack simulations against the sign-in pipeline
//! └── integration/      # Cross-subsystem flows and external oracles
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p wa-tests
//!
//! # By category
//! cargo test -p wa-tests integration::
//! cargo test -p wa-tests exploits::
//!
//! # Benchmarks
//! cargo bench -p wa-tests
//! ```

pub mod benchmarks;
pub mod exploits;
pub mod integration;
