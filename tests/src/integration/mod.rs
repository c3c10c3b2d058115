//! # Integration Tests
//!
//! Cross-subsystem flows through the public APIs, and cross-checks of the
//! in-house primitives against independent implementations.

pub mod oracle;
pub mod sign_in_flows;
