//! # Domain Layer
//!
//! Authentication outcomes, failure taxonomy and nonce handling.

pub mod errors;
pub mod nonce;
pub mod result;
