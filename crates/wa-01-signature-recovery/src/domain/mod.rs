//! # Domain Layer
//!
//! Pure signature logic with no I/O dependencies.
//! This is the inner layer of the hexagonal architecture.

pub mod entities;
pub mod errors;
pub mod recovery;
pub mod signer;
