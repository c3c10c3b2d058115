//! # Domain Layer
//!
//! EIP-4361 text handling: parsing, canonical rendering and validation.
//! Everything here is pure and allocation-only.

pub mod canonical;
pub mod entities;
pub mod errors;
pub mod parser;
pub mod validation;
