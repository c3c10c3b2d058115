//! # Exploit Tests
//!
//! Attack scenarios against the sign-in pipeline. Each test builds a forged
//! or replayed input and asserts the exact rejection it must produce.

pub mod message_attacks;
pub mod signature_attacks;
