//! Crypto error types.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Coordinates do not satisfy `y² = x³ + 7`
    #[error("Point is not on the secp256k1 curve")]
    PointNotOnCurve,

    /// A field element encoding was not below the prime `p`
    #[error("Field element out of range")]
    FieldElementOutOfRange,
}
