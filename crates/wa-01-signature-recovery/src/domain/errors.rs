//! # Signature Errors
//!
//! Every way a recovery can fail has its own variant. Callers never see a
//! generic failure, and a failed recovery never yields an address.

use thiserror::Error;

/// Why the recovery arithmetic could not produce a public key.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RecoveryFailure {
    /// `x³ + 7` has no square root for the candidate x-coordinate
    #[error("candidate x-coordinate has no point on the curve (non-residue)")]
    NonResidue,

    /// A point produced during recovery does not satisfy the curve equation
    #[error("recovered point is not on the curve")]
    OffCurve,

    /// The recovered public key is the point at infinity
    #[error("recovered public key is the point at infinity")]
    PointAtInfinity,

    /// `r + n` is not below the field prime (recovery ids 2 and 3)
    #[error("candidate x-coordinate r + n exceeds the field prime")]
    CandidateOverflow,
}

/// Errors that can occur while parsing, recovering or producing a signature.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// Not a 65-byte `r ∥ s ∥ v` signature (wrong length, invalid hex)
    #[error("Malformed signature: {0}")]
    MalformedInput(String),

    /// `r` or `s` outside the open range `(0, n)`
    #[error("Signature component {component} out of range")]
    OutOfRange {
        /// `"r"` or `"s"`
        component: &'static str,
    },

    /// `s > n/2` (EIP-2). High-s signatures are rejected, never normalised.
    #[error("Malleable signature (high S value)")]
    Malleable,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Public key recovery failed
    #[error("Invalid recovery: {0}")]
    InvalidRecovery(#[from] RecoveryFailure),

    /// Secret key is zero or not below the group order
    #[error("Invalid secret key")]
    InvalidSecretKey,

    /// No usable deterministic nonce was found
    #[error("Signing failed: nonce generation exhausted")]
    SigningFailed,
}
