//! # Domain Entities
//!
//! Core data structures for signature recovery.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};
use shared_crypto::keccak256;

/// Ethereum-style address (last 20 bytes of keccak256(pubkey))
pub type Address = [u8; 20];

/// Length of a serialized `r ∥ s ∥ v` signature.
pub const SIGNATURE_LENGTH: usize = 65;

// =============================================================================
// Signature
// =============================================================================

/// Ethereum ECDSA signature as produced by `personal_sign`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthSignature {
    /// R component (32 bytes, big-endian)
    pub r: [u8; 32],
    /// S component (32 bytes, big-endian)
    pub s: [u8; 32],
    /// Recovery ID as transmitted (0, 1, 27, or 28)
    pub v: u8,
}

impl EthSignature {
    /// Split exactly 65 raw bytes into `r`, `s` and `v`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(SignatureError::MalformedInput(format!(
                "expected {SIGNATURE_LENGTH} bytes, got {}",
                bytes.len()
            )));
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);

        Ok(Self { r, s, v: bytes[64] })
    }

    /// Decode a hex signature, with or without a `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Self, SignatureError> {
        let digits = strip_hex_prefix(input.trim());
        let bytes = hex::decode(digits)
            .map_err(|e| SignatureError::MalformedInput(format!("invalid hex: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Raw 65-byte encoding.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// `0x`-prefixed lowercase hex encoding.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.to_bytes()))
    }
}

// =============================================================================
// Addresses
// =============================================================================

/// Render an address as `0x` + 40 lowercase hex digits.
pub fn format_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address))
}

/// Render an address with the EIP-55 mixed-case checksum.
///
/// A hex letter is uppercased when the matching nibble of
/// `keccak256(lowercase_hex)` is 8 or more.
pub fn to_checksum_address(address: &Address) -> String {
    let lower = hex::encode(address);
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(42);
    out.push_str("0x");
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Parse `0x` + 40 hex digits (any case) into raw bytes.
pub fn parse_address(input: &str) -> Result<Address, SignatureError> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .ok_or_else(|| SignatureError::MalformedInput("address must start with 0x".into()))?;

    if digits.len() != 40 {
        return Err(SignatureError::MalformedInput(format!(
            "address must have 40 hex digits, got {}",
            digits.len()
        )));
    }

    let mut address = [0u8; 20];
    hex::decode_to_slice(digits, &mut address)
        .map_err(|e| SignatureError::MalformedInput(format!("invalid address hex: {e}")))?;
    Ok(address)
}

fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

// =============================================================================
// Recovery Request/Result Types
// =============================================================================

/// Request to recover the signer of a personal message.
#[derive(Clone, Debug)]
pub struct RecoveryRequest {
    /// The raw message that was signed (prefix is applied during recovery)
    pub message: Vec<u8>,
    /// The signature to recover from
    pub signature: EthSignature,
    /// Optional expected signer; when set the recovered address must match
    pub expected_signer: Option<Address>,
}

/// Result of one recovery attempt.
#[derive(Clone, Debug)]
pub struct RecoveryResult {
    /// Whether recovery (and the expected-signer check, if any) passed
    pub valid: bool,
    /// The recovered address (if recovery succeeded)
    pub recovered_address: Option<Address>,
    /// Error details (if recovery failed)
    pub error: Option<SignatureError>,
}

impl RecoveryResult {
    /// Create a successful recovery result.
    pub fn valid(recovered_address: Address) -> Self {
        Self {
            valid: true,
            recovered_address: Some(recovered_address),
            error: None,
        }
    }

    /// Create a failed recovery result.
    pub fn invalid(error: SignatureError) -> Self {
        Self {
            valid: false,
            recovered_address: None,
            error: Some(error),
        }
    }
}

/// Result of batch recovery.
#[derive(Clone, Debug)]
pub struct BatchRecoveryResult {
    /// Individual results, in request order
    pub results: Vec<RecoveryResult>,
    /// Whether all recoveries passed
    pub all_valid: bool,
    /// Count of valid signatures
    pub valid_count: usize,
    /// Count of invalid signatures
    pub invalid_count: usize,
}

impl BatchRecoveryResult {
    /// Create a batch result from individual results.
    pub fn from_results(results: Vec<RecoveryResult>) -> Self {
        let valid_count = results.iter().filter(|r| r.valid).count();
        let invalid_count = results.len() - valid_count;

        Self {
            results,
            all_valid: invalid_count == 0,
            valid_count,
            invalid_count,
        }
    }
}
