//! # Ethereum Signature Recovery (secp256k1)
//!
//! Pure domain logic: recover the address that signed a personal message.
//!
//! ## Pipeline
//!
//! 1. **Parse**: exactly 65 bytes `r ∥ s ∥ v` (see [`EthSignature::from_bytes`])
//! 2. **Range**: `0 < r < n` and `0 < s < n`
//! 3. **Low-s (EIP-2)**: `s > n/2` is rejected as malleable, never flipped
//! 4. **Recovery id**: `v ∈ {27, 28, 0, 1}` normalised to `{0, 1}`
//! 5. **R**: decompress `x = r` (`r + n` for ids 2/3) with the parity of `v`
//! 6. **Q**: `Q = r⁻¹ · (s·R − z·G)` where `z = keccak(prefix ∥ msg)`
//! 7. **Address**: last 20 bytes of `keccak(Q.x ∥ Q.y)`
//!
//! Step 6 is evaluated as `u1·G + u2·R` with `u1 = −z·r⁻¹`, `u2 = s·r⁻¹`,
//! which is the same point and saves one scalar multiplication.

use super::entities::{
    Address, BatchRecoveryResult, EthSignature, RecoveryRequest, RecoveryResult,
};
use super::errors::{RecoveryFailure, SignatureError};
use primitive_types::U256;
use shared_crypto::secp256k1::{
    mod_inv, mod_mul, mod_sub, u256_from_be_bytes, u256_to_be_bytes, HALF_N, N, P,
};
use shared_crypto::{hash_ethereum_message, keccak256, CurvePoint, FieldElement, Hash};

// =============================================================================
// RECOVERER
// =============================================================================

/// Stateless personal-message signature recoverer.
#[derive(Debug, Clone, Copy, Default)]
pub struct EthRecoverer;

impl EthRecoverer {
    /// Create a new recoverer.
    pub fn new() -> Self {
        Self
    }

    /// Recover the signer of `message` (the Ethereum prefix is applied here).
    pub fn recover_address(
        &self,
        message: &[u8],
        signature: &EthSignature,
    ) -> Result<Address, SignatureError> {
        recover_address(message, signature)
    }

    /// Recover the signer of an already-hashed message.
    pub fn recover_from_prehash(
        &self,
        message_hash: &Hash,
        signature: &EthSignature,
    ) -> Result<Address, SignatureError> {
        recover_from_prehash(message_hash, signature)
    }

    /// Recover and compare against an expected signer.
    pub fn verify_signer(
        &self,
        message: &[u8],
        signature: &EthSignature,
        expected: Address,
    ) -> RecoveryResult {
        verify_signer(message, signature, expected)
    }

    /// Recover many signatures in parallel.
    pub fn batch_recover(&self, requests: &[RecoveryRequest]) -> BatchRecoveryResult {
        batch_recover(requests)
    }
}

// =============================================================================
// CORE RECOVERY FUNCTIONS
// =============================================================================

/// Recover the address that signed `message` with `personal_sign`.
pub fn recover_address(
    message: &[u8],
    signature: &EthSignature,
) -> Result<Address, SignatureError> {
    let message_hash = hash_ethereum_message(message);
    recover_from_prehash(&message_hash, signature)
}

/// Recover the address that signed a 32-byte digest.
pub fn recover_from_prehash(
    message_hash: &Hash,
    signature: &EthSignature,
) -> Result<Address, SignatureError> {
    let public_key = recover_public_key(message_hash, signature)?;
    address_from_point(&public_key)
}

/// Run the range, low-s and recovery-id checks, then recover the public key.
pub fn recover_public_key(
    message_hash: &Hash,
    signature: &EthSignature,
) -> Result<CurvePoint, SignatureError> {
    let r = u256_from_be_bytes(&signature.r);
    let s = u256_from_be_bytes(&signature.s);

    if !is_valid_scalar(&r) {
        return Err(SignatureError::OutOfRange { component: "r" });
    }
    if !is_valid_scalar(&s) {
        return Err(SignatureError::OutOfRange { component: "s" });
    }
    if !is_low_s(&s) {
        return Err(SignatureError::Malleable);
    }

    let recovery_id = normalize_recovery_id(signature.v)?;
    recover_with_id(message_hash, &r, &s, recovery_id)
}

/// Core recovery for a range-checked `(r, s)` and a recovery id in `0..=3`.
///
/// Ids 2 and 3 select `x = r + n`; for secp256k1 that is below `p` only when
/// `r < p − n`, so realistic signatures never take that branch.
pub fn recover_with_id(
    message_hash: &Hash,
    r: &U256,
    s: &U256,
    recovery_id: u8,
) -> Result<CurvePoint, SignatureError> {
    if recovery_id > 3 {
        return Err(SignatureError::InvalidRecoveryId(recovery_id));
    }

    let x = if recovery_id & 2 != 0 {
        let (x, overflow) = r.overflowing_add(N);
        if overflow || x >= P {
            return Err(RecoveryFailure::CandidateOverflow.into());
        }
        x
    } else {
        *r
    };
    let x = FieldElement::new(x).map_err(|_| RecoveryFailure::CandidateOverflow)?;

    let big_r = CurvePoint::from_x(x, recovery_id & 1 == 1).ok_or(RecoveryFailure::NonResidue)?;
    if !big_r.is_on_curve() {
        return Err(RecoveryFailure::OffCurve.into());
    }

    let z = u256_from_be_bytes(message_hash) % N;
    let r_inv = mod_inv(r, &N).ok_or(SignatureError::OutOfRange { component: "r" })?;
    let u1 = mod_mul(&mod_sub(&U256::zero(), &z, &N), &r_inv, &N);
    let u2 = mod_mul(s, &r_inv, &N);

    let public_key = CurvePoint::generator().mul(&u1).add(&big_r.mul(&u2));

    if public_key.is_infinity() {
        return Err(RecoveryFailure::PointAtInfinity.into());
    }
    if !public_key.is_on_curve() {
        return Err(RecoveryFailure::OffCurve.into());
    }

    Ok(public_key)
}

/// Recover and require the signer to be `expected`.
pub fn verify_signer(
    message: &[u8],
    signature: &EthSignature,
    expected: Address,
) -> RecoveryResult {
    match recover_address(message, signature) {
        Ok(recovered) if recovered == expected => RecoveryResult::valid(recovered),
        Ok(recovered) => RecoveryResult {
            valid: false,
            recovered_address: Some(recovered),
            error: None,
        },
        Err(e) => RecoveryResult::invalid(e),
    }
}

/// Recover many signatures in parallel. Results keep request order.
pub fn batch_recover(requests: &[RecoveryRequest]) -> BatchRecoveryResult {
    use rayon::prelude::*;

    let results: Vec<RecoveryResult> = requests.par_iter().map(recover_single_request).collect();

    BatchRecoveryResult::from_results(results)
}

fn recover_single_request(req: &RecoveryRequest) -> RecoveryResult {
    match req.expected_signer {
        Some(expected) => verify_signer(&req.message, &req.signature, expected),
        None => match recover_address(&req.message, &req.signature) {
            Ok(address) => RecoveryResult::valid(address),
            Err(e) => RecoveryResult::invalid(e),
        },
    }
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Derive the Ethereum address of a public key.
pub fn address_from_point(public_key: &CurvePoint) -> Result<Address, SignatureError> {
    let encoded = public_key
        .to_uncompressed_bytes()
        .ok_or(RecoveryFailure::PointAtInfinity)?;
    let hash = keccak256(&encoded);

    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Ok(address)
}

/// `s ≤ n/2`. The boundary value `n/2` itself is low.
pub fn is_low_s(s: &U256) -> bool {
    *s <= HALF_N
}

/// `0 < value < n`.
pub fn is_valid_scalar(value: &U256) -> bool {
    !value.is_zero() && *value < N
}

/// Map `27/28` and `0/1` to the parity bit.
pub fn normalize_recovery_id(v: u8) -> Result<u8, SignatureError> {
    match v {
        0 | 27 => Ok(0),
        1 | 28 => Ok(1),
        _ => Err(SignatureError::InvalidRecoveryId(v)),
    }
}

/// `n − s`, turning a low-s signature into its malleable twin and back.
pub fn invert_s(s: &[u8; 32]) -> [u8; 32] {
    let s = u256_from_be_bytes(s) % N;
    u256_to_be_bytes(&mod_sub(&U256::zero(), &s, &N))
}

// =============================================================================
// UNIT TESTS
// =============================================================================
