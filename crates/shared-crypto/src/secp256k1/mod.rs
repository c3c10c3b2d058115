//! # secp256k1
//!
//! Field and group arithmetic over the curve `y² = x³ + 7` used by Bitcoin
//! and Ethereum.
//!
//! - [`field`]: modular arithmetic over any 256-bit modulus, plus the
//!   [`FieldElement`] type for integers modulo `p`.
//! - [`point`]: affine [`CurvePoint`] with the infinity identity and scalar
//!   multiplication.
//!
//! Scalars (private keys, `r`, `s`, message digests) live modulo the group
//! order [`N`] and use the free functions in [`field`] directly.

pub mod field;
pub mod point;

pub use field::{mod_add, mod_inv, mod_mul, mod_pow, mod_sub, FieldElement};
pub use point::CurvePoint;

use primitive_types::U256;

/// Field prime `p = 2²⁵⁶ − 2³² − 977`.
pub const P: U256 = U256([
    0xFFFF_FFFE_FFFF_FC2F,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
    0xFFFF_FFFF_FFFF_FFFF,
]);

/// Group order `n`.
pub const N: U256 = U256([
    0xBFD2_5E8C_D036_4141,
    0xBAAE_DCE6_AF48_A03B,
    0xFFFF_FFFF_FFFF_FFFE,
    0xFFFF_FFFF_FFFF_FFFF,
]);

/// `n / 2`, the largest `s` accepted in low-s form.
pub const HALF_N: U256 = U256([
    0xDFE9_2F46_681B_20A0,
    0x5D57_6E73_57A4_501D,
    0xFFFF_FFFF_FFFF_FFFF,
    0x7FFF_FFFF_FFFF_FFFF,
]);

/// Curve constant `b` in `y² = x³ + b`.
pub const B: U256 = U256([7, 0, 0, 0]);

/// Generator x-coordinate.
pub const GX: U256 = U256([
    0x59F2_815B_16F8_1798,
    0x029B_FCDB_2DCE_28D9,
    0x55A0_6295_CE87_0B07,
    0x79BE_667E_F9DC_BBAC,
]);

/// Generator y-coordinate.
pub const GY: U256 = U256([
    0x9C47_D08F_FB10_D4B8,
    0xFD17_B448_A685_5419,
    0x5DA4_FBFC_0E11_08A8,
    0x483A_DA77_26A3_C465,
]);

/// Decode a 32-byte big-endian integer.
pub fn u256_from_be_bytes(bytes: &[u8; 32]) -> U256 {
    U256::from_big_endian(bytes)
}

/// Encode an integer as 32 big-endian bytes.
pub fn u256_to_be_bytes(value: &U256) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    bytes
}
