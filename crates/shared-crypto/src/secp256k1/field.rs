//! Modular arithmetic over 256-bit moduli.
//!
//! The free functions take any odd prime modulus and expect their operands to
//! already be reduced below it. [`FieldElement`] wraps them for the curve
//! prime `p` and keeps the reduction invariant in its constructor.

use super::{u256_from_be_bytes, u256_to_be_bytes, B, P};
use crate::errors::CryptoError;
use primitive_types::{U256, U512};
use std::ops::{Add, Mul, Neg, Sub};

/// `(a + b) mod m` for `a, b < m`.
pub fn mod_add(a: &U256, b: &U256, m: &U256) -> U256 {
    let (sum, carry) = a.overflowing_add(*b);
    if carry || sum >= *m {
        sum.overflowing_sub(*m).0
    } else {
        sum
    }
}

/// `(a - b) mod m` for `a, b < m`.
pub fn mod_sub(a: &U256, b: &U256, m: &U256) -> U256 {
    if a >= b {
        *a - *b
    } else {
        *m - (*b - *a)
    }
}

/// `(a * b) mod m`, widening to 512 bits for the product.
pub fn mod_mul(a: &U256, b: &U256, m: &U256) -> U256 {
    let product = U512::from(*a) * U512::from(*b);
    narrow(product % U512::from(*m))
}

/// `base^exp mod m` by left-to-right square-and-multiply.
pub fn mod_pow(base: &U256, exp: &U256, m: &U256) -> U256 {
    let mut result = U256::one() % *m;
    for i in (0..exp.bits()).rev() {
        result = mod_mul(&result, &result, m);
        if exp.bit(i) {
            result = mod_mul(&result, base, m);
        }
    }
    result
}

/// Multiplicative inverse via Fermat's little theorem (`a^(m-2)`).
///
/// `m` must be prime. Returns `None` for zero, which has no inverse.
pub fn mod_inv(a: &U256, m: &U256) -> Option<U256> {
    let reduced = *a % *m;
    if reduced.is_zero() {
        return None;
    }
    let exponent = *m - U256::from(2u8);
    Some(mod_pow(&reduced, &exponent, m))
}

/// Take the low 256 bits of a value already reduced below a 256-bit modulus.
fn narrow(value: U512) -> U256 {
    let mut bytes = [0u8; 64];
    value.to_big_endian(&mut bytes);
    U256::from_big_endian(&bytes[32..])
}

/// Integer modulo the secp256k1 prime `p`. Always fully reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldElement(U256);

impl FieldElement {
    /// Additive identity.
    pub const ZERO: Self = Self(U256([0, 0, 0, 0]));

    /// Multiplicative identity.
    pub const ONE: Self = Self(U256([1, 0, 0, 0]));

    /// Wrap a value, rejecting anything not below `p`.
    pub fn new(value: U256) -> Result<Self, CryptoError> {
        if value >= P {
            return Err(CryptoError::FieldElementOutOfRange);
        }
        Ok(Self(value))
    }

    /// Wrap a value, reducing it modulo `p`.
    pub fn reduce(value: U256) -> Self {
        Self(value % P)
    }

    /// Decode a 32-byte big-endian encoding, rejecting values `>= p`.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self, CryptoError> {
        Self::new(u256_from_be_bytes(bytes))
    }

    /// 32-byte big-endian encoding.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        u256_to_be_bytes(&self.0)
    }

    /// The underlying integer.
    pub fn value(&self) -> U256 {
        self.0
    }

    /// Whether this is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether the canonical integer is odd.
    pub fn is_odd(&self) -> bool {
        self.0.bit(0)
    }

    /// `self²`.
    pub fn square(&self) -> Self {
        *self * *self
    }

    /// `self^exp`.
    pub fn pow(&self, exp: &U256) -> Self {
        Self(mod_pow(&self.0, exp, &P))
    }

    /// Multiplicative inverse, `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        mod_inv(&self.0, &P).map(Self)
    }

    /// Square root via `a^((p+1)/4)`, valid because `p ≡ 3 (mod 4)`.
    ///
    /// Returns `None` when `self` is not a quadratic residue: the candidate is
    /// squared back and compared, so a non-residue never yields a root.
    pub fn sqrt(&self) -> Option<Self> {
        let exponent = (P + U256::one()) >> 2;
        let candidate = self.pow(&exponent);
        if candidate.square() == *self {
            Some(candidate)
        } else {
            None
        }
    }

    /// Right-hand side of the curve equation, `x³ + 7`.
    pub fn curve_rhs(&self) -> Self {
        self.square() * *self + Self(B)
    }
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(mod_add(&self.0, &rhs.0, &P))
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(mod_sub(&self.0, &rhs.0, &P))
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(mod_mul(&self.0, &rhs.0, &P))
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}
