//! Points on secp256k1.
//!
//! [`CurvePoint`] is the public, affine representation. Scalar multiplication
//! accumulates in Jacobian coordinates `(X, Y, Z) ↦ (X/Z², Y/Z³)` so that only
//! one field inversion is needed per multiplication, then converts back.

use super::field::FieldElement;
use super::{GX, GY};
use crate::errors::CryptoError;
use primitive_types::U256;

/// A point on `y² = x³ + 7`, or the group identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurvePoint {
    /// The point at infinity.
    Infinity,
    /// A finite point in affine coordinates.
    Affine {
        /// x-coordinate
        x: FieldElement,
        /// y-coordinate
        y: FieldElement,
    },
}

impl CurvePoint {
    /// The generator `G`.
    pub fn generator() -> Self {
        Self::Affine {
            x: FieldElement::reduce(GX),
            y: FieldElement::reduce(GY),
        }
    }

    /// Build an affine point, rejecting coordinates off the curve.
    pub fn new(x: FieldElement, y: FieldElement) -> Result<Self, CryptoError> {
        let point = Self::Affine { x, y };
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(CryptoError::PointNotOnCurve)
        }
    }

    /// Decompress: the point with this x-coordinate and the requested
    /// y parity. `None` if `x³ + 7` has no square root.
    pub fn from_x(x: FieldElement, odd: bool) -> Option<Self> {
        let y = x.curve_rhs().sqrt()?;
        let y = if y.is_odd() == odd { y } else { -y };
        Some(Self::Affine { x, y })
    }

    /// Whether this is the identity.
    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Whether the point satisfies the curve equation. The identity counts as
    /// on the curve; callers that must reject it check [`Self::is_infinity`].
    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Infinity => true,
            Self::Affine { x, y } => y.square() == x.curve_rhs(),
        }
    }

    /// Affine coordinates, `None` for the identity.
    pub fn coordinates(&self) -> Option<(FieldElement, FieldElement)> {
        match *self {
            Self::Infinity => None,
            Self::Affine { x, y } => Some((x, y)),
        }
    }

    /// `−P`.
    pub fn negate(&self) -> Self {
        match *self {
            Self::Infinity => Self::Infinity,
            Self::Affine { x, y } => Self::Affine { x, y: -y },
        }
    }

    /// Group addition.
    pub fn add(&self, other: &Self) -> Self {
        let (x1, y1, x2, y2) = match (*self, *other) {
            (Self::Infinity, q) => return q,
            (p, Self::Infinity) => return p,
            (Self::Affine { x: x1, y: y1 }, Self::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if x1 == x2 {
            // Same point doubles; otherwise y2 = −y1 and the sum is the identity.
            return if y1 == y2 {
                self.double()
            } else {
                Self::Infinity
            };
        }

        let Some(inv) = (x2 - x1).invert() else {
            return Self::Infinity;
        };
        let lambda = (y2 - y1) * inv;
        let x3 = lambda.square() - x1 - x2;
        let y3 = lambda * (x1 - x3) - y1;
        Self::Affine { x: x3, y: y3 }
    }

    /// `2P` with the tangent-line formula.
    pub fn double(&self) -> Self {
        let Self::Affine { x, y } = *self else {
            return Self::Infinity;
        };
        if y.is_zero() {
            return Self::Infinity;
        }

        let two_y = y + y;
        let Some(inv) = two_y.invert() else {
            return Self::Infinity;
        };
        let x_sq = x.square();
        let lambda = (x_sq + x_sq + x_sq) * inv;
        let x3 = lambda.square() - x - x;
        let y3 = lambda * (x - x3) - y;
        Self::Affine { x: x3, y: y3 }
    }

    /// `k·P` by double-and-add over the bits of `k`, most significant first.
    ///
    /// `k` is not reduced modulo the group order, so `n·G` is the identity.
    pub fn mul(&self, k: &U256) -> Self {
        let Self::Affine { x, y } = *self else {
            return Self::Infinity;
        };

        let mut acc = Jacobian::INFINITY;
        for i in (0..k.bits()).rev() {
            acc = acc.double();
            if k.bit(i) {
                acc = acc.add_affine(x, y);
            }
        }
        acc.to_affine()
    }

    /// 64-byte `x ∥ y` encoding without a prefix byte. `None` for the identity.
    pub fn to_uncompressed_bytes(&self) -> Option<[u8; 64]> {
        let (x, y) = self.coordinates()?;
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&x.to_be_bytes());
        out[32..].copy_from_slice(&y.to_be_bytes());
        Some(out)
    }

    /// Parse a 64-byte `x ∥ y` encoding, checking range and curve membership.
    pub fn from_uncompressed_bytes(bytes: &[u8; 64]) -> Result<Self, CryptoError> {
        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[..32]);
        y.copy_from_slice(&bytes[32..]);
        Self::new(FieldElement::from_be_bytes(&x)?, FieldElement::from_be_bytes(&y)?)
    }
}

/// Jacobian accumulator. `z == 0` encodes the identity.
#[derive(Clone, Copy)]
struct Jacobian {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

impl Jacobian {
    const INFINITY: Self = Self {
        x: FieldElement::ONE,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    // dbl-2009-l, a = 0
    fn double(&self) -> Self {
        if self.is_infinity() || self.y.is_zero() {
            return Self::INFINITY;
        }

        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let t = (self.x + b).square() - a - c;
        let d = t + t;
        let e = a + a + a;
        let f = e.square();

        let x3 = f - d - d;
        let eight_c = {
            let two = c + c;
            let four = two + two;
            four + four
        };
        let y3 = e * (d - x3) - eight_c;
        let yz = self.y * self.z;
        let z3 = yz + yz;

        Self { x: x3, y: y3, z: z3 }
    }

    // Mixed addition with an affine point (Z2 = 1).
    fn add_affine(&self, x2: FieldElement, y2: FieldElement) -> Self {
        if self.is_infinity() {
            return Self {
                x: x2,
                y: y2,
                z: FieldElement::ONE,
            };
        }

        let z1z1 = self.z.square();
        let u2 = x2 * z1z1;
        let s2 = y2 * self.z * z1z1;
        let h = u2 - self.x;
        let r = s2 - self.y;

        if h.is_zero() {
            return if r.is_zero() {
                self.double()
            } else {
                Self::INFINITY
            };
        }

        let hh = h.square();
        let hhh = hh * h;
        let u1hh = self.x * hh;

        let x3 = r.square() - hhh - u1hh - u1hh;
        let y3 = r * (u1hh - x3) - self.y * hhh;
        let z3 = self.z * h;

        Self { x: x3, y: y3, z: z3 }
    }

    fn to_affine(self) -> CurvePoint {
        let Some(z_inv) = self.z.invert() else {
            return CurvePoint::Infinity;
        };
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2 * z_inv;
        CurvePoint::Affine {
            x: self.x * z_inv2,
            y: self.y * z_inv3,
        }
    }
}
