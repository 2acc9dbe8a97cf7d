//! Edwards25519 group law and scalar multiplication.
//!
//! The point-addition and doubling formulas (`GeP1`, `GeP2`, `GeP3`,
//! `GeCached`, `decompress`/`to_bytes`) are ground in
//! `signatures/ed25519/group.rs`, which already implements these
//! independently of any precomputed table. What that file does *not*
//! have a usable version of is scalar multiplication: its
//! `from_scalar_mul`/`double_scalar_mul` both depend on a missing
//! `table` module of precomputed base-point multiples. This module
//! replaces them with the simple constant-time double-and-add scalar
//! multiplication described for this crate: every iteration computes
//! both the doubled and the doubled-and-added point and selects between
//! them with a branch-free mask, so control flow never depends on the
//! scalar's bits.

use crate::field::f25519::FieldElement;
use crate::field::scalar25519::Scalar;

const D: FieldElement = FieldElement([
    -10913610, 13857413, -15372611, 6949391, 114729, -8787816, -6275908, -3247719, -18696448,
    -12055116,
]);
const D2: FieldElement = FieldElement([
    -21827239, -5839606, -30745221, 13898782, 229458, 15978800, -12551817, -6495438, 29715968,
    9444199,
]);
const SQRTM1: FieldElement = FieldElement([
    -32595792, -7943725, 9377950, 3500415, 12389472, -272473, -25146209, -2005654, 326686,
    11406482,
]);

/// Standard Ed25519 base point, compressed (`y = 4/5`, `x` positive).
const BASE_POINT_BYTES: [u8; 32] = [
    0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66,
];

/// Extended projective coordinates `(X:Y:Z:T)`, `x = X/Z`, `y = Y/Z`,
/// `x*y = T/Z`.
#[derive(Clone, Copy)]
pub(crate) struct GeP3 {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
    pub(crate) t: FieldElement,
}

/// Projective coordinates `(X:Y:Z)` without the `T` extension, used as an
/// intermediate during doubling and at the start/end of the ladder.
#[derive(Clone, Copy)]
pub(crate) struct GeP2 {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
}

/// The output of an addition/doubling formula before it's folded back
/// into extended coordinates.
pub(crate) struct GeP1 {
    x: FieldElement,
    y: FieldElement,
    z: FieldElement,
    t: FieldElement,
}

/// A point precomputed for fast repeated addition (`y+x`, `y-x`, `z`,
/// `2*d*t`).
pub(crate) struct GeCached {
    yplusx: FieldElement,
    yminusx: FieldElement,
    z: FieldElement,
    t2d: FieldElement,
}

impl GeP3 {
    pub(crate) const ONE: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
        t: FieldElement::ZERO,
    };

    pub(crate) fn from_gep1(g: &GeP1) -> Self {
        Self {
            x: g.x * g.t,
            y: g.y * g.z,
            z: g.z * g.t,
            t: g.x * g.y,
        }
    }

    pub(crate) fn double(&self) -> GeP1 {
        GeP2::from_gep3(self).double()
    }

    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;
        let mut out = y.to_bytes();
        out[31] ^= (x.is_negative() as u8) << 7;
        out
    }

    /// Decodes a compressed point; `Err` if the encoding is not on the
    /// curve.
    pub(crate) fn decompress(s: &[u8; 32]) -> Result<Self, crate::error::EccError> {
        let mut h = Self {
            x: FieldElement::ZERO,
            y: FieldElement::from_bytes(s),
            z: FieldElement::ONE,
            t: FieldElement::ZERO,
        };

        let mut u = h.y.square();
        let mut v = u * D;
        u = u - h.z;
        v = v + h.z;

        let v3 = v.square() * v;
        h.x = v3.square();
        h.x = h.x * v;
        h.x = h.x * u;
        h.x = h.x.pow22523();
        h.x = h.x * v3;
        h.x = h.x * u;

        let vxx = h.x.square() * v;
        let mut check = vxx - u;
        if check.is_non_zero() == 1 {
            check = vxx + u;
            if check.is_non_zero() == 1 {
                return Err(crate::error::EccError::InvalidPointEncoding);
            }
            h.x = h.x * SQRTM1;
        }

        let sign = (s[31] >> 7) as i32;
        if h.x.is_negative() == sign {
            h.x = -h.x;
        }
        h.t = h.x * h.y;
        Ok(h)
    }

    /// The standard Ed25519 base point.
    pub(crate) fn base_point() -> Self {
        Self::decompress(&BASE_POINT_BYTES).expect("base point encoding is valid")
    }

    /// `a * self` via constant-time double-and-add: every bit computes
    /// both the doubled point and the doubled-and-added point, and
    /// selects between them with a branch-free mask so that control flow
    /// never depends on `a`'s bits.
    pub(crate) fn scalar_mul(&self, a: &Scalar) -> Self {
        let cached = GeCached::from_p3(self);
        let mut result = Self::ONE;
        for bit in (0..256).rev() {
            let doubled = Self::from_gep1(&result.double());
            let added = Self::from_gep1(&GeP1::from_sum(&doubled, &cached));
            let b = ((a.0[bit / 8] >> (bit % 8)) & 1) as u32;
            result = Self::select(b, &added, &doubled);
        }
        result
    }

    /// `a * B`, where `B` is the standard base point.
    pub(crate) fn scalar_mul_base(a: &Scalar) -> Self {
        Self::base_point().scalar_mul(a)
    }

    /// `a * self + b * B`, used by Ed25519 signature verification.
    pub(crate) fn double_scalar_mul_base(&self, a: &Scalar, b: &Scalar) -> Self {
        let p1 = self.scalar_mul(a);
        let p2 = Self::scalar_mul_base(b);
        Self::from_gep1(&GeP1::from_sum(&p1, &GeCached::from_p3(&p2)))
    }

    fn select(bit: u32, a: &Self, b: &Self) -> Self {
        let mut x = b.x;
        x.conditional_move(&a.x, bit);
        let mut y = b.y;
        y.conditional_move(&a.y, bit);
        let mut z = b.z;
        z.conditional_move(&a.z, bit);
        let mut t = b.t;
        t.conditional_move(&a.t, bit);
        Self { x, y, z, t }
    }
}

impl GeP2 {
    const ONE: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    pub(crate) fn from_gep3(g: &GeP3) -> Self {
        Self {
            x: g.x,
            y: g.y,
            z: g.z,
        }
    }

    pub(crate) fn from_gep1(g: &GeP1) -> Self {
        Self {
            x: g.x * g.t,
            y: g.y * g.z,
            z: g.z * g.t,
        }
    }

    pub(crate) fn double(&self) -> GeP1 {
        let xx = self.x.square();
        let yy = self.y.square();
        let b = self.z.square();
        let b = b + b;
        let a = self.x + self.y;
        let aa = a.square();
        let y = yy + xx;
        let z = yy - xx;
        let x = aa - y;
        let t = b - z;
        GeP1 { x, y, z, t }
    }

    pub(crate) fn to_bytes(&self) -> [u8; 32] {
        let recip = self.z.invert();
        let x = self.x * recip;
        let y = self.y * recip;
        let mut out = y.to_bytes();
        out[31] ^= (x.is_negative() as u8) << 7;
        out
    }
}

impl GeP1 {
    pub(crate) fn from_sum(a: &GeP3, b: &GeCached) -> Self {
        let y1_plus_x1 = a.y + a.x;
        let y1_minus_x1 = a.y - a.x;
        let a_ = y1_plus_x1 * b.yplusx;
        let b_ = y1_minus_x1 * b.yminusx;
        let c = b.t2d * a.t;
        let d = a.z * b.z;
        let d = d + d;
        Self {
            x: a_ - b_,
            y: a_ + b_,
            z: d + c,
            t: d - c,
        }
    }

    pub(crate) fn from_difference(a: &GeP3, b: &GeCached) -> Self {
        let y1_plus_x1 = a.y + a.x;
        let y1_minus_x1 = a.y - a.x;
        let a_ = y1_plus_x1 * b.yminusx;
        let b_ = y1_minus_x1 * b.yplusx;
        let c = b.t2d * a.t;
        let d = a.z * b.z;
        let d = d + d;
        Self {
            x: a_ - b_,
            y: a_ + b_,
            z: d - c,
            t: d + c,
        }
    }
}

impl GeCached {
    pub(crate) const ZERO: Self = Self {
        yplusx: FieldElement::ONE,
        yminusx: FieldElement::ONE,
        z: FieldElement::ONE,
        t2d: FieldElement::ZERO,
    };

    pub(crate) fn from_p3(g: &GeP3) -> Self {
        Self {
            yplusx: g.y + g.x,
            yminusx: g.y - g.x,
            z: g.z,
            t2d: g.t * D2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_point_decompresses() {
        let b = GeP3::base_point();
        assert_eq!(b.to_bytes(), BASE_POINT_BYTES);
    }

    #[test]
    fn scalar_mul_by_one_is_identity_map() {
        let one = Scalar({
            let mut b = [0u8; 32];
            b[0] = 1;
            b
        });
        let b = GeP3::base_point();
        assert_eq!(b.scalar_mul(&one).to_bytes(), b.to_bytes());
    }

    #[test]
    fn scalar_mul_by_zero_is_identity_point() {
        let zero = Scalar([0u8; 32]);
        let b = GeP3::base_point();
        assert_eq!(b.scalar_mul(&zero).to_bytes(), GeP3::ONE.to_bytes());
    }
}
