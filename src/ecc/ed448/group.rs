//! Edwards448 group law.
//!
//! Ed448 uses the untwisted Edwards curve `x² + y² = 1 + d·x²·y²` with
//! `d = -39081` (`a = 1`, unlike Ed25519's `a = -1`), so point addition
//! uses the unified Bernstein-Lange formula for the untwisted case
//! directly (no twist correction term), in projective `(X:Y:Z)`
//! coordinates per `spec.md` §4.4.

use crate::field::f448::FieldElement;
use crate::field::scalar448::Scalar448;

fn d() -> FieldElement {
    FieldElement::ZERO.sub(&FieldElement([39081, 0, 0, 0, 0, 0, 0, 0]))
}

#[derive(Clone, Copy)]
pub(crate) struct EdPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

/// Standard Ed448 base point (RFC 8032 §5.2.1), little-endian `y`, top
/// bit of the 57th byte is the sign of `x`.
const BASE_POINT_BYTES: [u8; 57] = [
    0x14, 0xfa, 0x30, 0xf2, 0x5b, 0x79, 0x08, 0x98, 0xad, 0xc8, 0xd7, 0x4e, 0x2c, 0x13, 0xbd, 0xfd,
    0xc4, 0x39, 0x7c, 0xe6, 0x1c, 0xff, 0xd3, 0x3a, 0xd7, 0xc2, 0xa0, 0x05, 0x1e, 0x9c, 0x78, 0x87,
    0x40, 0x98, 0xa3, 0x6c, 0x73, 0x73, 0xea, 0x4b, 0x62, 0xc7, 0xc9, 0x56, 0x37, 0x20, 0x76, 0x88,
    0x24, 0xbc, 0xb6, 0x6e, 0x71, 0x46, 0x3f, 0x69, 0x00,
];

impl EdPoint {
    pub(crate) const IDENTITY: Self = Self {
        x: FieldElement::ZERO,
        y: FieldElement::ONE,
        z: FieldElement::ONE,
    };

    /// Unified addition law for the untwisted (`a = 1`) Edwards curve;
    /// also correct for doubling (`self` aliasing `other`).
    pub(crate) fn add(&self, other: &Self) -> Self {
        let a = self.z.mul(&other.z);
        let b = a.square();
        let c = self.x.mul(&other.x);
        let dd = self.y.mul(&other.y);
        let e = d().mul(&c).mul(&dd);
        let f = b.sub(&e);
        let g = b.add(&e);
        let x3 = a
            .mul(&f)
            .mul(&(self.x.add(&self.y).mul(&other.x.add(&other.y)).sub(&c).sub(&dd)));
        let y3 = a.mul(&g).mul(&dd.sub(&c));
        let z3 = f.mul(&g);
        Self { x: x3, y: y3, z: z3 }
    }

    pub(crate) fn double(&self) -> Self {
        self.add(self)
    }

    pub(crate) fn neg(&self) -> Self {
        Self {
            x: self.x.neg(),
            y: self.y,
            z: self.z,
        }
    }

    pub(crate) fn to_bytes(&self) -> [u8; 57] {
        let zinv = self.z.invert();
        let x = self.x.mul(&zinv);
        let y = self.y.mul(&zinv);
        let mut out = [0u8; 57];
        let y_bytes = y.to_bytes();
        out[..56].copy_from_slice(&y_bytes);
        out[56] = (x.is_negative() as u8) << 7;
        out
    }

    pub(crate) fn decompress(s: &[u8; 57]) -> Result<Self, crate::error::EccError> {
        let mut y_bytes = [0u8; 56];
        y_bytes.copy_from_slice(&s[..56]);
        let y = FieldElement::from_bytes(&y_bytes);
        let sign = (s[56] >> 7) & 1;

        let yy = y.square();
        let u = yy.sub(&FieldElement::ONE);
        let v = d().mul(&yy).sub(&FieldElement::ONE);
        let v_inv = v.invert();
        let candidate_sq = u.mul(&v_inv);
        let mut x = candidate_sq.sqrt_candidate();

        // verify x^2 == candidate_sq
        if x.square() != candidate_sq {
            return Err(crate::error::EccError::InvalidPointEncoding);
        }
        if x.is_zero_repr() && sign == 1 {
            return Err(crate::error::EccError::InvalidPointEncoding);
        }
        if x.is_negative() as u8 != sign {
            x = x.neg();
        }

        Ok(Self {
            x,
            y,
            z: FieldElement::ONE,
        })
    }

    pub(crate) fn base_point() -> Self {
        Self::decompress(&BASE_POINT_BYTES).expect("base point encoding is valid")
    }

    /// Constant-time double-and-add scalar multiplication, same
    /// always-compute-both-branches construction used for Ed25519.
    pub(crate) fn scalar_mul(&self, scalar: &Scalar448) -> Self {
        let bytes = scalar.to_bytes_be(56);
        let mut result = Self::IDENTITY;
        for byte in bytes.iter() {
            for bit_idx in (0..8).rev() {
                let bit = (byte >> bit_idx) & 1;
                let doubled = result.double();
                let added = doubled.add(self);
                result = Self::select(bit as u32, &added, &doubled);
            }
        }
        result
    }

    pub(crate) fn scalar_mul_base(scalar: &Scalar448) -> Self {
        Self::base_point().scalar_mul(scalar)
    }

    fn select(bit: u32, a: &Self, b: &Self) -> Self {
        let mask = 0u64.wrapping_sub(bit as u64);
        let pick = |x: &FieldElement, y: &FieldElement| -> FieldElement {
            let mut out = [0u64; 8];
            for i in 0..8 {
                out[i] = (x.0[i] & mask) | (y.0[i] & !mask);
            }
            FieldElement(out)
        };
        Self {
            x: pick(&a.x, &b.x),
            y: pick(&a.y, &b.y),
            z: pick(&a.z, &b.z),
        }
    }
}

impl FieldElement {
    pub(crate) fn is_zero_repr(&self) -> bool {
        self.normalized().0 == FieldElement::ZERO.0
    }
}
