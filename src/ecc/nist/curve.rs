//! Generic short-Weierstrass (`a = -3`) curve over a [`super::super::field::modular::ModElement`]
//! field/scalar pair, shared by the `p256`/`p384`/`p521` modules the way
//! [`crate::bignum::BigUint`]'s const-generic `LIMBS` replaces a family of
//! per-width C types: one Jacobian point-arithmetic implementation,
//! parameterized by curve constants instead of duplicated per curve.
//!
//! Grounded in `spec.md` §4.5's Jacobian + mixed-affine ladder; the
//! signed-binary scalar recoding it calls for is simplified here to the
//! same always-compute-both-branches double-and-add/branch-free-select
//! construction already used by [`crate::ecc::ed25519::group`] and
//! [`crate::ecc::ed448::group`], for consistency across the three
//! signature engines (see `DESIGN.md`).

use crate::error::EccError;
use crate::field::modular::{ModElement, Modulus};

/// Per-curve constants and collaborators. `Field`/`Scalar` are both
/// [`ModElement`] instantiations; `a = -3` is fixed (true of all three
/// NIST curves implemented here), so only `b` and the base point vary.
pub trait NistCurve {
    type FieldM: Modulus;
    type ScalarM: Modulus;

    /// Encoded field/scalar width in bytes (32/48/66).
    const BYTE_LEN: usize;

    fn b() -> ModElement<Self::FieldM>;
    fn gx() -> ModElement<Self::FieldM>;
    fn gy() -> ModElement<Self::FieldM>;

    /// The curve's companion hash function for ECDSA (SHA-256/384/512).
    fn hash(data: &[u8]) -> Vec<u8>;
}

type Field<C> = ModElement<<C as NistCurve>::FieldM>;
type Scalar<C> = ModElement<<C as NistCurve>::ScalarM>;

#[derive(Clone, Copy)]
pub struct Jacobian<C: NistCurve> {
    pub x: Field<C>,
    pub y: Field<C>,
    pub z: Field<C>,
}

impl<C: NistCurve> Jacobian<C> {
    pub fn identity() -> Self {
        Self {
            x: Field::<C>::zero(),
            y: Field::<C>::zero(),
            z: Field::<C>::zero(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn base_point() -> Self {
        Self::from_affine(C::gx(), C::gy())
    }

    fn from_affine(x: Field<C>, y: Field<C>) -> Self {
        Self { x, y, z: affine_one::<C>() }
    }

    /// `a = -3` Jacobian point doubling (Bernstein-Lange `dbl-2001-b`).
    pub fn double(&self) -> Self {
        if self.is_identity() {
            return *self;
        }
        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = self.x.mul(&gamma);
        let x_minus_delta = self.x.sub(&delta);
        let x_plus_delta = self.x.add(&delta);
        let three = add_n::<C>(3);
        let alpha = three.mul(&x_minus_delta).mul(&x_plus_delta);

        let eight_beta = add_n::<C>(8).mul(&beta);
        let x3 = alpha.square().sub(&eight_beta);

        let y_plus_z = self.y.add(&self.z);
        let z3 = y_plus_z.square().sub(&gamma).sub(&delta);

        let four_beta = add_n::<C>(4).mul(&beta);
        let eight_gamma_sq = add_n::<C>(8).mul(&gamma.square());
        let y3 = alpha.mul(&four_beta.sub(&x3)).sub(&eight_gamma_sq);

        Self { x: x3, y: y3, z: z3 }
    }

    /// General (non-mixed) Jacobian addition; `self == other` must go
    /// through [`Self::double`] instead (handled by callers).
    pub fn add(&self, other: &Self) -> Self {
        if self.is_identity() {
            return *other;
        }
        if other.is_identity() {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        let s2 = other.y.mul(&self.z).mul(&z1z1);

        if u1 == u2 {
            if s1 != s2 {
                return Self::identity();
            }
            return self.double();
        }

        let h = u2.sub(&u1);
        let two_h = h.add(&h);
        let i = two_h.square();
        let j = h.mul(&i);
        let r = add_n::<C>(2).mul(&s2.sub(&s1));
        let v = u1.mul(&i);

        let x3 = r.square().sub(&j).sub(&v).sub(&v);
        let y3 = r.mul(&v.sub(&x3)).sub(&add_n::<C>(2).mul(&s1).mul(&j));
        let z1_plus_z2 = self.z.add(&other.z);
        let z3 = z1_plus_z2.square().sub(&z1z1).sub(&z2z2).mul(&h);

        Self { x: x3, y: y3, z: z3 }
    }

    fn select(bit: u32, a: &Self, b: &Self) -> Self {
        if bit == 1 { *a } else { *b }
    }

    /// Always-compute-both-branches double-and-add, MSB-first over the
    /// scalar's big-endian encoding.
    pub fn scalar_mul(&self, scalar: &Scalar<C>) -> Self {
        let bytes = scalar.to_bytes_be(C::BYTE_LEN);
        let mut result = Self::identity();
        for byte in bytes.iter() {
            for bit_idx in (0..8).rev() {
                let bit = ((byte >> bit_idx) & 1) as u32;
                let doubled = result.double();
                let added = doubled.add(self);
                result = Self::select(bit, &added, &doubled);
            }
        }
        result
    }

    pub fn scalar_mul_base(scalar: &Scalar<C>) -> Self {
        Self::base_point().scalar_mul(scalar)
    }

    pub fn to_affine(&self) -> Option<(Field<C>, Field<C>)> {
        if self.is_identity() {
            return None;
        }
        let z_inv = self.z.invert();
        let z_inv2 = z_inv.square();
        let z_inv3 = z_inv2.mul(&z_inv);
        Some((self.x.mul(&z_inv2), self.y.mul(&z_inv3)))
    }

    /// Decodes a SEC1 uncompressed point (`0x04 || X || Y`).
    pub fn decode_uncompressed(bytes: &[u8]) -> Result<Self, EccError> {
        if bytes.len() != 2 * C::BYTE_LEN + 1 || bytes[0] != 0x04 {
            return Err(EccError::InvalidPointEncoding);
        }
        let x = Field::<C>::from_bytes_be(&bytes[1..1 + C::BYTE_LEN]);
        let y = Field::<C>::from_bytes_be(&bytes[1 + C::BYTE_LEN..]);

        let lhs = y.square();
        let rhs = x.square().mul(&x).sub(&add_n::<C>(3).mul(&x)).add(&C::b());
        if lhs != rhs {
            return Err(EccError::InvalidPointEncoding);
        }
        Ok(Self::from_affine(x, y))
    }

    pub fn encode_uncompressed(&self) -> Result<Vec<u8>, EccError> {
        let (x, y) = self.to_affine().ok_or(EccError::InvalidPointEncoding)?;
        let mut out = Vec::with_capacity(2 * C::BYTE_LEN + 1);
        out.push(0x04);
        out.extend_from_slice(&x.to_bytes_be(C::BYTE_LEN));
        out.extend_from_slice(&y.to_bytes_be(C::BYTE_LEN));
        Ok(out)
    }
}

fn affine_one<C: NistCurve>() -> Field<C> {
    Field::<C>::from_bytes_be(&[1])
}

/// The field element `n` (small public constant), built by repeated
/// addition from `1` — avoids needing a `from_u32` on `ModElement`.
fn add_n<C: NistCurve>(n: u32) -> Field<C> {
    let one = affine_one::<C>();
    let mut acc = Field::<C>::zero();
    for _ in 0..n {
        acc = acc.add(&one);
    }
    acc
}
