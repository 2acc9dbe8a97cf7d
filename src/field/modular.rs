//! Generic phantom-typed modular integer, used for the NIST-curve field
//! and scalar types and for the Ed448 scalar field.
//!
//! `Field25519`/`Field448` hand-roll a limb layout matched to their
//! prime's shape because that reduction is the hot inner loop of
//! Curve25519/448 point arithmetic. The NIST primes and the two
//! 448/521-bit group orders don't carry that same performance pressure
//! in this crate (no fixed-base tables, no batched signature
//! verification), so they're built on the already-verified generic
//! [`BigUint`] reduction instead of five more hand-written Solinas
//! reducers — see `DESIGN.md` for the tradeoff.

use crate::bignum::BigUint;
use std::marker::PhantomData;

/// Bit width shared by every NIST-curve field/scalar and by the Ed448
/// scalar field: 544 bits (17 u32 limbs) comfortably covers P-521.
pub const NIST_LIMBS: usize = 17;

pub type Wide = BigUint<NIST_LIMBS>;

/// Supplies the modulus for a [`ModElement`] marker type.
pub trait Modulus: Copy + Clone {
    fn modulus() -> Wide;
}

/// A value modulo `M::modulus()`, always kept in `0..modulus`.
#[derive(Clone, Copy)]
pub struct ModElement<M: Modulus>(Wide, PhantomData<M>);

impl<M: Modulus> ModElement<M> {
    pub fn zero() -> Self {
        Self(Wide::ZERO, PhantomData)
    }

    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        let raw = Wide::from_bytes_be(bytes).expect("width covers all supported curves");
        Self(raw.rem_euclid(&M::modulus()).expect("modulus is non-zero"), PhantomData)
    }

    pub fn to_bytes_be(&self, len: usize) -> Vec<u8> {
        let full = self.0.to_bytes_be();
        full[full.len() - len..].to_vec()
    }

    pub fn add(&self, other: &Self) -> Self {
        Self(
            self.0.uadd(&other.0).rem_euclid(&M::modulus()).expect("modulus nonzero"),
            PhantomData,
        )
    }

    pub fn sub(&self, other: &Self) -> Self {
        let m = M::modulus();
        Self(
            self.0.uadd(&m).usub(&other.0).rem_euclid(&m).expect("modulus nonzero"),
            PhantomData,
        )
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self(
            self.0.umul(&other.0).rem_euclid(&M::modulus()).expect("modulus nonzero"),
            PhantomData,
        )
    }

    pub fn square(&self) -> Self {
        self.mul(self)
    }

    pub fn neg(&self) -> Self {
        Self::zero().sub(self)
    }

    /// Modular inverse via `BigUint::inv` (extended Euclid).
    pub fn invert(&self) -> Self {
        Self(self.0.inv(&M::modulus()).expect("invertible"), PhantomData)
    }

    pub fn pow(&self, exp: &Wide) -> Self {
        Self(
            self.0
                .modpow(exp, &M::modulus())
                .expect("modulus nonzero"),
            PhantomData,
        )
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative_repr(&self) -> bool {
        // "negative" for a point-compression sign bit means odd in the
        // canonical `0..modulus` representative.
        self.to_bytes_be(1)[0] & 1 == 1
    }

    pub fn conditional_swap(a: &mut Self, b: &mut Self, bit: u8) {
        if bit == 1 {
            std::mem::swap(a, b);
        }
    }

    pub fn inner(&self) -> &Wide {
        &self.0
    }
}

impl<M: Modulus> PartialEq for ModElement<M> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<M: Modulus> Eq for ModElement<M> {}
