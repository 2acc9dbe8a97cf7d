//! Field and scalar arithmetic for each curve family.
//!
//! Curve25519 and Curve448 hand-roll a limb layout matched to their
//! prime's own shape (radix-2^25.5, split-word 2^224+1) because that
//! reduction is the performance- and constant-time-critical inner loop
//! of point arithmetic on those curves. The NIST curves and the Ed448
//! scalar field carry no such hot loop in this crate (no fixed-base
//! tables, no batch verification), so they're built on the generic
//! [`crate::bignum::BigUint`] reduction via [`modular::ModElement`]
//! instead — see `DESIGN.md` for the tradeoff.

pub mod f25519;
pub mod f448;
pub mod modular;
pub mod p256;
pub mod p384;
pub mod p521;
pub mod scalar25519;
pub mod scalar448;
pub mod scalar_nist;

/// Pseudo-Mersenne field element for `2^255 - 19` (Curve25519 / Ed25519).
pub type Field25519 = f25519::FieldElement;
/// Scalar mod `ℓ` for the Curve25519 / Ed25519 group order.
pub type Scalar25519 = scalar25519::Scalar;
/// Pseudo-Mersenne field element for `2^448 - 2^224 - 1` (Curve448 / Ed448).
pub type Field448 = f448::FieldElement;
/// Scalar mod the Ed448 group order.
pub type Scalar448 = scalar448::Scalar448;
pub use p256::FieldElement as FieldP256;
pub use p384::FieldElement as FieldP384;
pub use p521::FieldElement as FieldP521;
pub use scalar_nist::{ScalarP256, ScalarP384, ScalarP521};
