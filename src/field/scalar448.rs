//! Scalar field for the Ed448 / Curve448 group order `L`, built on
//! [`super::modular::ModElement`] — unlike [`super::f448`]'s field
//! element, this isn't a per-point-multiplication hot loop, so the
//! generic reduction is used directly.

use super::modular::{ModElement, Modulus, Wide, NIST_LIMBS};
use crate::bignum::BigUint;

#[derive(Clone, Copy)]
pub struct Ed448Order;
impl Modulus for Ed448Order {
    fn modulus() -> Wide {
        Wide::str2num(
            "181709681073901722637330951972001133588410340171829515070372549795146003961539585716195755291692375963310293709091662304773755859649779",
        )
        .expect("valid Ed448 order literal")
    }
}

pub type Scalar448 = ModElement<Ed448Order>;

/// Reduces a wide (e.g. 114-byte SHAKE256) big-endian hash output mod
/// `L`, for the scalar derivations in Ed448 signing/verification — too
/// wide to fit directly in [`Wide`] (544 bits).
pub fn reduce_wide_be(bytes: &[u8]) -> Scalar448 {
    type ReduceWide = BigUint<32>; // 1024 bits

    let wide = ReduceWide::from_bytes_be(bytes).expect("hash output fits in 1024 bits");
    let modulus = ReduceWide::str2num(&Ed448Order::modulus().num2str())
        .expect("Ed448 order parses at the wider width too");
    let reduced = wide.rem_euclid(&modulus).expect("modulus is nonzero");

    let full = reduced.to_bytes_be();
    let target_len = NIST_LIMBS * 4;
    Scalar448::from_bytes_be(&full[full.len() - target_len..])
}
