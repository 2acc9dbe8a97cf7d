//! NIST P-256 field element, built on [`super::modular::ModElement`].

use super::modular::{ModElement, Modulus, Wide};

#[derive(Clone, Copy)]
pub struct P256FieldModulus;
impl Modulus for P256FieldModulus {
    fn modulus() -> Wide {
        Wide::str2num(
            "115792089210356248762697446949407573530086143415290314195533631308867097853951",
        )
        .expect("valid P-256 prime literal")
    }
}

pub type FieldElement = ModElement<P256FieldModulus>;
