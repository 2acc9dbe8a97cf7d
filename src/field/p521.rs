//! NIST P-521 field element, built on [`super::modular::ModElement`].

use super::modular::{ModElement, Modulus, Wide};

#[derive(Clone, Copy)]
pub struct P521FieldModulus;
impl Modulus for P521FieldModulus {
    fn modulus() -> Wide {
        Wide::str2num(
            "6864797660130609714981900799081393217269435300143305409394463459185543183397656052122559640661454554977296311391480858037121987999716643812574028291115057151",
        )
        .expect("valid P-521 prime literal")
    }
}

pub type FieldElement = ModElement<P521FieldModulus>;
