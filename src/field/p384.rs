//! NIST P-384 field element, built on [`super::modular::ModElement`].

use super::modular::{ModElement, Modulus, Wide};

#[derive(Clone, Copy)]
pub struct P384FieldModulus;
impl Modulus for P384FieldModulus {
    fn modulus() -> Wide {
        Wide::str2num(
            "39402006196394479212279040100143613805079739270465446667948293404245721771496870329047266088258938001861606973112319",
        )
        .expect("valid P-384 prime literal")
    }
}

pub type FieldElement = ModElement<P384FieldModulus>;
