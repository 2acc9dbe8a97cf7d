//! Scalar (group-order) fields for the three NIST curves, built on
//! [`super::modular::ModElement`] the same way the field elements are.

use super::modular::{ModElement, Modulus, Wide};

#[derive(Clone, Copy)]
pub struct P256Order;
impl Modulus for P256Order {
    fn modulus() -> Wide {
        Wide::str2num(
            "115792089210356248762697446949407573529996955224135760342422259061068512044369",
        )
        .expect("valid P-256 order literal")
    }
}
pub type ScalarP256 = ModElement<P256Order>;

#[derive(Clone, Copy)]
pub struct P384Order;
impl Modulus for P384Order {
    fn modulus() -> Wide {
        Wide::str2num(
            "39402006196394479212279040100143613805079739270465446667946905279627659399113263569398956308152294913554433653942643",
        )
        .expect("valid P-384 order literal")
    }
}
pub type ScalarP384 = ModElement<P384Order>;

#[derive(Clone, Copy)]
pub struct P521Order;
impl Modulus for P521Order {
    fn modulus() -> Wide {
        Wide::str2num(
            "6864797660130609714981900799081393217269435300143305409394463459185543183397655394245057746333217197532963996371363321113864768612440380340372808892707005449",
        )
        .expect("valid P-521 order literal")
    }
}
pub type ScalarP521 = ModElement<P521Order>;
