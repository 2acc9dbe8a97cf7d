//! NIST P-384 (secp384r1) ECDH and ECDSA.

use super::curve::NistCurve;
use super::dsa;
use crate::digest::sha384;
use crate::error::EccError;
use crate::field::modular::ModElement;
use crate::field::p384::P384FieldModulus;
use crate::field::scalar_nist::P384Order;

pub const BYTE_LEN: usize = 48;

#[derive(Clone, Copy)]
pub struct P384;

impl NistCurve for P384 {
    type FieldM = P384FieldModulus;
    type ScalarM = P384Order;
    const BYTE_LEN: usize = BYTE_LEN;

    fn b() -> ModElement<Self::FieldM> {
        ModElement::<Self::FieldM>::from_bytes_be(&hex_to_bytes(concat!(
            "b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875",
            "ac656398d8a2ed19d2a85c8edd3ec2aef",
        )))
    }

    fn gx() -> ModElement<Self::FieldM> {
        ModElement::<Self::FieldM>::from_bytes_be(&hex_to_bytes(concat!(
            "aa87ca22be8b05378eb1c71ef320ad746e1d3b628ba79b9859f741e082542a3",
            "85502f25dbf55296c3a545e3872760ab7",
        )))
    }

    fn gy() -> ModElement<Self::FieldM> {
        ModElement::<Self::FieldM>::from_bytes_be(&hex_to_bytes(concat!(
            "3617de4a96262c6f5d9e98bf9292dc29f8f41dbd289a147ce9da3113b5f0b8c",
            "00a60b1ce1d7e819d7a431d7c90ea0e5f",
        )))
    }

    fn hash(data: &[u8]) -> Vec<u8> {
        sha384(data).to_vec()
    }
}

fn hex_to_bytes(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("valid hex curve constant"))
        .collect()
}

pub fn ecdh_public_key(private: &[u8; BYTE_LEN]) -> [u8; 2 * BYTE_LEN + 1] {
    let out = dsa::ecdh_public_key::<P384>(private).expect("base point is always valid");
    out.try_into().expect("uncompressed P-384 point is 97 bytes")
}

pub fn ecdh_shared_key(
    private: &[u8; BYTE_LEN],
    peer_public: &[u8; 2 * BYTE_LEN + 1],
) -> Result<[u8; BYTE_LEN], EccError> {
    let out = dsa::ecdh_shared_key::<P384>(private, peer_public)?;
    Ok(out.try_into().expect("shared x-coordinate is 48 bytes"))
}

pub fn ecdsa_sign(message: &[u8], private: &[u8; BYTE_LEN]) -> [u8; 2 * BYTE_LEN] {
    dsa::ecdsa_sign::<P384>(message, private)
        .try_into()
        .expect("P-384 signature is 96 bytes")
}

pub fn ecdsa_verify(
    signature: &[u8; 2 * BYTE_LEN],
    message: &[u8],
    public: &[u8; 2 * BYTE_LEN + 1],
) -> Result<(), EccError> {
    dsa::ecdsa_verify::<P384>(signature, message, public)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Csprng;

    fn random_scalar() -> [u8; BYTE_LEN] {
        let mut rng = Csprng::new();
        let mut buf = [0u8; BYTE_LEN];
        rng.fill_bytes(&mut buf);
        buf
    }

    #[test]
    fn ecdh_mutual_exchange_agrees() {
        let a = random_scalar();
        let b = random_scalar();
        let pa = ecdh_public_key(&a);
        let pb = ecdh_public_key(&b);
        assert_eq!(ecdh_shared_key(&a, &pb).unwrap(), ecdh_shared_key(&b, &pa).unwrap());
    }

    #[test]
    fn ecdsa_sign_then_verify_roundtrip() {
        let d = random_scalar();
        let q = ecdh_public_key(&d);
        let message = b"idiomatic rust exercise";
        let sig = ecdsa_sign(message, &d);
        assert!(ecdsa_verify(&sig, message, &q).is_ok());
    }
}
