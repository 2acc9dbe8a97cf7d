//! NIST P-521 (secp521r1) ECDH and ECDSA.

use super::curve::NistCurve;
use super::dsa;
use crate::digest::sha512;
use crate::error::EccError;
use crate::field::modular::ModElement;
use crate::field::p521::P521FieldModulus;
use crate::field::scalar_nist::P521Order;

pub const BYTE_LEN: usize = 66;

#[derive(Clone, Copy)]
pub struct P521;

impl NistCurve for P521 {
    type FieldM = P521FieldModulus;
    type ScalarM = P521Order;
    const BYTE_LEN: usize = BYTE_LEN;

    fn b() -> ModElement<Self::FieldM> {
        ModElement::<Self::FieldM>::from_bytes_be(&hex_to_bytes(concat!(
            "0051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef",
            "109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b",
            "503f00",
        )))
    }

    fn gx() -> ModElement<Self::FieldM> {
        ModElement::<Self::FieldM>::from_bytes_be(&hex_to_bytes(concat!(
            "00c6858e06b70404e9cd9e3ecb662395b4429c648139053fb521f828af606b4",
            "d3dbaa14b5e77efe75928fe1dc127a2ffa8de3348b3c1856a429bf97e7e31c2",
            "e5bd66",
        )))
    }

    fn gy() -> ModElement<Self::FieldM> {
        ModElement::<Self::FieldM>::from_bytes_be(&hex_to_bytes(concat!(
            "011839296a789a3bc0045c8a5fb42c7d1bd998f54449579b446817afbd17273",
            "e662c97ee72995ef42640c550b9013fad0761353c7086a272c24088be94769f",
            "d16650",
        )))
    }

    fn hash(data: &[u8]) -> Vec<u8> {
        sha512(data).to_vec()
    }
}

fn hex_to_bytes(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("valid hex curve constant"))
        .collect()
}

pub fn ecdh_public_key(private: &[u8; BYTE_LEN]) -> [u8; 2 * BYTE_LEN + 1] {
    let out = dsa::ecdh_public_key::<P521>(private).expect("base point is always valid");
    out.try_into().expect("uncompressed P-521 point is 133 bytes")
}

pub fn ecdh_shared_key(
    private: &[u8; BYTE_LEN],
    peer_public: &[u8; 2 * BYTE_LEN + 1],
) -> Result<[u8; BYTE_LEN], EccError> {
    let out = dsa::ecdh_shared_key::<P521>(private, peer_public)?;
    Ok(out.try_into().expect("shared x-coordinate is 66 bytes"))
}

pub fn ecdsa_sign(message: &[u8], private: &[u8; BYTE_LEN]) -> [u8; 2 * BYTE_LEN] {
    dsa::ecdsa_sign::<P521>(message, private)
        .try_into()
        .expect("P-521 signature is 132 bytes")
}

pub fn ecdsa_verify(
    signature: &[u8; 2 * BYTE_LEN],
    message: &[u8],
    public: &[u8; 2 * BYTE_LEN + 1],
) -> Result<(), EccError> {
    dsa::ecdsa_verify::<P521>(signature, message, public)
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
