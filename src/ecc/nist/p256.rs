//! NIST P-256 (secp256r1) ECDH and ECDSA.

use super::curve::NistCurve;
use super::dsa;
use crate::digest::sha256;
use crate::error::EccError;
use crate::field::p256::P256FieldModulus;
use crate::field::scalar_nist::P256Order;
use crate::field::modular::ModElement;

pub const BYTE_LEN: usize = 32;

#[derive(Clone, Copy)]
pub struct P256;

impl NistCurve for P256 {
    type FieldM = P256FieldModulus;
    type ScalarM = P256Order;
    const BYTE_LEN: usize = BYTE_LEN;

    fn b() -> ModElement<Self::FieldM> {
        ModElement::<Self::FieldM>::from_bytes_be(&hex_to_bytes(
            "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b",
        ))
    }

    fn gx() -> ModElement<Self::FieldM> {
        ModElement::<Self::FieldM>::from_bytes_be(&hex_to_bytes(
            "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296",
        ))
    }

    fn gy() -> ModElement<Self::FieldM> {
        ModElement::<Self::FieldM>::from_bytes_be(&hex_to_bytes(
            "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5",
        ))
    }

    fn hash(data: &[u8]) -> Vec<u8> {
        sha256(data).to_vec()
    }
}

fn hex_to_bytes(s: &str) -> Vec<u8> {
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).expect("valid hex curve constant"))
        .collect()
}

pub fn ecdh_public_key(private: &[u8; BYTE_LEN]) -> [u8; 2 * BYTE_LEN + 1] {
    let out = dsa::ecdh_public_key::<P256>(private).expect("base point is always valid");
    out.try_into().expect("uncompressed P-256 point is 65 bytes")
}

pub fn ecdh_shared_key(
    private: &[u8; BYTE_LEN],
    peer_public: &[u8; 2 * BYTE_LEN + 1],
) -> Result<[u8; BYTE_LEN], EccError> {
    let out = dsa::ecdh_shared_key::<P256>(private, peer_public)?;
    Ok(out.try_into().expect("shared x-coordinate is 32 bytes"))
}

pub fn ecdsa_sign(message: &[u8], private: &[u8; BYTE_LEN]) -> [u8; 2 * BYTE_LEN] {
    dsa::ecdsa_sign::<P256>(message, private)
        .try_into()
        .expect("P-256 signature is 64 bytes")
}

pub fn ecdsa_verify(
    signature: &[u8; 2 * BYTE_LEN],
    message: &[u8],
    public: &[u8; 2 * BYTE_LEN + 1],
) -> Result<(), EccError> {
    dsa::ecdsa_verify::<P256>(signature, message, public)
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

    #[test]
    fn ecdsa_verify_rejects_tampered_message() {
        let d = random_scalar();
        let q = ecdh_public_key(&d);
        let sig = ecdsa_sign(b"original", &d);
        assert!(ecdsa_verify(&sig, b"tampered", &q).is_err());
    }
}
