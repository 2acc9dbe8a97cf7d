//! Ed448 signatures (RFC 8032 §5.2).

pub(crate) mod core;
pub(crate) mod group;

pub use self::core::{generate_keypair, keypair_from_seed, sign, verify};
pub use self::core::{PrivateKey, PublicKey, Signature};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_then_verify_roundtrip() {
        let (public, private) = generate_keypair();
        let message = b"idiomatic rust exercise";
        let sig = sign(message, public, private);
        assert!(verify(sig, message, public).is_ok());
    }

    #[test]
    fn verify_rejects_tampered_message() {
        let (public, private) = generate_keypair();
        let sig = sign(b"original", public, private);
        assert!(verify(sig, b"tampered", public).is_err());
    }

    #[test]
    fn keypair_from_seed_is_deterministic() {
        let seed = [7u8; 57];
        let (pub_a, _) = keypair_from_seed(&seed);
        let (pub_b, _) = keypair_from_seed(&seed);
        assert_eq!(pub_a.to_bytes(), pub_b.to_bytes());
    }
}
