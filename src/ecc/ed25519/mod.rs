//! Ed25519 signatures (RFC 8032).

mod consttime;
pub(crate) mod core;
pub(crate) mod group;

pub use self::core::{add_scalar, generate_keypair, keypair_from_seed, sign, verify};
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
    fn add_scalar_keeps_keypair_consistent() {
        let (mut public, mut private) = generate_keypair();
        let shift = crate::field::scalar25519::Scalar::from_bytes(&[7u8; 32]);
        add_scalar(Some(&mut public), Some(&mut private), shift);

        let message = b"post-shift message";
        let sig = sign(message, public, private);
        assert!(verify(sig, message, public).is_ok());
    }
}
