use vellum_core::ecc::ed25519::{add_scalar, generate_keypair, keypair_from_seed, sign, verify};
use vellum_core::field::Scalar25519;

#[test]
fn sign_and_verify_roundtrip() {
    let (public, private) = generate_keypair();
    let message: &[u8] = b"Hello, world!";

    let signature = sign(message, public, private);
    assert!(verify(signature, message, public).is_ok());
}

#[test]
fn tampered_signature_is_rejected() {
    let (public, private) = generate_keypair();
    let message: &[u8] = b"Hello, world!";

    let signature = sign(message, public, private);
    let mut bytes = signature.to_bytes();
    bytes[44] ^= 0x10;
    let tampered = vellum_core::ecc::ed25519::Signature::from_bytes(bytes);
    assert!(verify(tampered, message, public).is_err());
}

#[test]
fn add_scalar_keeps_keypair_consistent() {
    let (mut public, mut private) = generate_keypair();
    let shift = Scalar25519::from_bytes(&[7u8; 32]);
    add_scalar(Some(&mut public), Some(&mut private), shift);

    let message: &[u8] = b"Hello, world!";
    let signature = sign(message, public, private);
    assert!(verify(signature, message, public).is_ok());
}

#[test]
fn keypair_from_seed_is_deterministic() {
    let seed = [9u8; 32];
    let (public_a, _) = keypair_from_seed(&seed);
    let (public_b, _) = keypair_from_seed(&seed);
    assert_eq!(public_a, public_b);
}
