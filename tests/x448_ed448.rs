use vellum_core::ecc::ed448::{generate_keypair, keypair_from_seed, sign, verify};
use vellum_core::ecc::x448::{public_key, shared_key};
use vellum_core::rng::Csprng;

#[test]
fn x448_key_exchange_agrees() {
    let mut rng = Csprng::new();
    let mut alice_private = [0u8; 56];
    let mut bob_private = [0u8; 56];
    rng.fill_bytes(&mut alice_private);
    rng.fill_bytes(&mut bob_private);

    let alice_public = public_key(&alice_private);
    let bob_public = public_key(&bob_private);

    assert_eq!(
        shared_key(&alice_private, &bob_public),
        shared_key(&bob_private, &alice_public)
    );
}

#[test]
fn ed448_sign_and_verify_roundtrip() {
    let (public, private) = generate_keypair();
    let message = b"idiomatic rust exercise";

    let signature = sign(message, public, private);
    assert!(verify(signature, message, public).is_ok());
}

#[test]
fn ed448_keypair_from_seed_is_deterministic() {
    let seed = [3u8; 57];
    let (public_a, _) = keypair_from_seed(&seed);
    let (public_b, _) = keypair_from_seed(&seed);
    assert_eq!(public_a.to_bytes(), public_b.to_bytes());
}
