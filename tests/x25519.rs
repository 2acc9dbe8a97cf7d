use vellum_core::ecc::x25519::{public_key, shared_key};
use vellum_core::rng::Csprng;

#[test]
fn key_exchange_agrees() {
    let mut rng = Csprng::new();
    let mut alice_private = [0u8; 32];
    let mut bob_private = [0u8; 32];
    rng.fill_bytes(&mut alice_private);
    rng.fill_bytes(&mut bob_private);

    let alice_public = public_key(&alice_private);
    let bob_public = public_key(&bob_private);

    let alice_shared = shared_key(&alice_private, &bob_public);
    let bob_shared = shared_key(&bob_private, &alice_public);

    assert_eq!(alice_shared, bob_shared);
}

#[test]
fn different_peers_give_different_secrets() {
    let a = [0x11u8; 32];
    let b = [0x22u8; 32];
    let c = [0x33u8; 32];

    let pb = public_key(&b);
    let pc = public_key(&c);

    assert_ne!(shared_key(&a, &pb), shared_key(&a, &pc));
}
