use vellum_core::bignum::BigUint;
use vellum_core::rsa::KeyPair;

// A small "RSA" instance below real key sizes, enough to exercise the
// RSAEP/RSADP/CRT path end to end through the public API.
fn small_keypair() -> KeyPair {
    let p = BigUint::from_u32(61);
    let q = BigUint::from_u32(53);
    let e = BigUint::from_u32(17);
    KeyPair::new(p, q, e).unwrap()
}

#[test]
fn encrypt_then_decrypt_roundtrip() {
    let kp = small_keypair();
    let message = BigUint::from_u32(42);

    let ciphertext = KeyPair::rsaep(&message, kp.e(), kp.n()).unwrap();
    let recovered = kp.decrypt_crt(&ciphertext).unwrap();

    assert_eq!(recovered, message);
}

#[test]
fn invalid_public_exponent_is_rejected() {
    // e = 2 shares a factor with phi(n) = 60*52, so keygen must fail.
    let p = BigUint::from_u32(61);
    let q = BigUint::from_u32(53);
    let e = BigUint::from_u32(2);
    assert!(KeyPair::new(p, q, e).is_err());
}
