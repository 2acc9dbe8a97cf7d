use vellum_core::ecc::nist::{p256, p384, p521};
use vellum_core::rng::Csprng;

macro_rules! curve_roundtrip_test {
    ($name:ident, $module:ident, $len:expr) => {
        #[test]
        fn $name() {
            let mut rng = Csprng::new();
            let mut alice_private = [0u8; $len];
            let mut bob_private = [0u8; $len];
            rng.fill_bytes(&mut alice_private);
            rng.fill_bytes(&mut bob_private);

            let alice_public = $module::ecdh_public_key(&alice_private);
            let bob_public = $module::ecdh_public_key(&bob_private);

            let alice_shared = $module::ecdh_shared_key(&alice_private, &bob_public).unwrap();
            let bob_shared = $module::ecdh_shared_key(&bob_private, &alice_public).unwrap();

            assert_eq!(alice_shared, bob_shared);

            let message = b"idiomatic rust exercise";
            let signature = $module::ecdsa_sign(message, &alice_private);
            assert!($module::ecdsa_verify(&signature, message, &alice_public).is_ok());
        }
    };
}

curve_roundtrip_test!(p256_ecdh_and_ecdsa_roundtrip, p256, 32);
curve_roundtrip_test!(p384_ecdh_and_ecdsa_roundtrip, p384, 48);
curve_roundtrip_test!(p521_ecdh_and_ecdsa_roundtrip, p521, 66);

#[test]
fn p256_tampered_signature_is_rejected() {
    let mut rng = Csprng::new();
    let mut private = [0u8; 32];
    rng.fill_bytes(&mut private);
    let public = p256::ecdh_public_key(&private);

    let message = b"original message";
    let mut signature = p256::ecdsa_sign(message, &private);
    signature[0] ^= 0xff;

    assert!(p256::ecdsa_verify(&signature, message, &public).is_err());
}
