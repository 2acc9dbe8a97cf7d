use vellum_core::rng::Csprng;

#[test]
fn deterministic_from_seed() {
    let seed = [0x42u8; 32];

    let mut rng1 = Csprng::from_seed(seed);
    let mut rng2 = Csprng::from_seed(seed);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn rekey_changes_output() {
    let seed = [0xAAu8; 32];
    let mut rng = Csprng::from_seed(seed);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn output_is_not_all_zero() {
    let seed = [0u8; 32];
    let mut rng = Csprng::from_seed(seed);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn from_os_produces_distinct_state() {
    let mut a = Csprng::new();
    let mut b = Csprng::new();

    let mut out_a = [0u8; 32];
    let mut out_b = [0u8; 32];
    a.fill_bytes(&mut out_a);
    b.fill_bytes(&mut out_b);

    // Two independently OS-seeded generators should not collide.
    assert_ne!(out_a, out_b);
}
