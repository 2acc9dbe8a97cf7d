use vellum_core::bignum::{BigUint, Bn4352};

#[test]
fn add_sub_are_inverse() {
    let a = BigUint::<136>::from_u32(123_456);
    let b = BigUint::<136>::from_u32(987_654);

    let sum = a.add(&b);
    assert_eq!(sum.sub(&b), a);
}

#[test]
fn modpow_matches_repeated_modmul() {
    let base = Bn4352::from_u32(7);
    let modulus = Bn4352::from_u32(101);

    let mut expected = Bn4352::one();
    for _ in 0..5 {
        expected = expected.mul(&base).rem_euclid(&modulus).unwrap();
    }

    let exp = Bn4352::from_u32(5);
    let got = base.modpow(&exp, &modulus).unwrap();

    assert_eq!(got, expected);
}

#[test]
fn division_by_zero_errors() {
    let a = Bn4352::from_u32(10);
    let zero = Bn4352::from_u32(0);
    assert!(a.div(&zero).is_err());
}

#[test]
fn bytes_roundtrip() {
    let value = Bn4352::from_u32(0xdead_beef);
    let bytes = value.to_bytes_be();
    let back = Bn4352::from_bytes_be(&bytes).unwrap();
    assert_eq!(value, back);
}

#[test]
fn modular_inverse_is_correct() {
    let a = Bn4352::from_u32(17);
    let modulus = Bn4352::from_u32(3120);
    let inv = a.inv(&modulus).unwrap();

    let product = a.mul(&inv).rem_euclid(&modulus).unwrap();
    assert_eq!(product, Bn4352::one());
}
