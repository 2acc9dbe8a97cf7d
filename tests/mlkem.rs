use vellum_core::mlkem::{decapsulate, encapsulate, generate_keypair, MlKemParams};
use vellum_core::mlkem::{MlKem1024, MlKem512, MlKem768};

fn roundtrip<P: MlKemParams>() {
    let kp = generate_keypair::<P>();
    assert_eq!(kp.ek.len(), P::ek_len());
    assert_eq!(kp.dk.len(), P::dk_len());

    let (ct, shared1) = encapsulate::<P>(&kp.ek);
    assert_eq!(ct.len(), P::ct_len());

    let shared2 = decapsulate::<P>(&kp.dk, &ct);
    assert_eq!(shared1, shared2);
}

#[test]
fn mlkem512_end_to_end() {
    roundtrip::<MlKem512>();
}

#[test]
fn mlkem768_end_to_end() {
    roundtrip::<MlKem768>();
}

#[test]
fn mlkem1024_end_to_end() {
    roundtrip::<MlKem1024>();
}

#[test]
fn two_keypairs_do_not_share_secrets() {
    let kp_a = generate_keypair::<MlKem768>();
    let kp_b = generate_keypair::<MlKem768>();

    let (ct, shared_a) = encapsulate::<MlKem768>(&kp_a.ek);
    let shared_wrong = decapsulate::<MlKem768>(&kp_b.dk, &ct);

    assert_ne!(shared_a, shared_wrong);
}
