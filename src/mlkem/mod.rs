//! ML-KEM (FIPS 203): a lattice-based key-encapsulation mechanism, in
//! its 512/768/1024 parameter sets.
//!
//! `[NEW]`, grounded in `original_source`'s `mlkem.h`/`mlkem_512.c`/
//! `mlkem_768.c`/`mlkem_1024.c`: the ring arithmetic (`poly`/`polyvec`),
//! rejection sampling, and the K-PKE/KEM layering are a direct port of
//! `mlkem_768.c`, generalized across module ranks via [`params::MlKemParams`]
//! rather than copied three times the way the original's three
//! `mlkem_*.c` files duplicate each other. See `DESIGN.md` for the
//! sampling/compression simplifications against the original's
//! fixed-point-arithmetic byte packing.

mod consts;
mod kem;
mod kpke;
mod params;
mod poly;
mod polyvec;
mod sampling;

pub use kem::{decapsulate, encapsulate, generate_keypair, KeyPair};
pub use params::{MlKem1024, MlKem512, MlKem768, MlKemParams};

#[cfg(test)]
mod tests {
    use super::*;
    use kem::{encapsulate_with_message, keypair_from_seeds};

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
    fn roundtrip_mlkem512() {
        roundtrip::<MlKem512>();
    }

    #[test]
    fn roundtrip_mlkem768() {
        roundtrip::<MlKem768>();
    }

    #[test]
    fn roundtrip_mlkem1024() {
        roundtrip::<MlKem1024>();
    }

    #[test]
    fn deterministic_keygen_is_reproducible() {
        let d = [7u8; 32];
        let z = [9u8; 32];
        let kp1 = keypair_from_seeds::<MlKem768>(&d, &z);
        let kp2 = keypair_from_seeds::<MlKem768>(&d, &z);
        assert_eq!(kp1.ek, kp2.ek);
        assert_eq!(kp1.dk, kp2.dk);
    }

    #[test]
    fn tampered_ciphertext_decapsulates_without_error_but_disagrees() {
        let kp = generate_keypair::<MlKem768>();
        let msg = [3u8; 32];
        let (mut ct, shared1) = encapsulate_with_message::<MlKem768>(&kp.ek, &msg);
        ct[0] ^= 0xff;

        let shared2 = decapsulate::<MlKem768>(&kp.dk, &ct);
        // Implicit rejection: no error, but the recovered secret must
        // not equal the original shared secret.
        assert_ne!(shared1, shared2);
    }

    #[test]
    fn decapsulation_is_deterministic_under_rejection() {
        let kp = generate_keypair::<MlKem768>();
        let msg = [5u8; 32];
        let (mut ct, _) = encapsulate_with_message::<MlKem768>(&kp.ek, &msg);
        ct[0] ^= 0xff;

        let a = decapsulate::<MlKem768>(&kp.dk, &ct);
        let b = decapsulate::<MlKem768>(&kp.dk, &ct);
        assert_eq!(a, b);
    }
}
