//! The ML-KEM key-encapsulation transform (FIPS 203 §7): wraps K-PKE
//! with a Fujisaki-Okamoto-style re-encryption check and implicit
//! rejection, so a malformed ciphertext decapsulates to a
//! pseudorandom — rather than predictable — key.
//!
//! `[NEW]`, transcribed from `mlkem_768.c`'s `mlkem768_{genkey,encaps,
//! decaps}`. Key generation draws its own randomness from
//! [`crate::rng::Csprng`] instead of taking `d`/`z` as parameters, the
//! same shape as this crate's ECC `generate_keypair` functions.

use crate::rng::Csprng;

use super::consts::SYM_LEN;
use super::kpke;
use super::params::MlKemParams;
use super::sampling::{hash_g, hash_h, hash_j};

/// An ML-KEM key pair: the encapsulation key `ek` (public) and
/// decapsulation key `dk` (secret).
pub struct KeyPair {
    pub ek: Vec<u8>,
    pub dk: Vec<u8>,
}

/// Generates a fresh key pair, drawing `d` and `z` from the CSPRNG.
pub fn generate_keypair<P: MlKemParams>() -> KeyPair {
    let mut rng = Csprng::new();
    let mut d = [0u8; SYM_LEN];
    let mut z = [0u8; SYM_LEN];
    rng.fill_bytes(&mut d);
    rng.fill_bytes(&mut z);
    keypair_from_seeds::<P>(&d, &z)
}

/// Deterministic key generation from caller-supplied seeds, exposed for
/// known-answer testing.
pub fn keypair_from_seeds<P: MlKemParams>(d: &[u8; SYM_LEN], z: &[u8; SYM_LEN]) -> KeyPair {
    let (ekp, dkp) = kpke::genkey::<P>(d);

    let h = hash_h(&ekp);
    let mut dk = dkp;
    dk.extend_from_slice(&ekp);
    dk.extend_from_slice(&h);
    dk.extend_from_slice(z);

    KeyPair { ek: ekp, dk }
}

/// Encapsulates a fresh shared secret under `ek`, returning `(ciphertext,
/// shared_secret)`. The encapsulation message `m` is drawn from the
/// CSPRNG.
pub fn encapsulate<P: MlKemParams>(ek: &[u8]) -> (Vec<u8>, [u8; SYM_LEN]) {
    let mut rng = Csprng::new();
    let mut m = [0u8; SYM_LEN];
    rng.fill_bytes(&mut m);
    encapsulate_with_message::<P>(ek, &m)
}

/// Deterministic encapsulation from a caller-supplied message, exposed
/// for known-answer testing.
pub fn encapsulate_with_message<P: MlKemParams>(
    ek: &[u8],
    msg: &[u8; SYM_LEN],
) -> (Vec<u8>, [u8; SYM_LEN]) {
    let h = hash_h(ek);
    let mut g_input = msg.to_vec();
    g_input.extend_from_slice(&h);
    let kr = hash_g(&g_input);

    let mut k = [0u8; SYM_LEN];
    let mut r = [0u8; SYM_LEN];
    k.copy_from_slice(&kr[..SYM_LEN]);
    r.copy_from_slice(&kr[SYM_LEN..]);

    let ct = kpke::encrypt::<P>(&r, ek, msg);
    (ct, k)
}

/// Decapsulates `ct` under `dk`, returning the shared secret. On a
/// tampered or invalid ciphertext this returns a pseudorandom value
/// derived from `z` instead of failing — implicit rejection, per
/// FIPS 203 §7.3 — so callers cannot distinguish "invalid ciphertext"
/// from "valid ciphertext, wrong key" via an error return.
pub fn decapsulate<P: MlKemParams>(dk: &[u8], ct: &[u8]) -> [u8; SYM_LEN] {
    let dkpke_len = P::dkpke_len();
    let ek_len = P::ek_len();

    let dkp = &dk[..dkpke_len];
    let ekp = &dk[dkpke_len..dkpke_len + ek_len];
    let h = &dk[dkpke_len + ek_len..dkpke_len + ek_len + SYM_LEN];
    let z = &dk[dkpke_len + ek_len + SYM_LEN..dkpke_len + ek_len + 2 * SYM_LEN];

    let msg = kpke::decrypt::<P>(dkp, ct);

    let mut g_input = msg.to_vec();
    g_input.extend_from_slice(h);
    let kr = hash_g(&g_input);
    let mut k = [0u8; SYM_LEN];
    let mut r = [0u8; SYM_LEN];
    k.copy_from_slice(&kr[..SYM_LEN]);
    r.copy_from_slice(&kr[SYM_LEN..]);

    let mut j_input = z.to_vec();
    j_input.extend_from_slice(ct);
    let k_bar = hash_j(&j_input);

    let ct2 = kpke::encrypt::<P>(&r, ekp, &msg);

    let mut mismatch = 0u8;
    for (a, b) in ct.iter().zip(ct2.iter()) {
        mismatch |= a ^ b;
    }
    // `mask` is all-ones when ct != ct2, all-zero when they match — a
    // branch-free select between the real key and the rejection key.
    let mask = 0u8.wrapping_sub((mismatch != 0) as u8);
    let mut out = [0u8; SYM_LEN];
    for i in 0..SYM_LEN {
        out[i] = k[i] ^ (mask & (k[i] ^ k_bar[i]));
    }
    out
}
