//! Rejection samplers and the `H`/`G`/`J` hash collaborators.
//!
//! `[NEW]`, grounded in `mlkem_768.c`'s `_sample_ntt`/`_sample_ntt_xof`/
//! `_sample_poly_eta1_prf`/`_sample_poly_eta2_prf`/`_hash_{h,g,j}` — the
//! matrix sampler uses a persistent SHAKE-128 squeeze stream
//! ([`crate::digest::Shake128Xof`]) instead of refilling a fixed-size
//! buffer and re-running `sha3_shake_xof` in a loop, since the RustCrypto
//! reader type already exposes incremental squeezing.

use crate::digest::{sha3_256, sha3_512, shake256, Shake128Xof};

use super::consts::{N, Q, SYM_LEN};
use super::poly::Poly;

/// Rejection-samples 12-bit values from a 3-bytes-per-2-values stream,
/// discarding anything `>= Q` (FIPS 203's `SampleNTT`).
fn sample_ntt_chunk(out: &mut [i16], buf: &[u8]) -> usize {
    let mut k = 0;
    let mut i = 0;
    while k < out.len() && i + 3 <= buf.len() {
        let d1 = (buf[i] as u16 | (buf[i + 1] as u16) << 8) & 0xfff;
        let d2 = ((buf[i + 1] as u16) >> 4 | (buf[i + 2] as u16) << 4) & 0xfff;
        i += 3;
        if (d1 as i32) < Q {
            out[k] = d1 as i16;
            k += 1;
        }
        if (d2 as i32) < Q && k < out.len() {
            out[k] = d2 as i16;
            k += 1;
        }
    }
    k
}

/// Expands one matrix entry `A[i][j]` directly in NTT form from `rho`.
pub fn sample_ntt_xof(rho: &[u8; SYM_LEN], x: u8, y: u8) -> Poly {
    let mut seed = rho.to_vec();
    seed.push(x);
    seed.push(y);
    let mut xof = Shake128Xof::new(&seed);

    let mut r = Poly::zero();
    let mut filled = 0usize;
    let mut block = [0u8; 168]; // SHAKE-128 rate
    while filled < N {
        xof.squeeze(&mut block);
        filled += sample_ntt_chunk(&mut r.coeffs[filled..], &block);
    }
    r
}

/// PRF-driven centered-binomial sampling (`eta1`/`eta2`), using SHAKE-256
/// as the original's `sha3_shake256` PRF does.
pub fn sample_poly_cbd(eta: u32, seed: &[u8; SYM_LEN], nonce: u8) -> Poly {
    let mut input = seed.to_vec();
    input.push(nonce);
    let out_len = eta as usize * N / 4;
    let buf = shake256(&input, out_len);
    Poly::cbd(eta, &buf)
}

/// `H`: SHA3-256.
pub fn hash_h(data: &[u8]) -> [u8; 32] {
    sha3_256(data)
}

/// `G`: SHA3-512, split as `(K, r)` each 32 bytes by the caller.
pub fn hash_g(data: &[u8]) -> [u8; 64] {
    sha3_512(data)
}

/// `J`: SHAKE-256 with a 32-byte output, used for implicit rejection.
pub fn hash_j(data: &[u8]) -> [u8; 32] {
    let out = shake256(data, 32);
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&out);
    buf
}
