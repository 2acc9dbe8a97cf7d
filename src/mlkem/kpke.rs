//! K-PKE: the IND-CPA-secure public-key encryption scheme the ML-KEM
//! transform wraps with implicit-rejection decapsulation (FIPS 203 §5).
//!
//! `[NEW]`, transcribed from `mlkem_768.c`'s `mlkem768_pke_{genkey,encrypt,
//! decrypt}`, generalized over [`MlKemParams`] instead of being
//! regenerated per module rank.

use super::consts::{N, SYM_LEN};
use super::params::MlKemParams;
use super::poly::Poly;
use super::polyvec::PolyVec;
use super::sampling::{hash_g, sample_ntt_xof, sample_poly_cbd};

/// `A[i][j] = sample_ntt_xof(seed, a_col(i,j), a_row(i,j))`; genkey and
/// encrypt build the *same* matrix but transposed relative to each
/// other (`t = A^T s` at keygen, `u = A r` at encryption), matching the
/// original's `(seed, j, i)` vs. `(seed, i, j)` sampling order exactly.
fn gen_matrix<P: MlKemParams>(seed: &[u8; SYM_LEN], transposed: bool) -> Vec<PolyVec> {
    (0..P::K)
        .map(|i| {
            let polys = (0..P::K)
                .map(|j| if transposed { sample_ntt_xof(seed, j as u8, i as u8) } else { sample_ntt_xof(seed, i as u8, j as u8) })
                .collect();
            PolyVec { vec: polys }
        })
        .collect()
}

/// Generates an encryption key `ek = (t || rho)` and decryption key
/// `dk = s` from a 32-byte seed.
pub fn genkey<P: MlKemParams>(ran: &[u8; SYM_LEN]) -> (Vec<u8>, Vec<u8>) {
    let mut buf = ran.to_vec();
    buf.push(P::K as u8);
    let gh = hash_g(&buf);
    let mut rho = [0u8; SYM_LEN];
    let mut sigma = [0u8; SYM_LEN];
    rho.copy_from_slice(&gh[..SYM_LEN]);
    sigma.copy_from_slice(&gh[SYM_LEN..]);

    let a = gen_matrix::<P>(&rho, true);

    let mut nonce = 0u8;
    let mut s = PolyVec { vec: (0..P::K).map(|_| { let p = sample_poly_cbd(P::ETA1, &sigma, nonce); nonce += 1; p }).collect() };
    let mut e = PolyVec { vec: (0..P::K).map(|_| { let p = sample_poly_cbd(P::ETA1, &sigma, nonce); nonce += 1; p }).collect() };

    s.ntt();
    e.ntt();

    let mut t_polys = Vec::with_capacity(P::K);
    for row in &a {
        let mut t_i = PolyVec::basemul_acc(row, &s);
        t_i.to_mont();
        t_polys.push(t_i);
    }
    let mut t = PolyVec { vec: t_polys };
    t = t.add(&e);
    t.reduce();

    let mut ek = t.to_bytes();
    ek.extend_from_slice(&rho);
    let dk = s.to_bytes();
    (ek, dk)
}

/// Encrypts a 32-byte message under `ekp`, using `ran` as the encryption
/// randomness.
pub fn encrypt<P: MlKemParams>(ran: &[u8; SYM_LEN], ekp: &[u8], msg: &[u8; SYM_LEN]) -> Vec<u8> {
    let t = PolyVec::from_bytes(&ekp[..P::polyvec_bytes()], P::K);
    let mut rho = [0u8; SYM_LEN];
    rho.copy_from_slice(&ekp[P::polyvec_bytes()..P::polyvec_bytes() + SYM_LEN]);
    let m = Poly::from_msg(msg);

    let a = gen_matrix::<P>(&rho, false);

    let mut nonce = 0u8;
    let mut r = PolyVec { vec: (0..P::K).map(|_| { let p = sample_poly_cbd(P::ETA1, ran, nonce); nonce += 1; p }).collect() };
    let e1 = PolyVec { vec: (0..P::K).map(|_| { let p = sample_poly_cbd(P::ETA2, ran, nonce); nonce += 1; p }).collect() };
    let e2 = sample_poly_cbd(P::ETA2, ran, nonce);

    r.ntt();

    let mut u_polys = Vec::with_capacity(P::K);
    for row in &a {
        u_polys.push(PolyVec::basemul_acc(row, &r));
    }
    let mut u = PolyVec { vec: u_polys };
    u.invntt();
    u = u.add(&e1);
    u.reduce();

    let mut v = PolyVec::basemul_acc(&t, &r);
    v.invntt();
    v = v.add(&e2);
    v = v.add(&m);
    v.reduce();

    let mut ct = u.compress(P::DU);
    ct.extend_from_slice(&v.compress(P::DV));
    ct
}

/// Decrypts a ciphertext produced by [`encrypt`] under the matching `dkp`.
pub fn decrypt<P: MlKemParams>(dkp: &[u8], ct: &[u8]) -> [u8; SYM_LEN] {
    let s = PolyVec::from_bytes(dkp, P::K);
    let u_bytes = P::polyvec_compress_bytes();
    let mut u = PolyVec::decompress(&ct[..u_bytes], P::DU, P::K);
    let v = Poly::decompress(&ct[u_bytes..], P::DV);

    u.ntt();
    let mut m = PolyVec::basemul_acc(&s, &u);
    m.invntt();
    m = v.sub(&m);
    m.reduce();

    m.to_msg()
}

const _: () = assert!(N == 256);
