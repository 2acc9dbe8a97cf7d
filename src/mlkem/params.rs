//! Per-variant parameters (module rank `K`, noise widths, compression
//! widths) — `[NEW]`: the original regenerates the whole K-PKE/KEM
//! pipeline per file (`mlkem_512.c`/`_768.c`/`_1024.c`); here the three
//! variants are zero-sized marker types implementing one trait, and the
//! pipeline in [`super::kpke`]/[`super::kem`] is written once, generic
//! over it.

use super::consts::{N, POLY_BYTES, SYM_LEN};

pub trait MlKemParams {
    const K: usize;
    const ETA1: u32;
    const ETA2: u32;
    const DU: u32;
    const DV: u32;

    fn polyvec_bytes() -> usize {
        POLY_BYTES * Self::K
    }
    fn polyvec_compress_bytes() -> usize {
        (N * Self::DU as usize / 8) * Self::K
    }
    fn ekpke_len() -> usize {
        Self::polyvec_bytes() + SYM_LEN
    }
    fn dkpke_len() -> usize {
        Self::polyvec_bytes()
    }
    fn ek_len() -> usize {
        Self::ekpke_len()
    }
    fn dk_len() -> usize {
        Self::dkpke_len() + Self::ek_len() + SYM_LEN * 2
    }
    fn ct_len() -> usize {
        Self::polyvec_compress_bytes() + (N * Self::DV as usize / 8)
    }
}

pub struct MlKem512;
impl MlKemParams for MlKem512 {
    const K: usize = 2;
    const ETA1: u32 = 3;
    const ETA2: u32 = 2;
    const DU: u32 = 10;
    const DV: u32 = 4;
}

pub struct MlKem768;
impl MlKemParams for MlKem768 {
    const K: usize = 3;
    const ETA1: u32 = 2;
    const ETA2: u32 = 2;
    const DU: u32 = 10;
    const DV: u32 = 4;
}

pub struct MlKem1024;
impl MlKemParams for MlKem1024 {
    const K: usize = 4;
    const ETA1: u32 = 2;
    const ETA2: u32 = 2;
    const DU: u32 = 11;
    const DV: u32 = 5;
}
