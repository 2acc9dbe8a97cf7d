//! A length-`k` vector of ring elements, `k` fixed per parameter set at
//! runtime (2/3/4 for ML-KEM-512/768/1024) rather than as a const
//! generic — `[NEW]`, grounded in `mlkem_768.c`'s `struct polyvec` but
//! generalized across all three module ranks instead of being
//! regenerated per-`K`, the way the original's `mlkem_512.c`/`_768.c`/
//! `_1024.c` duplicate the same logic three times.

use super::poly::Poly;

#[derive(Clone)]
pub struct PolyVec {
    pub vec: Vec<Poly>,
}

impl PolyVec {
    pub fn zero(k: usize) -> Self {
        Self { vec: vec![Poly::zero(); k] }
    }

    pub fn k(&self) -> usize {
        self.vec.len()
    }

    pub fn ntt(&mut self) {
        for p in self.vec.iter_mut() {
            p.ntt();
        }
    }

    pub fn invntt(&mut self) {
        for p in self.vec.iter_mut() {
            p.invntt();
        }
    }

    pub fn reduce(&mut self) {
        for p in self.vec.iter_mut() {
            p.reduce();
        }
    }

    pub fn add(&self, other: &PolyVec) -> PolyVec {
        PolyVec { vec: self.vec.iter().zip(&other.vec).map(|(a, b)| a.add(b)).collect() }
    }

    /// Inner product `a . b` in the NTT domain, reduced once at the end.
    pub fn basemul_acc(a: &PolyVec, b: &PolyVec) -> Poly {
        let mut r = Poly::basemul(&a.vec[0], &b.vec[0]);
        for i in 1..a.k() {
            r = r.add(&Poly::basemul(&a.vec[i], &b.vec[i]));
        }
        r.reduce();
        r
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.vec.iter().flat_map(|p| p.to_bytes()).collect()
    }

    pub fn from_bytes(buf: &[u8], k: usize) -> Self {
        let mut vec = Vec::with_capacity(k);
        for chunk in buf.chunks_exact(super::consts::POLY_BYTES).take(k) {
            vec.push(Poly::from_bytes(chunk));
        }
        Self { vec }
    }

    pub fn compress(&self, du: u32) -> Vec<u8> {
        self.vec.iter().flat_map(|p| p.compress(du)).collect()
    }

    pub fn decompress(buf: &[u8], du: u32, k: usize) -> Self {
        let bytes_per_poly = (super::consts::N * du as usize + 7) / 8;
        let mut vec = Vec::with_capacity(k);
        for chunk in buf.chunks_exact(bytes_per_poly).take(k) {
            vec.push(Poly::decompress(chunk, du));
        }
        Self { vec }
    }
}
