//! Ed448 (Ed448-Goldilocks) key generation, signing, and verification
//! (RFC 8032 §5.2), the 448-bit sibling of [`crate::ecc::ed25519::core`].
//!
//! The shape mirrors the 25519 core directly — seed expansion, nonce
//! derivation, `s = r + k*a mod L` — but Ed448 hashes with SHAKE256
//! (114-byte output, not SHA-512) and prefixes every hash input with the
//! fixed `dom4` context string required by RFC 8032 §5.2.3.

use super::group::EdPoint;
use crate::error::EccError;
use crate::field::scalar448::{reduce_wide_be, Scalar448};
use crate::digest::shake256;
use crate::rng::Csprng;

const SEED_LEN: usize = 57;
const HASH_LEN: usize = 114;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey([u8; 57]);

impl PublicKey {
    pub fn to_bytes(&self) -> [u8; 57] {
        self.0
    }

    pub fn from_bytes(bytes: [u8; 57]) -> Self {
        Self(bytes)
    }
}

#[derive(Clone, Copy)]
pub struct PrivateKey {
    scalar: Scalar448,
    prefix: [u8; SEED_LEN],
}

impl PrivateKey {
    pub(crate) fn scalar(&self) -> Scalar448 {
        self.scalar
    }

    pub fn prefix(&self) -> [u8; SEED_LEN] {
        self.prefix
    }
}

#[derive(Clone, Copy)]
pub struct Signature([u8; 114]);

impl Signature {
    pub fn from_bytes(bytes: [u8; 114]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 114] {
        self.0
    }
}

/// `dom4(phflag, context)` per RFC 8032 §5.2.3: `"SigEd448"` followed by
/// the phflag octet and the context's length octet, then the context
/// itself. Pure EdDSA (no prehash, empty context) uses `phflag = 0`.
fn dom4(phflag: u8, context: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(10 + context.len());
    out.extend_from_slice(b"SigEd448");
    out.push(phflag);
    out.push(context.len() as u8);
    out.extend_from_slice(context);
    out
}

/// Derives `(scalar, prefix)` from a 57-byte seed per RFC 8032 §5.2.5.
fn expand_seed(seed: &[u8; SEED_LEN]) -> (Scalar448, [u8; SEED_LEN]) {
    let digest = shake256(seed, HASH_LEN);

    let mut a_bytes = [0u8; SEED_LEN];
    a_bytes.copy_from_slice(&digest[..SEED_LEN]);
    a_bytes[0] &= 252;
    a_bytes[55] |= 128;
    a_bytes[56] = 0;

    let mut prefix = [0u8; SEED_LEN];
    prefix.copy_from_slice(&digest[SEED_LEN..2 * SEED_LEN]);

    // scalar bytes are little-endian per RFC 8032; reduce_wide_be wants
    // big-endian, so reverse before reducing.
    let mut a_be = a_bytes;
    a_be.reverse();
    (reduce_wide_be(&a_be), prefix)
}

pub fn generate_keypair() -> (PublicKey, PrivateKey) {
    let mut rng = Csprng::new();
    let mut seed = [0u8; SEED_LEN];
    rng.fill_bytes(&mut seed);
    keypair_from_seed(&seed)
}

/// Deterministic keypair derivation from a caller-supplied seed (used by
/// test vectors; `generate_keypair` is the CSPRNG-seeded entry point).
pub fn keypair_from_seed(seed: &[u8; SEED_LEN]) -> (PublicKey, PrivateKey) {
    let (scalar, prefix) = expand_seed(seed);
    let public = PublicKey(EdPoint::scalar_mul_base(&scalar).to_bytes());
    (public, PrivateKey { scalar, prefix })
}

fn hash_to_scalar(parts: &[&[u8]]) -> Scalar448 {
    let mut buf = Vec::new();
    for part in parts {
        buf.extend_from_slice(part);
    }
    let digest = shake256(&buf, HASH_LEN);
    let mut be = digest;
    be.reverse();
    reduce_wide_be(&be)
}

pub fn sign(message: &[u8], public: PublicKey, private: PrivateKey) -> Signature {
    let dom = dom4(0, &[]);
    let a = private.scalar();
    let prefix = private.prefix();
    let public_bytes = public.to_bytes();

    let r = hash_to_scalar(&[&dom, &prefix, message]);

    let r_point = EdPoint::scalar_mul_base(&r);
    let r_bytes = r_point.to_bytes();

    let k = hash_to_scalar(&[&dom, &r_bytes, &public_bytes, message]);

    let s = r.add(&k.mul(&a));
    let s_bytes = s.to_bytes_be(57);
    let mut s_le = s_bytes;
    s_le.reverse();

    let mut signature = [0u8; 114];
    signature[..57].copy_from_slice(&r_bytes);
    signature[57..].copy_from_slice(&s_le[..57]);
    Signature(signature)
}

pub fn verify(signature: Signature, message: &[u8], public: PublicKey) -> Result<(), EccError> {
    let dom = dom4(0, &[]);
    let public_bytes = public.to_bytes();

    let mut r_bytes = [0u8; 57];
    r_bytes.copy_from_slice(&signature.0[..57]);
    let mut s_le = [0u8; 57];
    s_le.copy_from_slice(&signature.0[57..]);
    let mut s_be = s_le;
    s_be.reverse();

    let a = EdPoint::decompress(&public_bytes)?;
    let r_point = EdPoint::decompress(&r_bytes)?;
    let s = reduce_wide_be(&s_be);

    let k = hash_to_scalar(&[&dom, &r_bytes, &public_bytes, message]);

    let lhs = EdPoint::scalar_mul_base(&s);
    let rhs = r_point.add(&a.scalar_mul(&k));

    if lhs.to_bytes() == rhs.to_bytes() {
        Ok(())
    } else {
        Err(EccError::InvalidSignature)
    }
}
