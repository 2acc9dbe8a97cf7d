//! Ed25519 key generation, signing, and verification (RFC 8032).
//!
//! Grounded in `signatures/ed25519/core.rs`, rewired onto the new
//! [`super::group`] (no precomputed tables) and onto
//! [`crate::field::scalar25519::Scalar`]. `exchange` is not carried here
//! — Ed25519 keys interoperating with X25519 is a separate conversion
//! concern handled by [`crate::ecc::x25519`] directly, and the teacher's
//! copy of that conversion ran the same flawed Edwards-to-Montgomery
//! remap as `keys/x25519/core.rs`.

use super::consttime::equal_u8_32;
use super::group::GeP3;
use crate::error::EccError;
use crate::field::scalar25519::Scalar;
use crate::digest::sha512;
use crate::rng::Csprng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

#[derive(Clone, Copy)]
pub struct PrivateKey {
    scalar: Scalar,
    prefix: [u8; 32],
}

impl PrivateKey {
    pub(crate) fn scalar(&self) -> Scalar {
        self.scalar
    }

    pub fn prefix(&self) -> [u8; 32] {
        self.prefix
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.scalar.to_bytes());
        out[32..].copy_from_slice(&self.prefix);
        out
    }
}

#[derive(Clone, Copy)]
pub struct Signature([u8; 64]);

impl Signature {
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }
}

/// Derives `(scalar, prefix)` from a 32-byte seed per RFC 8032 §5.1.5.
fn expand_seed(seed: &[u8; 32]) -> (Scalar, [u8; 32]) {
    let digest = sha512(seed);

    let mut a_bytes = [0u8; 32];
    a_bytes.copy_from_slice(&digest[..32]);
    a_bytes[0] &= 248;
    a_bytes[31] &= 63;
    a_bytes[31] |= 64;

    let mut prefix = [0u8; 32];
    prefix.copy_from_slice(&digest[32..64]);

    (Scalar::from_bytes(&a_bytes), prefix)
}

pub fn generate_keypair() -> (PublicKey, PrivateKey) {
    let mut rng = Csprng::new();
    let mut seed = [0u8; 32];
    rng.fill_bytes(&mut seed);
    keypair_from_seed(&seed)
}

/// Deterministic keypair derivation from a caller-supplied seed (used by
/// test vectors; `generate_keypair` is the CSPRNG-seeded entry point).
pub fn keypair_from_seed(seed: &[u8; 32]) -> (PublicKey, PrivateKey) {
    let (scalar, prefix) = expand_seed(seed);
    let public = PublicKey(GeP3::scalar_mul_base(&scalar).to_bytes());
    (public, PrivateKey { scalar, prefix })
}

pub fn sign(message: &[u8], public: PublicKey, private: PrivateKey) -> Signature {
    let a = private.scalar();
    let prefix = private.prefix();

    let mut r_input = Vec::with_capacity(32 + message.len());
    r_input.extend_from_slice(&prefix);
    r_input.extend_from_slice(message);
    let r = Scalar::reduce(sha512(&r_input));

    let r_point = GeP3::scalar_mul_base(&r);
    let mut signature = [0u8; 64];
    signature[..32].copy_from_slice(&r_point.to_bytes());

    let mut k_input = Vec::with_capacity(32 + 32 + message.len());
    k_input.extend_from_slice(&signature[..32]);
    k_input.extend_from_slice(&public.to_bytes());
    k_input.extend_from_slice(message);
    let k = Scalar::reduce(sha512(&k_input));

    let s = Scalar::from_mul_sum(k, a, r);
    signature[32..].copy_from_slice(&s.to_bytes());

    Signature(signature)
}

pub fn verify(signature: Signature, message: &[u8], public: PublicKey) -> Result<(), EccError> {
    if signature.0[63] & 224 != 0 {
        return Err(EccError::InvalidSignature);
    }

    let a = GeP3::decompress(&public.to_bytes())?;

    let mut buf = Vec::with_capacity(32 + 32 + message.len());
    buf.extend_from_slice(&signature.0[..32]);
    buf.extend_from_slice(&public.to_bytes());
    buf.extend_from_slice(message);

    let h = Scalar::reduce(sha512(&buf));
    let s = Scalar::from_bytes(&signature.0[32..64]);

    let r = a.double_scalar_mul_base(&h, &s);
    let checker = r.to_bytes();

    if equal_u8_32(&checker, (&signature.0[..32]).try_into().unwrap()) {
        Ok(())
    } else {
        Err(EccError::InvalidSignature)
    }
}

/// Homomorphically shifts a keypair by `scalar` (key-blinding /
/// hierarchical derivation): `sk' = sk + scalar`, `pk' = pk + scalar*B`.
pub fn add_scalar(
    public_key: Option<&mut PublicKey>,
    private_key: Option<&mut PrivateKey>,
    scalar: Scalar,
) {
    let mut one_bytes = [0u8; 32];
    one_bytes[0] = 1;
    let one = Scalar::from_bytes(&one_bytes);

    let scalar_bytes = scalar.to_bytes();
    let mut clamped = [0u8; 32];
    clamped[..31].copy_from_slice(&scalar_bytes[..31]);
    clamped[31] = scalar_bytes[31] & 127;
    let clamped = Scalar::from_bytes(&clamped);

    match (private_key, public_key) {
        (Some(private), pub_opt) => {
            private.scalar = Scalar::from_mul_sum(one, clamped, private.scalar);

            let mut buf = [0u8; 64];
            buf[..32].copy_from_slice(&private.prefix);
            buf[32..].copy_from_slice(&scalar_bytes);
            private.prefix.copy_from_slice(&sha512(&buf)[..32]);

            if let Some(public) = pub_opt {
                *public = PublicKey(GeP3::scalar_mul_base(&private.scalar).to_bytes());
            }
        }
        (None, Some(public)) => {
            if let Ok(p3) = GeP3::decompress(&public.to_bytes()) {
                let r = p3.double_scalar_mul_base(&one, &clamped);
                *public = PublicKey(r.to_bytes());
            }
        }
        (None, None) => {}
    }
}
