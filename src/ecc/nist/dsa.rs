//! ECDH and ECDSA, generic over [`super::curve::NistCurve`].
//!
//! Grounded in `ecc.h`'s `ecdh_*`/`ecdsa_*` pair per curve; nonces are
//! drawn from [`crate::rng::Csprng`] rather than derived deterministically
//! (RFC 6979) — a disclosed simplification, see `DESIGN.md`.

use super::curve::{Jacobian, NistCurve};
use crate::error::EccError;
use crate::field::modular::ModElement;
use crate::rng::Csprng;

type Scalar<C> = ModElement<<C as NistCurve>::ScalarM>;

fn random_nonzero_scalar<C: NistCurve>() -> Scalar<C> {
    let mut rng = Csprng::new();
    loop {
        let mut buf = vec![0u8; C::BYTE_LEN];
        rng.fill_bytes(&mut buf);
        let candidate = Scalar::<C>::from_bytes_be(&buf);
        if !candidate.is_zero() {
            return candidate;
        }
    }
}

pub fn ecdh_public_key<C: NistCurve>(private: &[u8]) -> Result<Vec<u8>, EccError> {
    let d = Scalar::<C>::from_bytes_be(private);
    Jacobian::<C>::scalar_mul_base(&d).encode_uncompressed()
}

pub fn ecdh_shared_key<C: NistCurve>(private: &[u8], peer_public: &[u8]) -> Result<Vec<u8>, EccError> {
    let d = Scalar::<C>::from_bytes_be(private);
    let q = Jacobian::<C>::decode_uncompressed(peer_public)?;
    let shared = q.scalar_mul(&d);
    let (x, _y) = shared.to_affine().ok_or(EccError::ContributoryBehavior)?;
    Ok(x.to_bytes_be(C::BYTE_LEN))
}

pub fn ecdsa_sign<C: NistCurve>(message: &[u8], private: &[u8]) -> Vec<u8> {
    let d = Scalar::<C>::from_bytes_be(private);
    let e = Scalar::<C>::from_bytes_be(&C::hash(message));

    loop {
        let k = random_nonzero_scalar::<C>();
        let r_point = Jacobian::<C>::scalar_mul_base(&k);
        let (rx, _) = match r_point.to_affine() {
            Some(v) => v,
            None => continue,
        };
        let r = Scalar::<C>::from_bytes_be(&rx.to_bytes_be(C::BYTE_LEN));
        if r.is_zero() {
            continue;
        }

        let s = k.invert().mul(&e.add(&r.mul(&d)));
        if s.is_zero() {
            continue;
        }

        let mut out = Vec::with_capacity(2 * C::BYTE_LEN);
        out.extend_from_slice(&r.to_bytes_be(C::BYTE_LEN));
        out.extend_from_slice(&s.to_bytes_be(C::BYTE_LEN));
        return out;
    }
}

pub fn ecdsa_verify<C: NistCurve>(signature: &[u8], message: &[u8], public: &[u8]) -> Result<(), EccError> {
    if signature.len() != 2 * C::BYTE_LEN {
        return Err(EccError::InvalidEncoding);
    }
    let r = Scalar::<C>::from_bytes_be(&signature[..C::BYTE_LEN]);
    let s = Scalar::<C>::from_bytes_be(&signature[C::BYTE_LEN..]);
    if r.is_zero() || s.is_zero() {
        return Err(EccError::InvalidSignature);
    }

    let q = Jacobian::<C>::decode_uncompressed(public)?;
    let e = Scalar::<C>::from_bytes_be(&C::hash(message));

    let w = s.invert();
    let u1 = e.mul(&w);
    let u2 = r.mul(&w);

    let point = Jacobian::<C>::scalar_mul_base(&u1).add(&q.scalar_mul(&u2));
    let (x, _) = point.to_affine().ok_or(EccError::InvalidSignature)?;
    let v = Scalar::<C>::from_bytes_be(&x.to_bytes_be(C::BYTE_LEN));

    if v == r {
        Ok(())
    } else {
        Err(EccError::InvalidSignature)
    }
}
