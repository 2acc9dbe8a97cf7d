//! X25519 Diffie-Hellman key exchange (RFC 7748).
//!
//! Grounded in the Montgomery ladder from `keys/x25519/core.rs` /
//! `signatures/ed25519/core.rs::exchange`, rewired onto
//! `crate::field::f25519::FieldElement` directly (the teacher's copy
//! additionally ran the peer's u-coordinate through an Edwards
//! `(u+1)/(1-u)` birational map before the ladder, which has no place in
//! plain X25519 decoding and is not reproduced here).

use crate::field::f25519::FieldElement;

const BASE_POINT: [u8; 32] = {
    let mut b = [0u8; 32];
    b[0] = 9;
    b
};

fn clamp(scalar: &[u8; 32]) -> [u8; 32] {
    let mut e = *scalar;
    e[0] &= 248;
    e[31] &= 127;
    e[31] |= 64;
    e
}

/// The constant-time Montgomery ladder shared by `public_key` and
/// `shared_key`: computes `scalar * u` on Curve25519.
fn ladder(scalar: &[u8; 32], u_bytes: &[u8; 32]) -> [u8; 32] {
    let e = clamp(scalar);
    let x1 = FieldElement::from_bytes(u_bytes);

    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = x1;
    let mut z3 = FieldElement::ONE;

    let mut swap = 0u32;

    for pos in (0..=254).rev() {
        let b = ((e[pos >> 3] >> (pos & 7)) & 1) as u32;
        swap ^= b;

        x2.swap(&mut x3, swap);
        z2.swap(&mut z3, swap);
        swap = b;

        let tmp0 = x3 - z3;
        let tmp1 = x2 - z2;
        x2 = x2 + z2;
        z2 = x3 + z3;

        let z3_new = tmp0 * x2;
        let z2_new = z2 * tmp1;

        let tmp0 = tmp1.square();
        let tmp1 = x2.square();

        x3 = z3_new + z2_new;
        z2 = z3_new - z2_new;
        x2 = tmp1 * tmp0;

        let tmp1 = tmp1 - tmp0;
        z2 = z2.square();
        let mut z3 = tmp1.mul121666();
        x3 = x3.square();
        let tmp0 = tmp0 + z3;

        z3 = x1 * z2;
        z2 = tmp1 * tmp0;
    }

    x2.swap(&mut x3, swap);
    z2.swap(&mut z3, swap);

    (x2 * z2.invert()).to_bytes()
}

/// Derives the public key (`u`-coordinate) for a clamped private scalar
/// (`x25519::public_key`, renamed from the original `ecdh_x25519_public`).
pub fn public_key(private: &[u8; 32]) -> [u8; 32] {
    ladder(private, &BASE_POINT)
}

/// Computes the X25519 shared secret (`x25519::shared_key`).
///
/// Per RFC 7748 the result may legitimately be all-zero for certain
/// low-order peer keys; callers that care must reject that output
/// themselves (this module performs no implicit validation, matching
/// X25519's own semantics).
pub fn shared_key(private: &[u8; 32], peer_public: &[u8; 32]) -> [u8; 32] {
    ladder(private, peer_public)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutual_exchange_agrees() {
        let a = [0x11u8; 32];
        let b = [0x22u8; 32];

        let pa = public_key(&a);
        let pb = public_key(&b);

        assert_eq!(shared_key(&a, &pb), shared_key(&b, &pa));
    }
}
