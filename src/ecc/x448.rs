//! X448 Diffie-Hellman key exchange (RFC 7748), the 448-bit sibling of
//! [`crate::ecc::x25519`]. The teacher shipped only the 25519 family;
//! this module mirrors its Montgomery-ladder shape on
//! `crate::field::f448::FieldElement` with Curve448's own clamp rule and
//! `A24` constant.

use crate::field::f448::FieldElement;

const A24: u64 = 39081;

fn u_to_field(u: &[u8; 56]) -> FieldElement {
    FieldElement::from_bytes(u)
}

fn clamp(scalar: &[u8; 56]) -> [u8; 56] {
    let mut k = *scalar;
    k[0] &= 252;
    k[55] |= 128;
    k
}

fn ladder(scalar: &[u8; 56], u_bytes: &[u8; 56]) -> [u8; 56] {
    let k = clamp(scalar);
    let u = u_to_field(u_bytes);

    let mut x1 = u;
    let mut x2 = FieldElement::ONE;
    let mut z2 = FieldElement::ZERO;
    let mut x3 = u;
    let mut z3 = FieldElement::ONE;
    let mut swap = 0u8;

    for pos in (0..448).rev() {
        let bit = (k[pos / 8] >> (pos % 8)) & 1;
        swap ^= bit;
        FieldElement::conditional_swap(&mut x2, &mut x3, swap);
        FieldElement::conditional_swap(&mut z2, &mut z3, swap);
        swap = bit;

        let a = x2.add(&z2);
        let aa = a.square();
        let b = x2.sub(&z2);
        let bb = b.square();
        let e = aa.sub(&bb);
        let c = x3.add(&z3);
        let d = x3.sub(&z3);
        let da = d.mul(&a);
        let cb = c.mul(&b);

        x3 = da.add(&cb).square();
        z3 = x1.mul(&da.sub(&cb).square());
        x2 = aa.mul(&bb);

        let a24e = e.mul_small(A24);
        z2 = e.mul(&bb.add(&a24e));
    }

    FieldElement::conditional_swap(&mut x2, &mut x3, swap);
    FieldElement::conditional_swap(&mut z2, &mut z3, swap);

    x2.mul(&z2.invert()).to_bytes()
}

/// Derives the public key for a clamped private scalar.
pub fn public_key(private: &[u8; 56]) -> [u8; 56] {
    let mut base = [0u8; 56];
    base[0] = 5;
    ladder(private, &base)
}

/// Computes the X448 shared secret.
pub fn shared_key(private: &[u8; 56], peer_public: &[u8; 56]) -> [u8; 56] {
    ladder(private, peer_public)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutual_exchange_agrees() {
        let a = [0x11u8; 56];
        let b = [0x22u8; 56];
        let pa = public_key(&a);
        let pb = public_key(&b);
        assert_eq!(shared_key(&a, &pb), shared_key(&b, &pa));
    }
}
