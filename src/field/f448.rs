//! Field arithmetic for `p = 2^448 - 2^224 - 1` (Curve448 / Ed448), the
//! "Goldilocks" prime.
//!
//! Elements are eight 56-bit limbs, little-endian, matching
//! `448 = 8 * 56` exactly. Reduction uses the identity
//! `2^448 ≡ 2^224 + 1 (mod p)`: a double-width product's high half
//! (limbs 8..16) is folded back in twice — once at its own position
//! (the `+1` term) and once shifted up by four limbs (the `2^224` term,
//! since `224 / 56 == 4`).

const MASK56: u64 = (1 << 56) - 1;

#[derive(Clone, Copy, Debug)]
pub struct FieldElement(pub [u64; 8]);

impl FieldElement {
    pub const ZERO: Self = Self([0; 8]);
    pub const ONE: Self = Self([1, 0, 0, 0, 0, 0, 0, 0]);

    pub fn from_bytes(bytes: &[u8; 56]) -> Self {
        let mut limbs = [0u64; 8];
        let mut acc: u128 = 0;
        let mut acc_bits = 0u32;
        let mut limb_idx = 0;
        for &b in bytes.iter() {
            acc |= (b as u128) << acc_bits;
            acc_bits += 8;
            if acc_bits >= 56 && limb_idx < 8 {
                limbs[limb_idx] = (acc & MASK56 as u128) as u64;
                acc >>= 56;
                acc_bits -= 56;
                limb_idx += 1;
            }
        }
        if limb_idx < 8 {
            limbs[limb_idx] = (acc & MASK56 as u128) as u64;
        }
        Self(limbs)
    }

    pub fn to_bytes(&self) -> [u8; 56] {
        let v = self.normalized();
        let mut out = [0u8; 56];
        let mut acc: u128 = 0;
        let mut acc_bits = 0u32;
        let mut pos = 0usize;
        for &limb in v.0.iter() {
            acc |= (limb as u128) << acc_bits;
            acc_bits += 56;
            while acc_bits >= 8 && pos < 56 {
                out[pos] = (acc & 0xFF) as u8;
                acc >>= 8;
                acc_bits -= 8;
                pos += 1;
            }
        }
        out
    }

    fn fold_carry(limbs: &mut [u64; 8], mut carry: u128) {
        while carry != 0 {
            let v0 = limbs[0] as u128 + carry;
            limbs[0] = (v0 & MASK56 as u128) as u64;
            let c0 = v0 >> 56;

            let v4 = limbs[4] as u128 + carry + c0;
            limbs[4] = (v4 & MASK56 as u128) as u64;
            carry = v4 >> 56;

            for i in 1..8 {
                if i == 4 {
                    continue;
                }
                if carry == 0 {
                    break;
                }
                let v = limbs[i] as u128 + carry;
                limbs[i] = (v & MASK56 as u128) as u64;
                carry = v >> 56;
            }
        }
    }

    fn carry_propagate(limbs: [u64; 8]) -> Self {
        let mut out = limbs;
        let mut carry: u128 = 0;
        for i in 0..8 {
            let v = out[i] as u128 + carry;
            out[i] = (v & MASK56 as u128) as u64;
            carry = v >> 56;
        }
        Self::fold_carry(&mut out, carry);
        Self(out)
    }

    /// Reduces to the canonical representative in `0..p`.
    pub fn normalized(&self) -> Self {
        let mut v = Self::carry_propagate(self.0).0;
        let p: [u64; 8] = [
            MASK56, MASK56, MASK56, MASK56,
            MASK56 - 1, MASK56, MASK56, MASK56,
        ];
        // at most one conditional subtraction is needed since inputs are
        // bounded to a few multiples of p by the accumulation above.
        for _ in 0..2 {
            let mut borrow = 0i128;
            let mut diff = [0u64; 8];
            let mut ge = true;
            for i in (0..8).rev() {
                if v[i] != p[i] {
                    ge = v[i] > p[i];
                    break;
                }
            }
            if !ge {
                break;
            }
            for i in 0..8 {
                let d = v[i] as i128 - p[i] as i128 - borrow;
                if d < 0 {
                    diff[i] = (d + (1i128 << 56)) as u64;
                    borrow = 1;
                } else {
                    diff[i] = d as u64;
                    borrow = 0;
                }
            }
            v = diff;
        }
        Self(v)
    }

    pub fn add(&self, other: &Self) -> Self {
        let mut limbs = [0u64; 8];
        for i in 0..8 {
            limbs[i] = self.0[i] + other.0[i];
        }
        Self::carry_propagate(limbs)
    }

    pub fn sub(&self, other: &Self) -> Self {
        // Add a multiple of p large enough to keep every limb non-negative,
        // then reduce normally.
        let bias: u64 = MASK56 << 1;
        let mut limbs = [0u64; 8];
        for i in 0..8 {
            limbs[i] = self.0[i] + bias - other.0[i];
        }
        limbs[4] = limbs[4].wrapping_sub(2); // p's limb 4 is (2^56-1) - 1
        Self::carry_propagate(limbs)
    }

    pub fn mul(&self, other: &Self) -> Self {
        let mut t = [0u128; 16];
        for i in 0..8 {
            for j in 0..8 {
                t[i + j] += self.0[i] as u128 * other.0[j] as u128;
            }
        }
        let mut acc = [0u128; 8];
        acc[..8].copy_from_slice(&t[..8]);
        for i in 8..16 {
            acc[i - 8] += t[i];
            acc[i - 4] += t[i];
        }

        let mut limbs = [0u64; 8];
        let mut carry: u128 = 0;
        for i in 0..8 {
            let v = acc[i] + carry;
            limbs[i] = (v & MASK56 as u128) as u64;
            carry = v >> 56;
        }
        Self::fold_carry(&mut limbs, carry);
        Self(limbs)
    }

    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplies by a small public constant (e.g. the Montgomery
    /// ladder's `A24`), avoiding a full double-width product.
    pub fn mul_small(&self, c: u64) -> Self {
        let mut t = [0u128; 8];
        for i in 0..8 {
            t[i] = self.0[i] as u128 * c as u128;
        }
        let mut limbs = [0u64; 8];
        let mut carry: u128 = 0;
        for i in 0..8 {
            let v = t[i] + carry;
            limbs[i] = (v & MASK56 as u128) as u64;
            carry = v >> 56;
        }
        Self::fold_carry(&mut limbs, carry);
        Self(limbs)
    }

    pub fn neg(&self) -> Self {
        Self::ZERO.sub(self)
    }

    /// `self^-1 mod p` via Fermat's little theorem (`p - 2`), by
    /// square-and-multiply over the fixed exponent bit pattern.
    pub fn invert(&self) -> Self {
        let mut result = Self::ONE;
        let base = *self;
        // p = 2^448 - 2^224 - 1 is, in binary, all-ones except bit 224.
        // p - 2 additionally clears bit 1: bit0=1, bit1=0, bits 2..223=1,
        // bit224=0, bits 225..447=1.
        let exponent_is_one = |bit: usize| -> bool {
            match bit {
                1 | 224 => false,
                _ => true,
            }
        };
        for bit in (0..448).rev() {
            result = result.square();
            if exponent_is_one(bit) {
                result = result.mul(&base);
            }
        }
        result
    }

    /// `self^((p+1)/4) mod p`, a square root when `self` is a quadratic
    /// residue (`p ≡ 3 (mod 4)`, so this is the direct Tonelli-Shanks
    /// shortcut rather than the `p ≡ 5 (mod 8)` case Curve25519 needs).
    pub fn sqrt_candidate(&self) -> Self {
        let mut result = Self::ONE;
        let base = *self;
        // (p+1)/4 = 2^446 - 2^222: bits 222..=445 are 1, all others 0.
        for bit in (0..448).rev() {
            result = result.square();
            if (222..=445).contains(&bit) {
                result = result.mul(&base);
            }
        }
        result
    }

    pub fn is_negative(&self) -> bool {
        self.normalized().0[0] & 1 == 1
    }

    pub fn conditional_swap(a: &mut Self, b: &mut Self, bit: u8) {
        let mask = 0u64.wrapping_sub(bit as u64);
        for i in 0..8 {
            let t = mask & (a.0[i] ^ b.0[i]);
            a.0[i] ^= t;
            b.0[i] ^= t;
        }
    }
}

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.normalized().0 == other.normalized().0
    }
}
impl Eq for FieldElement {}

impl std::ops::Add for FieldElement {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        FieldElement::add(&self, &rhs)
    }
}
impl std::ops::Sub for FieldElement {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        FieldElement::sub(&self, &rhs)
    }
}
impl std::ops::Mul for FieldElement {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        FieldElement::mul(&self, &rhs)
    }
}
impl std::ops::Neg for FieldElement {
    type Output = Self;
    fn neg(self) -> Self {
        FieldElement::neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_roundtrip() {
        let a = FieldElement([3, 0, 0, 0, 0, 0, 0, 0]);
        let b = FieldElement([5, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(a.add(&b).sub(&b), a.normalized());
    }

    #[test]
    fn mul_by_one() {
        let a = FieldElement([42, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(a.mul(&FieldElement::ONE), a.normalized());
    }

    #[test]
    fn bytes_roundtrip() {
        let mut bytes = [0u8; 56];
        bytes[0] = 9;
        bytes[10] = 200;
        let fe = FieldElement::from_bytes(&bytes);
        assert_eq!(fe.to_bytes(), bytes);
    }
}
