//! Montgomery reduction (`REDC`) context: `N`, `R² mod N`, `N'`, and the
//! constant-time exponentiation built on top of it (`redc_init`,
//! `redc_mod`, `redc_mont`, `redc_pow`).
//!
//! `redc_pow` is the only modular-exponentiation entry point that should
//! ever see a secret exponent; [`BigUint::modpow`](super::BigUint::modpow)
//! is non-constant-time and is reserved for public-exponent use such as
//! RSA signature verification.

use super::limbs;
use super::BigUint;
use crate::error::BigNumError;

/// An immutable Montgomery context for a fixed odd modulus `n`.
///
/// Not `Copy`: `LIMBS` can be large enough (8448 bits) that an implicit
/// copy would be surprising, so this only derives `Clone`.
#[derive(Clone)]
pub struct MontgomeryCtx<const LIMBS: usize> {
    n: [u32; LIMBS],
    /// `R² mod N`, used to move an operand into Montgomery form with a
    /// single `redc_mont` instead of a separate conversion step.
    r2: [u32; LIMBS],
    /// `-N⁻¹ mod 2³²`.
    n_prime: u32,
}

impl<const LIMBS: usize> MontgomeryCtx<LIMBS> {
    /// Builds the context for modulus `n` (`redc_init`).
    pub fn new(n: &BigUint<LIMBS>) -> Result<Self, BigNumError> {
        if n.is_zero() || n.limbs[0] & 1 == 0 {
            return Err(BigNumError::EvenModulus);
        }

        let n0 = n.limbs[0];
        // Newton's method for the inverse of an odd word mod 2^32;
        // doubles the correct bits each iteration, 5 rounds suffice for
        // a 32-bit word (converges quadratically from a 3-bit seed).
        let mut inv = n0;
        for _ in 0..4 {
            inv = inv.wrapping_mul(2u32.wrapping_sub(n0.wrapping_mul(inv)));
        }
        let n_prime = 0u32.wrapping_sub(inv);

        // r mod n via repeated doubling, then r2 = (r mod n)^2 mod n.
        let mut r_mod_n = [0u32; LIMBS];
        r_mod_n[0] = 1;
        for _ in 0..(LIMBS * 32) {
            let doubled = limbs::add(&r_mod_n, &r_mod_n);
            r_mod_n = if limbs::cmp(&doubled, &n.limbs) != std::cmp::Ordering::Less {
                pad(limbs::sub(&doubled, &n.limbs))
            } else {
                pad(doubled)
            };
        }
        let wide = limbs::mul(&r_mod_n, &r_mod_n);
        let (_, r2_wide) = limbs::divmod(&wide, &n.limbs);
        let r2 = pad(r2_wide);

        Ok(Self {
            n: n.limbs,
            r2,
            n_prime,
        })
    }

    /// `a mod n`, represented as a plain `BigUint` (`redc_mod`).
    pub fn reduce(&self, a: &BigUint<LIMBS>) -> BigUint<LIMBS> {
        let (_, r) = limbs::divmod(&a.limbs, &self.n);
        BigUint {
            negative: false,
            limbs: pad(r),
        }
    }

    fn to_mont(&self, a: &BigUint<LIMBS>) -> [u32; LIMBS] {
        self.redc_raw(&limbs::mul(&a.limbs, &self.r2))
    }

    fn from_mont(&self, a: &[u32; LIMBS]) -> [u32; LIMBS] {
        self.redc_raw(&a.to_vec())
    }

    /// Montgomery multiplication of two values already in Montgomery form
    /// (`redc_mont`): computes `a * b * R⁻¹ mod n`.
    fn mont_mul(&self, a: &[u32; LIMBS], b: &[u32; LIMBS]) -> [u32; LIMBS] {
        self.redc_raw(&limbs::mul(a, b))
    }

    /// Core REDC step on a (possibly double-width) raw limb product.
    fn redc_raw(&self, t_in: &[u32]) -> [u32; LIMBS] {
        let mut t = vec![0u32; 2 * LIMBS + 1];
        for (i, &x) in t_in.iter().enumerate().take(2 * LIMBS) {
            t[i] = x;
        }

        for i in 0..LIMBS {
            let m = t[i].wrapping_mul(self.n_prime);
            let mut carry: u64 = 0;
            for j in 0..LIMBS {
                let prod = m as u64 * self.n[j] as u64 + t[i + j] as u64 + carry;
                t[i + j] = prod as u32;
                carry = prod >> 32;
            }
            let mut k = i + LIMBS;
            while carry != 0 {
                let s = t[k] as u64 + carry;
                t[k] = s as u32;
                carry = s >> 32;
                k += 1;
            }
        }

        let candidate = &t[LIMBS..=2 * LIMBS];
        let result = if limbs::cmp(candidate, &self.n) != std::cmp::Ordering::Less {
            limbs::sub(candidate, &self.n)
        } else {
            candidate.to_vec()
        };
        pad(result)
    }

    /// Constant-time modular exponentiation (`redc_pow`): the only
    /// exponentiation routine that should be used with a secret exponent.
    /// Every bit does a Montgomery square followed by a Montgomery
    /// multiply, with the multiply's result selected via a branch-free
    /// mask rather than a conditional jump.
    pub fn redc_pow(&self, base: &BigUint<LIMBS>, exp: &BigUint<LIMBS>) -> BigUint<LIMBS> {
        let base_mont = self.to_mont(base);
        let mut r_mont = self.to_mont(&BigUint::one());

        let total_bits = LIMBS * 32;
        for i in (0..total_bits).rev() {
            let squared = self.mont_mul(&r_mont, &r_mont);
            let multiplied = self.mont_mul(&squared, &base_mont);
            let bit = (exp.limbs[i / 32] >> (i % 32)) & 1;
            r_mont = cselect(bit, &multiplied, &squared);
        }

        BigUint {
            negative: false,
            limbs: self.from_mont(&r_mont),
        }
    }
}

/// Branch-free select: `bit == 1` picks `a`, `bit == 0` picks `b`.
fn cselect<const LIMBS: usize>(bit: u32, a: &[u32; LIMBS], b: &[u32; LIMBS]) -> [u32; LIMBS] {
    let mask = 0u32.wrapping_sub(bit);
    let mut out = [0u32; LIMBS];
    for i in 0..LIMBS {
        out[i] = (a[i] & mask) | (b[i] & !mask);
    }
    out
}

fn pad<const LIMBS: usize>(v: Vec<u32>) -> [u32; LIMBS] {
    let mut out = [0u32; LIMBS];
    for (i, &x) in v.iter().take(LIMBS).enumerate() {
        out[i] = x;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bignum::BigUint;

    type Bn256 = BigUint<8>;

    #[test]
    fn redc_pow_matches_modpow() {
        let base = Bn256::from_u32(7);
        let exp = Bn256::from_u32(129);
        let modulus = Bn256::from_u32(997); // prime, odd

        let ctx = MontgomeryCtx::new(&modulus).unwrap();
        let via_mont = ctx.redc_pow(&base, &exp);
        let via_plain = base.modpow(&exp, &modulus).unwrap();
        assert_eq!(via_mont, via_plain);
    }
}
