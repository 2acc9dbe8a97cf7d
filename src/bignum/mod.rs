//! Fixed-width, sign-magnitude big-number arithmetic.
//!
//! `BigUint<LIMBS>` is the const-generic analogue of the original
//! per-width `bn4352_t`/`bn6400_t`/`bn8448_t` code generation: one
//! generic implementation instead of three copy-pasted modules, with
//! [`Bn4352`], [`Bn6400`], [`Bn8448`] as the three named widths.
//!
//! Despite the name, values carry an explicit [`sign`](BigUint::is_negative)
//! bit rather than using two's complement — all magnitude arithmetic goes
//! through `limbs`, and the sign is combined on top, exactly like the
//! original `bn_add`/`bn_sub` dispatching on operand signs.

mod limbs;
mod montgomery;

pub use montgomery::MontgomeryCtx;

use crate::error::BigNumError;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A fixed-width, sign-magnitude big integer with `LIMBS` limbs of 32
/// bits each, least-significant limb first.
#[derive(Clone, Copy)]
pub struct BigUint<const LIMBS: usize> {
    negative: bool,
    limbs: [u32; LIMBS],
}

/// 4352-bit width (comfortably covers RSA-4096 moduli and doubled-width
/// CRT intermediates).
pub type Bn4352 = BigUint<136>;
/// 6400-bit width.
pub type Bn6400 = BigUint<200>;
/// 8448-bit width.
pub type Bn8448 = BigUint<264>;

impl<const LIMBS: usize> BigUint<LIMBS> {
    pub const ZERO: Self = Self {
        negative: false,
        limbs: [0u32; LIMBS],
    };

    pub fn one() -> Self {
        let mut v = Self::ZERO;
        v.limbs[0] = 1;
        v
    }

    /// Sets this value to the single non-negative `u32` digit `d`,
    /// clearing all other limbs (the `set_u32` operation).
    pub fn set_u32(&mut self, d: u32) {
        self.negative = false;
        self.limbs = [0u32; LIMBS];
        self.limbs[0] = d;
    }

    pub fn from_u32(d: u32) -> Self {
        let mut v = Self::ZERO;
        v.set_u32(d);
        v
    }

    pub fn is_zero(&self) -> bool {
        self.limbs.iter().all(|&x| x == 0)
    }

    pub fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    fn normalize_sign(&mut self) {
        if self.is_zero() {
            self.negative = false;
        }
    }

    /// Number of significant bits in the magnitude (`bits`).
    pub fn bits(&self) -> usize {
        limbs::bits(&self.limbs)
    }

    /// Big-endian byte decoding into a value of this width (`from_bytes`).
    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, BigNumError> {
        if bytes.len() > LIMBS * 4 {
            return Err(BigNumError::WidthMismatch);
        }
        let mut v = Self::ZERO;
        for (i, &byte) in bytes.iter().rev().enumerate() {
            let limb = i / 4;
            let shift = (i % 4) * 8;
            v.limbs[limb] |= (byte as u32) << shift;
        }
        Ok(v)
    }

    /// Big-endian byte encoding, zero-padded to the full width (`to_bytes`).
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut out = vec![0u8; LIMBS * 4];
        for (i, limb) in self.limbs.iter().enumerate() {
            let bytes = limb.to_le_bytes();
            for (j, &b) in bytes.iter().enumerate() {
                out[LIMBS * 4 - 1 - (i * 4 + j)] = b;
            }
        }
        out
    }

    /// Left shift by `n` bits (`lshift`). Bits shifted past the top of the
    /// fixed width are discarded.
    pub fn lshift(&self, n: usize) -> Self {
        let shifted = limbs::shl(&self.limbs, n);
        let mut v = Self {
            negative: self.negative,
            limbs: [0u32; LIMBS],
        };
        for (i, &x) in shifted.iter().take(LIMBS).enumerate() {
            v.limbs[i] = x;
        }
        v.normalize_sign();
        v
    }

    /// Right shift by `n` bits (`rshift`), magnitude only.
    pub fn rshift(&self, n: usize) -> Self {
        let shifted = limbs::shr(&self.limbs, n);
        let mut v = Self {
            negative: self.negative,
            limbs: [0u32; LIMBS],
        };
        for (i, &x) in shifted.iter().take(LIMBS).enumerate() {
            v.limbs[i] = x;
        }
        v.normalize_sign();
        v
    }

    fn bitop(&self, other: &Self, f: impl Fn(u32, u32) -> u32) -> Self {
        let mut v = Self::ZERO;
        for i in 0..LIMBS {
            v.limbs[i] = f(self.limbs[i], other.limbs[i]);
        }
        v
    }

    pub fn bitand(&self, other: &Self) -> Self {
        self.bitop(other, |a, b| a & b)
    }

    pub fn bitor(&self, other: &Self) -> Self {
        self.bitop(other, |a, b| a | b)
    }

    pub fn bitxor(&self, other: &Self) -> Self {
        self.bitop(other, |a, b| a ^ b)
    }

    pub fn bitnot(&self) -> Self {
        let mut v = Self::ZERO;
        for i in 0..LIMBS {
            v.limbs[i] = !self.limbs[i];
        }
        v
    }

    /// Unsigned magnitude comparison (`ucmp`).
    pub fn ucmp(&self, other: &Self) -> Ordering {
        limbs::cmp(&self.limbs, &other.limbs)
    }

    /// Signed comparison (`cmp`).
    pub fn cmp_signed(&self, other: &Self) -> Ordering {
        match (self.is_negative(), other.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.ucmp(other),
            (true, true) => other.ucmp(self),
        }
    }

    fn from_limb_vec(negative: bool, v: Vec<u32>) -> Self {
        let mut out = Self {
            negative,
            limbs: [0u32; LIMBS],
        };
        for (i, &x) in v.iter().take(LIMBS).enumerate() {
            out.limbs[i] = x;
        }
        out.normalize_sign();
        out
    }

    /// Unsigned magnitude addition (`uadd`).
    pub fn uadd(&self, other: &Self) -> Self {
        Self::from_limb_vec(false, limbs::add(&self.limbs, &other.limbs))
    }

    /// Unsigned magnitude subtraction, wrapping if `other > self`
    /// (`usub`); callers that need a signed result should use `sub`.
    pub fn usub(&self, other: &Self) -> Self {
        if self.ucmp(other) == Ordering::Less {
            let diff = limbs::sub(&other.limbs, &self.limbs);
            Self::from_limb_vec(false, diff)
        } else {
            Self::from_limb_vec(false, limbs::sub(&self.limbs, &other.limbs))
        }
    }

    /// Signed addition.
    pub fn add(&self, other: &Self) -> Self {
        match (self.negative, other.negative) {
            (false, false) => self.uadd(other),
            (true, true) => {
                let mut r = self.uadd(other);
                r.negative = !r.is_zero();
                r
            }
            (false, true) => self.sub_magnitudes(self, other, false),
            (true, false) => self.sub_magnitudes(other, self, true).neg_if(true),
        }
    }

    fn sub_magnitudes(&self, a: &Self, b: &Self, _unused: bool) -> Self {
        if a.ucmp(b) == Ordering::Less {
            let mut r = Self::from_limb_vec(false, limbs::sub(&b.limbs, &a.limbs));
            r.negative = !r.is_zero();
            r
        } else {
            Self::from_limb_vec(false, limbs::sub(&a.limbs, &b.limbs))
        }
    }

    fn neg_if(mut self, flip: bool) -> Self {
        if flip && !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }

    /// Signed subtraction.
    pub fn sub(&self, other: &Self) -> Self {
        let neg_other = Self {
            negative: !other.negative,
            limbs: other.limbs,
        };
        self.add(&neg_other)
    }

    /// Unsigned magnitude multiplication (`umul`), truncated to `LIMBS`.
    pub fn umul(&self, other: &Self) -> Self {
        Self::from_limb_vec(false, limbs::mul(&self.limbs, &other.limbs))
    }

    /// Signed multiplication (`mul`).
    pub fn mul(&self, other: &Self) -> Self {
        let mut r = self.umul(other);
        r.negative = (self.is_negative() != other.is_negative()) && !r.is_zero();
        r
    }

    /// Unsigned division and remainder (`udiv`/`divmod` combined).
    pub fn udivmod(&self, other: &Self) -> Result<(Self, Self), BigNumError> {
        if other.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        let (q, r) = limbs::divmod(&self.limbs, &other.limbs);
        Ok((
            Self::from_limb_vec(false, q),
            Self::from_limb_vec(false, r),
        ))
    }

    /// Signed division and remainder, truncating toward zero (`div`/`divmod`).
    pub fn divmod(&self, other: &Self) -> Result<(Self, Self), BigNumError> {
        let (mut q, mut r) = self.udivmod(other)?;
        q.negative = (self.is_negative() != other.is_negative()) && !q.is_zero();
        r.negative = self.is_negative() && !r.is_zero();
        Ok((q, r))
    }

    pub fn div(&self, other: &Self) -> Result<Self, BigNumError> {
        Ok(self.divmod(other)?.0)
    }

    /// Euclidean remainder, result always `>= 0` (used pervasively by the
    /// field/modular layers on top of this type).
    pub fn rem_euclid(&self, modulus: &Self) -> Result<Self, BigNumError> {
        let (_, r) = self.divmod(modulus)?;
        if r.is_negative() {
            Ok(r.uadd(modulus))
        } else {
            Ok(r)
        }
    }

    /// `gcd(self, other)`, unsigned.
    pub fn gcd(&self, other: &Self) -> Self {
        Self::from_limb_vec(false, limbs::gcd(&self.limbs, &other.limbs))
    }

    /// Non-constant-time modular exponentiation (`modpow`); reserved for
    /// public-exponent operations such as RSA signature verification,
    /// never for secret exponents (use [`MontgomeryCtx::redc_pow`]
    /// instead).
    pub fn modpow(&self, exp: &Self, modulus: &Self) -> Result<Self, BigNumError> {
        if modulus.is_zero() {
            return Err(BigNumError::DivisionByZero);
        }
        let mut result = Self::one().rem_euclid(modulus)?;
        let mut base = self.rem_euclid(modulus)?;
        let bitlen = exp.bits();
        for i in 0..bitlen {
            if exp.test_bit(i) {
                result = result.mul(&base).rem_euclid(modulus)?;
            }
            base = base.mul(&base).rem_euclid(modulus)?;
        }
        Ok(result)
    }

    fn test_bit(&self, i: usize) -> bool {
        let limb = i / 32;
        let off = i % 32;
        limb < LIMBS && (self.limbs[limb] >> off) & 1 != 0
    }

    /// Modular inverse via the extended Euclidean algorithm (`inv`).
    pub fn inv(&self, modulus: &Self) -> Result<Self, BigNumError> {
        let (mut old_r, mut r) = (self.rem_euclid(modulus)?, *modulus);
        let (mut old_s, mut s) = (Self::one(), Self::ZERO);

        while !r.is_zero() {
            let (q, rem) = old_r.udivmod(&r)?;
            old_r = r;
            r = rem;

            let qs = q.mul(&s);
            let new_s = old_s.sub(&qs);
            old_s = s;
            s = new_s;
        }

        if old_r.ucmp(&Self::one()) != Ordering::Equal {
            return Err(BigNumError::NotInvertible);
        }
        old_s.rem_euclid(modulus)
    }

    /// Parses a decimal digit string into a value of this width
    /// (`str2num`). Leading `-` denotes a negative value.
    pub fn str2num(s: &str) -> Result<Self, BigNumError> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BigNumError::InvalidDigit);
        }
        let ten = Self::from_u32(10);
        let mut acc = Self::ZERO;
        for b in digits.bytes() {
            acc = acc.umul(&ten).uadd(&Self::from_u32((b - b'0') as u32));
        }
        acc.negative = negative && !acc.is_zero();
        Ok(acc)
    }

    /// Renders the value as a decimal digit string (`num2str`).
    pub fn num2str(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let ten = Self::from_u32(10);
        let mut digits = Vec::new();
        let mut v = Self {
            negative: false,
            limbs: self.limbs,
        };
        while !v.is_zero() {
            let (q, r) = v.udivmod(&ten).expect("10 != 0");
            digits.push(b'0' + r.limbs[0] as u8);
            v = q;
        }
        if self.is_negative() {
            digits.push(b'-');
        }
        digits.reverse();
        String::from_utf8(digits).expect("ascii digits")
    }
}

impl<const LIMBS: usize> PartialEq for BigUint<LIMBS> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_signed(other) == Ordering::Equal
    }
}
impl<const LIMBS: usize> Eq for BigUint<LIMBS> {}

impl<const LIMBS: usize> PartialOrd for BigUint<LIMBS> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_signed(other))
    }
}
impl<const LIMBS: usize> Ord for BigUint<LIMBS> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_signed(other)
    }
}

impl<const LIMBS: usize> fmt::Debug for BigUint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigUint({})", self.num2str())
    }
}

impl<const LIMBS: usize> fmt::Display for BigUint<LIMBS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.num2str())
    }
}

impl<const LIMBS: usize> FromStr for BigUint<LIMBS> {
    type Err = BigNumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::str2num(s)
    }
}

impl<const LIMBS: usize> std::ops::Add for BigUint<LIMBS> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        BigUint::add(&self, &rhs)
    }
}
impl<const LIMBS: usize> std::ops::Sub for BigUint<LIMBS> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        BigUint::sub(&self, &rhs)
    }
}
impl<const LIMBS: usize> std::ops::Mul for BigUint<LIMBS> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        BigUint::mul(&self, &rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Bn256 = BigUint<8>;

    #[test]
    fn decimal_roundtrip() {
        let v = Bn256::str2num("123456789012345678901234567890").unwrap();
        assert_eq!(v.num2str(), "123456789012345678901234567890");
    }

    #[test]
    fn bytes_roundtrip() {
        let bytes = [0xAAu8; 32];
        let v = Bn256::from_bytes_be(&bytes).unwrap();
        assert_eq!(v.to_bytes_be(), bytes);
    }

    #[test]
    fn add_sub_inverse() {
        let a = Bn256::from_u32(500);
        let b = Bn256::from_u32(123);
        assert_eq!(a.add(&b).sub(&b), a);
    }

    #[test]
    fn modpow_matches_small_case() {
        let base = Bn256::from_u32(4);
        let exp = Bn256::from_u32(13);
        let modulus = Bn256::from_u32(497);
        assert_eq!(base.modpow(&exp, &modulus).unwrap(), Bn256::from_u32(445));
    }

    #[test]
    fn inverse_and_gcd() {
        let a = Bn256::from_u32(17);
        let m = Bn256::from_u32(3120);
        let inv = a.inv(&m).unwrap();
        assert_eq!(a.mul(&inv).rem_euclid(&m).unwrap(), Bn256::one());
        assert_eq!(a.gcd(&m), Bn256::one());
    }

    #[test]
    fn shifts() {
        let v = Bn256::from_u32(1).lshift(40);
        assert_eq!(v.rshift(40), Bn256::from_u32(1));
    }
}
