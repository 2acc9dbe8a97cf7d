//! RSA envelope on top of [`crate::bignum`] — key construction from
//! caller-supplied primes, the raw `RSAEP`/`RSADP` primitives, and
//! constant-time CRT decryption.
//!
//! `[NEW]`, grounded in `original_source`'s `rsa3072.c`/`rsa4096.c`:
//! this crate does not generate primes itself (out of scope — see the
//! distilled spec's Non-goals), only consumes them. Everything operates
//! over [`Bn4352`], wide enough for RSA-4096 moduli and the CRT's
//! doubled-width intermediates.

use crate::bignum::montgomery::MontgomeryCtx;
use crate::bignum::{BigUint, Bn4352};
use crate::error::RsaError;

/// An RSA key pair, including the CRT parameters used by [`KeyPair::decrypt_crt`].
pub struct KeyPair {
    n: Bn4352,
    e: Bn4352,
    d: Bn4352,
    p: Bn4352,
    q: Bn4352,
    dp: Bn4352,
    dq: Bn4352,
    q_inv: Bn4352,
}

impl KeyPair {
    /// Builds a key pair from caller-supplied primes `p`, `q` and public
    /// exponent `e`. Validates `gcd(e, (p-1)(q-1)) = 1` and derives the
    /// private exponent via `d = e⁻¹ mod λ(n)` with `λ(n) =
    /// lcm(p-1, q-1)`, plus the CRT parameters `dP`, `dQ`, `qInv`.
    pub fn new(p: Bn4352, q: Bn4352, e: Bn4352) -> Result<Self, RsaError> {
        let one = Bn4352::one();
        let p_minus_1 = p.sub(&one);
        let q_minus_1 = q.sub(&one);
        let phi = p_minus_1.mul(&q_minus_1);

        if e.gcd(&phi) != one {
            return Err(RsaError::InvalidPublicExponent);
        }

        let g = p_minus_1.gcd(&q_minus_1);
        let lambda = p_minus_1
            .mul(&q_minus_1)
            .div(&g)
            .map_err(|_| RsaError::InvalidPublicExponent)?;

        let d = e.inv(&lambda).map_err(|_| RsaError::InvalidPublicExponent)?;
        let n = p.mul(&q);
        let dp = d.rem_euclid(&p_minus_1).map_err(|_| RsaError::InvalidPublicExponent)?;
        let dq = d.rem_euclid(&q_minus_1).map_err(|_| RsaError::InvalidPublicExponent)?;
        let q_inv = q.inv(&p).map_err(|_| RsaError::InvalidPublicExponent)?;

        Ok(Self { n, e, d, p, q, dp, dq, q_inv })
    }

    pub fn n(&self) -> &Bn4352 {
        &self.n
    }

    pub fn e(&self) -> &Bn4352 {
        &self.e
    }

    /// `RSAEP(m) = m^e mod n`: the public-exponent primitive, used for
    /// encryption and signature verification — not secret-dependent, so
    /// plain (non-constant-time) `BigUint::modpow` is appropriate.
    pub fn rsaep(m: &Bn4352, e: &Bn4352, n: &Bn4352) -> Result<Bn4352, RsaError> {
        if m.ucmp(n) != std::cmp::Ordering::Less {
            return Err(RsaError::InputTooLarge);
        }
        m.modpow(e, n).map_err(|_| RsaError::InputTooLarge)
    }

    /// `RSADP(c) = c^d mod n`: the textbook private-exponent primitive.
    /// Exposed for completeness/testing against [`Self::decrypt_crt`];
    /// real decryption should go through the CRT path, which alone uses
    /// the constant-time `redc_pow`.
    pub fn rsadp(c: &Bn4352, d: &Bn4352, n: &Bn4352) -> Result<Bn4352, RsaError> {
        if c.ucmp(n) != std::cmp::Ordering::Less {
            return Err(RsaError::InputTooLarge);
        }
        c.modpow(d, n).map_err(|_| RsaError::InputTooLarge)
    }

    /// Constant-time CRT decryption: `m1 = c^dP mod p`, `m2 = c^dQ mod
    /// q`, `h = qInv·(m1 - m2) mod p`, `m = m2 + h·q`. Both
    /// exponentiations (the only secret-dependent steps) go through
    /// [`MontgomeryCtx::redc_pow`].
    pub fn decrypt_crt(&self, c: &Bn4352) -> Result<Bn4352, RsaError> {
        if c.ucmp(&self.n) != std::cmp::Ordering::Less {
            return Err(RsaError::InputTooLarge);
        }

        let ctx_p = MontgomeryCtx::new(&self.p).map_err(|_| RsaError::InputTooLarge)?;
        let ctx_q = MontgomeryCtx::new(&self.q).map_err(|_| RsaError::InputTooLarge)?;

        let c_mod_p = ctx_p.reduce(c);
        let c_mod_q = ctx_q.reduce(c);

        let m1 = ctx_p.redc_pow(&c_mod_p, &self.dp);
        let m2 = ctx_q.redc_pow(&c_mod_q, &self.dq);

        let diff = m1.sub(&m2).rem_euclid(&self.p).map_err(|_| RsaError::InputTooLarge)?;
        let h = self.q_inv.mul(&diff).rem_euclid(&self.p).map_err(|_| RsaError::InputTooLarge)?;

        Ok(m2.add(&h.mul(&self.q)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A deliberately small "RSA" instance (p, q well below full RSA
    // sizes) so the CRT math can be sanity-checked without a real
    // multi-thousand-bit prime generator, which is out of scope here.
    fn small_keypair() -> KeyPair {
        let p = BigUint::from_u32(61);
        let q = BigUint::from_u32(53);
        let e = BigUint::from_u32(17);
        KeyPair::new(p, q, e).unwrap()
    }

    #[test]
    fn crt_matches_plain_decryption() {
        let kp = small_keypair();
        let m = BigUint::from_u32(42);
        let c = KeyPair::rsaep(&m, &kp.e, &kp.n).unwrap();

        let via_crt = kp.decrypt_crt(&c).unwrap();
        let via_plain = KeyPair::rsadp(&c, &kp.d, &kp.n).unwrap();

        assert_eq!(via_crt, via_plain);
        assert_eq!(via_crt, m);
    }

    #[test]
    fn rejects_input_not_reduced_mod_n() {
        let kp = small_keypair();
        let too_big = kp.n.add(&BigUint::one());
        assert!(KeyPair::rsaep(&too_big, &kp.e, &kp.n).is_err());
    }
}
