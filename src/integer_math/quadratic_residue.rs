// src/integer_math/quadratic_residue.rs

use num::{BigInt, Integer, One, Zero};
use crate::integer_math::error::MathError;
use crate::integer_math::modular::Modular;

pub struct QuadraticResidue;

impl QuadraticResidue {
    /// Euler's criterion: n^((p-1)/2) ≡ 1 (mod p) for an odd prime `p`.
    /// Degenerate moduli `p <= 2` always report a residue.
    pub fn is_quadratic_residue(n: &BigInt, p: &BigInt) -> bool {
        if p <= &BigInt::from(2) {
            return true;
        }
        let exponent = p >> 1;
        n.mod_floor(p).modpow(&exponent, p).is_one()
    }

    /// Tonelli-Shanks square root of `n` modulo an odd prime `p`: returns
    /// `r` with `r*r ≡ n (mod p)`. The caller must supply a quadratic
    /// residue; a non-residue exhausts the order search and yields
    /// `NoRoot`. For `p <= 2` the root is just `n mod p`.
    pub fn modular_sqrt(n: &BigInt, p: &BigInt) -> Result<BigInt, MathError> {
        let two = BigInt::from(2);
        if p <= &two {
            return Modular::canonical(n, p);
        }

        let n_mod = n.mod_floor(p);
        if n_mod.is_zero() {
            return Ok(BigInt::zero());
        }

        // Split p - 1 = q * 2^s with q odd.
        let mut q: BigInt = p - 1;
        let mut s = 0u32;
        while q.is_even() {
            q >>= 1;
            s += 1;
        }

        // Any quadratic non-residue serves as the order-2^s generator.
        let mut z = two.clone();
        while Self::is_quadratic_residue(&z, p) {
            z += 1;
        }

        let mut m = s;
        let mut c = z.modpow(&q, p);
        let mut t = n_mod.modpow(&q, p);
        let mut r = n_mod.modpow(&(&(&q + 1) >> 1), p);

        loop {
            if t.is_zero() {
                return Ok(t);
            }
            if t.is_one() {
                return Ok(r);
            }

            // Least i in [1, m) with t^(2^i) == 1; running out means the
            // precondition was violated.
            let mut i = 1u32;
            let mut e = two.clone();
            loop {
                if i >= m {
                    return Err(MathError::NoRoot);
                }
                if t.modpow(&e, p).is_one() {
                    break;
                }
                e <<= 1;
                i += 1;
            }

            let b = c.modpow(&(BigInt::one() << ((m - i - 1) as usize)), p);
            m = i;
            c = b.modpow(&two, p);
            t = (&t * &c).mod_floor(p);
            r = (&r * &b).mod_floor(p);
        }
    }
}
