// src/integer_math/modular.rs

use num::{BigInt, Integer, One, Signed, Zero};
use crate::integer_math::error::MathError;
use crate::integer_math::gcd::GCD;

pub struct Modular;

impl Modular {
    /// Reduces `a` into the canonical residue range `[0, n)`.
    pub fn canonical(a: &BigInt, n: &BigInt) -> Result<BigInt, MathError> {
        if !n.is_positive() {
            return Err(MathError::InvalidInput("modulus must be positive"));
        }
        Ok(a.mod_floor(n))
    }

    /// Returns `x` with `a*x ≡ 1 (mod n)`, or `NoInverse` when
    /// `gcd(a, n) != 1`.
    pub fn inverse(a: &BigInt, n: &BigInt) -> Result<BigInt, MathError> {
        let reduced = Self::canonical(a, n)?;
        if n.is_one() {
            // Everything is congruent to 0 modulo 1, including the inverse.
            return Ok(BigInt::zero());
        }
        if reduced.is_zero() {
            return Err(MathError::NoInverse);
        }
        let (g, x, _) = GCD::extended(&reduced, n)?;
        if !g.is_one() {
            return Err(MathError::NoInverse);
        }
        Self::canonical(&x, n)
    }

    /// Modular exponentiation by squaring. Negative exponents invert the
    /// result of the positive power, so `b` must then be invertible mod `n`.
    pub fn pow(b: &BigInt, e: &BigInt, n: &BigInt) -> Result<BigInt, MathError> {
        if !n.is_positive() {
            return Err(MathError::InvalidInput("modulus must be positive"));
        }
        if n.is_one() {
            return Ok(BigInt::zero());
        }

        let base = b.mod_floor(n);
        if e.is_negative() {
            let positive = Self::pow(&base, &-e, n)?;
            return Self::inverse(&positive, n);
        }
        Ok(base.modpow(e, n))
    }
}
