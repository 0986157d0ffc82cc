// src/integer_math/gcd.rs

use num::{BigInt, Integer, One, Signed, Zero};
use crate::integer_math::error::MathError;

pub struct GCD;

impl GCD {
    /// Binary GCD on the absolute values of both arguments.
    /// `binary(0, 0)` is 0; the result is always nonnegative.
    pub fn binary(left: &BigInt, right: &BigInt) -> BigInt {
        let mut a = left.abs();
        let mut b = right.abs();

        if a.is_zero() {
            return b;
        }
        if b.is_zero() {
            return a;
        }

        let mut shift = 0usize;
        while a.is_even() && b.is_even() {
            a >>= 1;
            b >>= 1;
            shift += 1;
        }
        while a.is_even() {
            a >>= 1;
        }

        // a stays odd for the rest of the loop.
        loop {
            while b.is_even() {
                b >>= 1;
            }
            if a > b {
                std::mem::swap(&mut a, &mut b);
            }
            b -= &a;
            if b.is_zero() {
                break;
            }
        }

        a << shift
    }

    /// Extended Euclidean algorithm for positive `a` and `b`: returns
    /// `(g, x, y)` with `a*x + b*y = g`.
    pub fn extended(a: &BigInt, b: &BigInt) -> Result<(BigInt, BigInt, BigInt), MathError> {
        if !a.is_positive() || !b.is_positive() {
            return Err(MathError::InvalidInput("extended gcd arguments must be positive"));
        }

        let mut r_prev = a.clone();
        let mut r = b.clone();
        let mut x_prev = BigInt::one();
        let mut x = BigInt::zero();
        let mut y_prev = BigInt::zero();
        let mut y = BigInt::one();

        while !r.is_zero() {
            let q = &r_prev / &r;
            let r_next = &r_prev - &q * &r;
            r_prev = std::mem::replace(&mut r, r_next);
            let x_next = &x_prev - &q * &x;
            x_prev = std::mem::replace(&mut x, x_next);
            let y_next = &y_prev - &q * &y;
            y_prev = std::mem::replace(&mut y, y_next);
        }

        Ok((r_prev, x_prev, y_prev))
    }
}
