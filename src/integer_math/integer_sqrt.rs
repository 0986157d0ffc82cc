// src/integer_math/integer_sqrt.rs

use num::{BigInt, One, Signed};
use crate::integer_math::error::MathError;

pub struct IntegerSqrt;

impl IntegerSqrt {
    /// Smallest `r` with `r*r >= n`, for nonnegative `n`. An exponential
    /// search pins the upper bound, then a binary search closes in; the
    /// result is exact for inputs of any magnitude.
    pub fn ceil(n: &BigInt) -> Result<BigInt, MathError> {
        if n.is_negative() {
            return Err(MathError::InvalidInput("square root argument must be nonnegative"));
        }

        let mut hi = BigInt::one();
        while &(&hi * &hi) <= n {
            hi <<= 1;
        }
        let mut lo = &hi >> 1;

        // hi*hi > n holds here, so the search always lands on a result.
        let mut result = hi.clone();
        while lo <= hi {
            let mid = (&lo + &hi) >> 1;
            let square: BigInt = &mid * &mid;
            match square.cmp(n) {
                std::cmp::Ordering::Equal => return Ok(mid),
                std::cmp::Ordering::Greater => {
                    result = mid.clone();
                    hi = mid - 1;
                }
                std::cmp::Ordering::Less => {
                    lo = mid + 1;
                }
            }
        }

        Ok(result)
    }
}
