// src/integer_math/primality.rs

use num::{BigInt, Integer, One, ToPrimitive};
use crate::core::rng::SieveRng;
use crate::integer_math::prime_factory::PrimeFactory;

/// Default Miller-Rabin round count; the false-positive probability is
/// bounded by 4^-rounds even for adversarial inputs.
pub const DEFAULT_ROUNDS: u32 = 50;

/// Candidates below this are cheaper to settle by trial division than by
/// repeated modular exponentiation.
const TRIAL_DIVISION_CEILING: u64 = 1 << 20;

pub struct Primality;

impl Primality {
    /// Primality for native-width candidates: exact trial division while
    /// it is cheap, Miller-Rabin beyond.
    pub fn is_prime(n: u64, rounds: u32) -> bool {
        if n < TRIAL_DIVISION_CEILING {
            PrimeFactory::is_prime_small(n)
        } else {
            Self::is_probable_prime(&BigInt::from(n), rounds)
        }
    }

    /// Miller-Rabin with `rounds` uniformly random witnesses from
    /// `[2, n-2]`. Table primes are accepted immediately; even and
    /// trivial inputs are rejected without any trials.
    pub fn is_probable_prime(n: &BigInt, rounds: u32) -> bool {
        if n <= &BigInt::one() {
            return false;
        }
        if n <= &BigInt::from(3) {
            return true;
        }
        if n.is_even() {
            return false;
        }
        if let Some(small) = n.to_u64() {
            if PrimeFactory::in_table(small) {
                return true;
            }
        }

        // Split n - 1 = d * 2^s with d odd.
        let mut d: BigInt = n - 1;
        let mut s = 0u32;
        while d.is_even() {
            d >>= 1;
            s += 1;
        }

        let two = BigInt::from(2);
        let upper = n - &two;
        let mut rng = SieveRng::new();
        for _ in 0..rounds {
            let witness = rng.bigint_in(&two, &upper);
            if !Self::witness_passes(&witness, &d, s, n) {
                return false;
            }
        }
        true
    }

    /// One Miller-Rabin trial: `a^d ≡ ±1`, or some square reaches `-1`
    /// before wrapping to 1.
    fn witness_passes(a: &BigInt, d: &BigInt, s: u32, n: &BigInt) -> bool {
        let two = BigInt::from(2);
        let minus_one = n - 1;

        let mut x = a.modpow(d, n);
        if x.is_one() || x == minus_one {
            return true;
        }

        let mut round = 1;
        while round < s {
            x = x.modpow(&two, n);
            if x.is_one() {
                return false;
            }
            if x == minus_one {
                return true;
            }
            round += 1;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_primes() {
        for p in [2u64, 3, 5, 9973, 65537, 786433, 1048583] {
            assert!(Primality::is_probable_prime(&BigInt::from(p), DEFAULT_ROUNDS), "{} is prime", p);
        }
    }

    #[test]
    fn test_known_composites() {
        // 561 and 41041 are Carmichael numbers; random witnesses defeat them.
        for c in [1u64, 4, 561, 41041, 1048583 * 3] {
            assert!(!Primality::is_probable_prime(&BigInt::from(c), DEFAULT_ROUNDS), "{} is composite", c);
        }
    }

    #[test]
    fn test_native_dispatch() {
        assert!(Primality::is_prime(7919, DEFAULT_ROUNDS));
        assert!(!Primality::is_prime(7917, DEFAULT_ROUNDS));
        assert!(Primality::is_prime(2_147_483_647, DEFAULT_ROUNDS));
    }
}
