// src/integer_math/prime_factory.rs

use lazy_static::lazy_static;

/// Upper bound of the precomputed prime table.
pub const SMALL_PRIME_LIMIT: u64 = 10_000;

lazy_static! {
    /// All primes below `SMALL_PRIME_LIMIT`, sieved once on first use and
    /// immutable for the rest of the process.
    pub static ref SMALL_PRIMES: Vec<u64> = PrimeFactory::sieve_below(SMALL_PRIME_LIMIT);
}

pub struct PrimeFactory;

impl PrimeFactory {
    /// Sieve of Eratosthenes over `[2, limit)`.
    pub fn sieve_below(limit: u64) -> Vec<u64> {
        let limit = limit as usize;
        if limit < 3 {
            return Vec::new();
        }
        let mut composite = vec![false; limit];
        let mut primes = Vec::new();
        for candidate in 2..limit {
            if composite[candidate] {
                continue;
            }
            primes.push(candidate as u64);
            let mut multiple = candidate * candidate;
            while multiple < limit {
                composite[multiple] = true;
                multiple += candidate;
            }
        }
        primes
    }

    /// Exact trial-division primality for native-width candidates.
    pub fn is_prime_small(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        if n == 2 || n == 3 {
            return true;
        }
        if n % 2 == 0 || n % 3 == 0 {
            return false;
        }

        let mut i = 5u64;
        while i * i <= n {
            if n % i == 0 || n % (i + 2) == 0 {
                return false;
            }
            i += 6;
        }
        true
    }

    /// Membership test against the precomputed table.
    pub fn in_table(n: u64) -> bool {
        n < SMALL_PRIME_LIMIT && SMALL_PRIMES.binary_search(&n).is_ok()
    }
}
