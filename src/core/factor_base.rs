// src/core/factor_base.rs

use log::{debug, warn};
use num::{BigInt, Integer, ToPrimitive};
use crate::integer_math::error::MathError;
use crate::integer_math::primality::Primality;
use crate::integer_math::quadratic_residue::QuadraticResidue;

/// One factor-base prime with the square roots of `n` modulo `p` and the
/// sieve offsets they induce relative to the polynomial base point.
#[derive(Debug, Clone)]
pub struct FactorBasePrime {
    pub p: u64,
    pub roots: Vec<u64>,
    pub offsets: Vec<u64>,
}

impl FactorBasePrime {
    fn new(p: u64) -> Self {
        FactorBasePrime {
            p,
            roots: Vec::new(),
            offsets: Vec::new(),
        }
    }
}

/// Ordered set of primes modulo which `n` is a quadratic residue. Fixed
/// once construction finishes; the sieve only reads it.
#[derive(Debug, Clone)]
pub struct FactorBase {
    primes: Vec<FactorBasePrime>,
}

impl FactorBase {
    /// Heuristic base size for a `bit_length`-bit input: 96 primes for
    /// small inputs, doubling every 32 bits.
    pub fn target_size(bit_length: u64) -> usize {
        ((bit_length as f64 / 32.0).exp2() * 96.0).trunc() as usize
    }

    /// Scans candidates 2, 3, 5, 7, ... keeping primes with `n` a
    /// quadratic residue, until `target_size` primes are found. Returns
    /// `None` when the scan hits `ceiling` first.
    pub fn build(n: &BigInt, target_size: usize, ceiling: u64, mr_rounds: u32) -> Option<Self> {
        let mut primes = vec![FactorBasePrime::new(2)];
        let mut candidate = 3u64;

        while primes.len() < target_size {
            if candidate > ceiling {
                warn!(
                    "factor base ceiling {} exhausted at {} of {} primes",
                    ceiling,
                    primes.len(),
                    target_size
                );
                return None;
            }
            if Primality::is_prime(candidate, mr_rounds)
                && QuadraticResidue::is_quadratic_residue(n, &BigInt::from(candidate))
            {
                primes.push(FactorBasePrime::new(candidate));
            }
            candidate = match candidate.checked_add(2) {
                Some(next) => next,
                None => return None,
            };
        }

        debug!(
            "factor base: {} primes, largest {}",
            primes.len(),
            primes.last().map(|entry| entry.p).unwrap_or(2)
        );
        Some(FactorBase { primes })
    }

    /// Solves `r*r ≡ n (mod p)` for every base prime and converts both
    /// roots into sieve offsets relative to `poly_base`. Coinciding
    /// offsets collapse to one, which always happens for p = 2.
    pub fn solve_roots(&mut self, n: &BigInt, poly_base: &BigInt) -> Result<(), MathError> {
        for entry in &mut self.primes {
            let p_big = BigInt::from(entry.p);
            let root = QuadraticResidue::modular_sqrt(n, &p_big)?
                .to_u64()
                .expect("root is reduced modulo p");
            let other = (entry.p - root) % entry.p;

            let base_mod = poly_base
                .mod_floor(&p_big)
                .to_u64()
                .expect("residue is reduced modulo p");
            let minus_base = (entry.p - base_mod) % entry.p;

            entry.roots = if root == other {
                vec![root]
            } else {
                vec![root, other]
            };
            entry.offsets = entry
                .roots
                .iter()
                .map(|&r| (r + minus_base) % entry.p)
                .collect();
            entry.offsets.dedup();
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FactorBasePrime> {
        self.primes.iter()
    }
}
