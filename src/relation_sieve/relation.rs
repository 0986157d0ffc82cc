// src/relation_sieve/relation.rs

use num::{BigInt, Integer, One, Zero};
use crate::core::factor_base::FactorBase;

/// One smooth relation: `a*a - n` factors completely over the factor
/// base, and `exponents[i]` counts how often the i-th base prime divides
/// it. Relations keep their discovery order; the parity matrix is built
/// one column per relation in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub a: BigInt,
    pub exponents: Vec<u32>,
}

impl Relation {
    pub fn new(a: BigInt, exponents: Vec<u32>) -> Self {
        Relation { a, exponents }
    }

    /// Exponent of the i-th base prime, reduced mod 2.
    pub fn parity(&self, index: usize) -> bool {
        self.exponents[index] % 2 == 1
    }

    /// Recomputes `a*a - n` and checks that the stored exponents account
    /// for every factor.
    pub fn verify(&self, n: &BigInt, base: &FactorBase) -> bool {
        if self.exponents.len() != base.len() {
            return false;
        }
        let mut value = &self.a * &self.a - n;
        for (entry, &count) in base.iter().zip(&self.exponents) {
            let p = BigInt::from(entry.p);
            for _ in 0..count {
                if !value.mod_floor(&p).is_zero() {
                    return false;
                }
                value /= &p;
            }
        }
        value.is_one()
    }
}
