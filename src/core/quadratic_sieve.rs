// src/core/quadratic_sieve.rs
//
// Single-polynomial quadratic sieve.
//
// The pipeline sieves values of Q(x) = (ceil(sqrt(n)) + x)^2 - n for
// smoothness over a factor base of quadratic-residue primes, reduces the
// exponent-parity matrix of the smooth relations over GF(2), and turns
// each kernel vector into a congruence of squares x^2 ≡ y^2 (mod n).
// A nontrivial congruence splits n through gcd(x - y, n).

use log::{debug, info, warn};
use num::{BigInt, Integer, One, Zero};
use rayon::prelude::*;
use crate::config::QsConfig;
use crate::core::events::{NullObserver, SieveObserver};
use crate::core::factor_base::FactorBase;
use crate::core::outcome::FactorOutcome;
use crate::integer_math::gcd::GCD;
use crate::integer_math::integer_sqrt::IntegerSqrt;
use crate::integer_math::modular::Modular;
use crate::integer_math::prime_factory::SMALL_PRIMES;
use crate::matrix::bit_matrix::BitMatrix;
use crate::relation_sieve::block::{SieveBlock, BLOCK_SIZE};
use crate::relation_sieve::relation::Relation;

/// Inputs below this are not worth sieving: any composite here has a
/// divisor inside the small-prime table, so trial division already
/// settled it.
const SIEVE_THRESHOLD: u64 = 100_000_000;

/// Factors `n` with default tuning and no notifications.
pub fn factor(n: &BigInt) -> FactorOutcome {
    QuadraticSieve::new(n).factor(&NullObserver)
}

pub struct QuadraticSieve {
    n: BigInt,
    config: QsConfig,
}

impl QuadraticSieve {
    pub fn new(n: &BigInt) -> Self {
        Self::with_config(n, QsConfig::default())
    }

    pub fn with_config(n: &BigInt, config: QsConfig) -> Self {
        QuadraticSieve {
            n: n.clone(),
            config,
        }
    }

    /// Runs the pipeline to its terminal state and fires exactly one
    /// result notification on the way out.
    pub fn factor(&self, observer: &dyn SieveObserver) -> FactorOutcome {
        let outcome = self.run(observer);
        observer.finished(&outcome.factors());
        outcome
    }

    fn run(&self, observer: &dyn SieveObserver) -> FactorOutcome {
        if self.n <= BigInt::one() {
            warn!("{} has no nontrivial split", self.n);
            return FactorOutcome::GiveUp(self.n.clone());
        }
        info!("factoring {} ({} bits)", self.n, self.n.bits());

        if let Some(outcome) = self.trial_division() {
            return outcome;
        }
        if self.n < BigInt::from(SIEVE_THRESHOLD) {
            warn!("{} is below the sieve threshold and has no table divisor", self.n);
            return FactorOutcome::GiveUp(self.n.clone());
        }

        let target = FactorBase::target_size(self.n.bits());
        let base = FactorBase::build(
            &self.n,
            target,
            self.config.sieve.factor_base_ceiling,
            self.config.primality.miller_rabin_rounds,
        );
        let mut base = match base {
            Some(base) => base,
            None => return FactorOutcome::GiveUp(self.n.clone()),
        };

        let poly_base = IntegerSqrt::ceil(&self.n).expect("input is positive");
        base.solve_roots(&self.n, &poly_base)
            .expect("factor base primes are quadratic residues");
        info!("factor base ready: {} primes", base.len());

        let relations = match self.sieve(&base, &poly_base, observer) {
            Some(relations) => relations,
            None => return FactorOutcome::GiveUp(self.n.clone()),
        };
        info!("sieving done: {} smooth relations", relations.len());

        match self.solve(&base, &relations) {
            Some((p, q)) => {
                info!("factored {} = {} * {}", self.n, p, q);
                if p <= q {
                    FactorOutcome::Pair(p, q)
                } else {
                    FactorOutcome::Pair(q, p)
                }
            }
            None => {
                warn!("every congruence was trivial, giving up on {}", self.n);
                FactorOutcome::GiveUp(self.n.clone())
            }
        }
    }

    /// Scans the small-prime table for a divisor; the first hit (in
    /// table order) wins.
    fn trial_division(&self) -> Option<FactorOutcome> {
        let divisor = SMALL_PRIMES.par_iter().copied().find_map_first(|p| {
            let p_big = BigInt::from(p);
            if p_big < self.n && self.n.mod_floor(&p_big).is_zero() {
                Some(p_big)
            } else {
                None
            }
        })?;

        let quotient = &self.n / &divisor;
        info!("trial division: {} = {} * {}", self.n, divisor, quotient);
        Some(FactorOutcome::Pair(divisor, quotient))
    }

    /// Collects smooth relations block by block until the count clears
    /// the factor base by the configured margin, or the offset bound
    /// runs out (`None`).
    fn sieve(
        &self,
        base: &FactorBase,
        poly_base: &BigInt,
        observer: &dyn SieveObserver,
    ) -> Option<Vec<Relation>> {
        let k = base.len();
        let required = k + self.config.sieve.relation_margin;
        let mut relations: Vec<Relation> = Vec::with_capacity(required);

        let mut offset = 0u64;
        'sieving: while offset <= self.config.sieve.max_offset {
            let mut block = SieveBlock::new(&self.n, poly_base, offset, k);
            block.apply_base(base);

            for relation in block.harvest(poly_base) {
                debug_assert!(relation.verify(&self.n, base));
                relations.push(relation);
                let ratio = (relations.len() as f64 / k as f64).min(1.0);
                observer.progress(ratio);
                debug!("{} of {} relations", relations.len(), required);
                if relations.len() >= required {
                    break 'sieving;
                }
            }

            offset = match offset.checked_add(BLOCK_SIZE as u64) {
                Some(next) => next,
                None => break,
            };
        }

        if relations.len() < required {
            warn!(
                "sieve bound exhausted with {} of {} relations",
                relations.len(),
                required
            );
            return None;
        }
        Some(relations)
    }

    /// Parity matrix, kernel extraction, and the congruence hunt.
    fn solve(&self, base: &FactorBase, relations: &[Relation]) -> Option<(BigInt, BigInt)> {
        let k = base.len();
        let m = relations.len();

        let mut matrix = BitMatrix::new(k, m).expect("dimensions are positive");
        for (j, relation) in relations.iter().enumerate() {
            for i in 0..k {
                if relation.parity(i) {
                    matrix.set(i as i64, j as i64, true);
                }
            }
        }

        let rank = matrix.row_reduction();
        let kernel = matrix.kernel();
        info!("parity matrix {}x{}: rank {}, {} kernel vectors", k, m, rank, kernel.len());

        for vector in &kernel {
            if let Some(pair) = self.congruence(base, relations, vector) {
                return Some(pair);
            }
        }
        None
    }

    /// Combines the relations a kernel vector selects into x^2 ≡ y^2
    /// (mod n) and tries to split n from it. Trivial congruences
    /// (x ≡ ±y) carry no information and are skipped.
    fn congruence(
        &self,
        base: &FactorBase,
        relations: &[Relation],
        vector: &bitvec::vec::BitVec,
    ) -> Option<(BigInt, BigInt)> {
        let k = base.len();
        let mut x = BigInt::one();
        let mut exponent_sums = vec![0u64; k];
        let mut selected = 0usize;

        for (j, relation) in relations.iter().enumerate() {
            if !vector[j] {
                continue;
            }
            selected += 1;
            x = (x * &relation.a).mod_floor(&self.n);
            for (i, &count) in relation.exponents.iter().enumerate() {
                exponent_sums[i] += count as u64;
            }
        }
        if selected == 0 {
            return None;
        }

        let mut y = BigInt::one();
        for (i, entry) in base.iter().enumerate() {
            // Kernel membership makes every summed exponent even.
            debug_assert!(exponent_sums[i] % 2 == 0);
            let half = exponent_sums[i] / 2;
            if half == 0 {
                continue;
            }
            let power = Modular::pow(&BigInt::from(entry.p), &BigInt::from(half), &self.n)
                .expect("modulus is positive");
            y = (y * power).mod_floor(&self.n);
        }

        let minus_y = (&self.n - &y).mod_floor(&self.n);
        if x == y || x == minus_y {
            debug!("trivial congruence from {} relations, skipping", selected);
            return None;
        }

        let p = GCD::binary(&(&x - &y), &self.n);
        let q = GCD::binary(&(&x + &y), &self.n);
        let one = BigInt::one();
        if p > one && p < self.n && q > one && q < self.n && &p * &q == self.n {
            debug!("congruence of squares: x={}, y={}", x, y);
            Some((p, q))
        } else {
            debug!("congruence degenerated to gcds {} and {}, skipping", p, q);
            None
        }
    }
}
