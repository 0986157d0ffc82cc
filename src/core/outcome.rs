// src/core/outcome.rs

use num::BigInt;

/// Terminal result of one factoring attempt. Giving up is an ordinary
/// outcome, reported as the input itself, never as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FactorOutcome {
    /// Nontrivial split `p * q = n` with `1 < p <= q < n`.
    Pair(BigInt, BigInt),
    /// The attempt exhausted its bounds; the input is returned unsplit.
    GiveUp(BigInt),
}

impl FactorOutcome {
    /// The notification payload: `[p, q]` on success, `[n]` otherwise.
    pub fn factors(&self) -> Vec<BigInt> {
        match self {
            FactorOutcome::Pair(p, q) => vec![p.clone(), q.clone()],
            FactorOutcome::GiveUp(n) => vec![n.clone()],
        }
    }

    pub fn is_factored(&self) -> bool {
        matches!(self, FactorOutcome::Pair(_, _))
    }
}
