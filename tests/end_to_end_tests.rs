// Full pipeline runs: trial-division fast path, the complete sieve
// path, the give-up outcomes, and the worker channel contract.

use num::{BigInt, One};
use qsieve::config::QsConfig;
use qsieve::core::events::{FactorEvent, NullObserver};
use qsieve::core::outcome::FactorOutcome;
use qsieve::core::quadratic_sieve::{factor, QuadraticSieve};
use qsieve::core::worker;

/// Two primes just past the small-prime table; their product crosses the
/// sieve threshold, so factoring it exercises the whole pipeline.
const P_SMALL: u64 = 10_007;
const Q_SMALL: u64 = 10_009;

/// Two ~20-bit primes for a heavier sieve run.
const P_LARGE: u64 = 786_433;
const Q_LARGE: u64 = 1_048_583;

fn semiprime(p: u64, q: u64) -> BigInt {
    BigInt::from(p) * BigInt::from(q)
}

fn assert_valid_outcome(n: &BigInt, outcome: &FactorOutcome) {
    match outcome {
        FactorOutcome::Pair(p, q) => {
            assert_eq!(&(p * q), n, "pair must multiply back to the input");
            assert!(p > &BigInt::one() && p < n);
            assert!(q > &BigInt::one() && q < n);
        }
        FactorOutcome::GiveUp(returned) => assert_eq!(returned, n),
    }
}

#[test]
fn factor_77_by_trial_division_alone() {
    let outcome = factor(&BigInt::from(77));
    assert_eq!(outcome, FactorOutcome::Pair(BigInt::from(7), BigInt::from(11)));
}

#[test]
fn full_sieve_path_splits_a_40_bit_semiprime() {
    let n = semiprime(P_LARGE, Q_LARGE);
    let outcome = QuadraticSieve::new(&n).factor(&NullObserver);

    assert!(outcome.is_factored(), "sieve should split {}", n);
    assert_valid_outcome(&n, &outcome);
    let factors = outcome.factors();
    assert_eq!(factors, vec![BigInt::from(P_LARGE), BigInt::from(Q_LARGE)]);
}

#[test]
fn give_up_when_factor_base_ceiling_is_exhausted() {
    let n = semiprime(P_SMALL, Q_SMALL);
    let mut config = QsConfig::default();
    config.sieve.factor_base_ceiling = 100;

    let outcome = QuadraticSieve::with_config(&n, config).factor(&NullObserver);
    assert_eq!(outcome, FactorOutcome::GiveUp(n.clone()));
    assert_eq!(outcome.factors(), vec![n]);
}

#[test]
fn give_up_when_sieve_bound_is_exhausted() {
    let n = semiprime(P_SMALL, Q_SMALL);
    let mut config = QsConfig::default();
    config.sieve.max_offset = 0; // a single block cannot produce enough relations

    let outcome = QuadraticSieve::with_config(&n, config).factor(&NullObserver);
    assert_eq!(outcome, FactorOutcome::GiveUp(n));
}

#[test]
fn repeated_invocations_stay_valid() {
    let n = semiprime(P_SMALL, Q_SMALL);
    for _ in 0..3 {
        let outcome = QuadraticSieve::new(&n).factor(&NullObserver);
        assert_valid_outcome(&n, &outcome);
        // This input is comfortably within reach, so the runs should
        // actually split it rather than merely stay consistent.
        assert!(outcome.is_factored());
    }
}

#[test]
fn worker_reports_started_then_done() {
    let n = BigInt::from(8051); // 83 * 97, settled by trial division
    let events: Vec<FactorEvent> = worker::spawn(n, QsConfig::default()).iter().collect();

    assert_eq!(events.first(), Some(&FactorEvent::Started));
    assert_eq!(
        events.last(),
        Some(&FactorEvent::Done(vec![BigInt::from(83), BigInt::from(97)]))
    );
}

#[test]
fn worker_streams_progress_through_a_sieve_run() {
    let n = semiprime(P_SMALL, Q_SMALL);
    let events: Vec<FactorEvent> = worker::spawn(n.clone(), QsConfig::default()).iter().collect();

    assert_eq!(events.first(), Some(&FactorEvent::Started));

    let ratios: Vec<f64> = events
        .iter()
        .filter_map(|event| match event {
            FactorEvent::Progress(ratio) => Some(*ratio),
            _ => None,
        })
        .collect();
    assert!(!ratios.is_empty(), "a sieve run reports progress");
    assert!(ratios.iter().all(|r| (0.0..=1.0).contains(r)));
    assert!(ratios.windows(2).all(|w| w[0] <= w[1]), "ratios never regress");

    match events.last() {
        Some(FactorEvent::Done(factors)) => {
            assert_eq!(factors.len(), 2);
            assert_eq!(&factors[0] * &factors[1], n);
        }
        other => panic!("terminal event must be Done, got {:?}", other),
    }
}
