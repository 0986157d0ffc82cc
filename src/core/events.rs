// src/core/events.rs

use num::BigInt;

/// Notifications crossing the engine boundary. The engine fires them and
/// moves on; nothing comes back.
#[derive(Debug, Clone, PartialEq)]
pub enum FactorEvent {
    /// The worker is up and has accepted the request.
    Started,
    /// Sieving completion estimate in `[0, 1]`, one per confirmed
    /// smooth relation.
    Progress(f64),
    /// Terminal result: one integer on give-up, two on success.
    Done(Vec<BigInt>),
}

/// Injected notification sink. Implementations perform side effects
/// only; they return nothing and cannot fail into the engine.
pub trait SieveObserver {
    fn progress(&self, ratio: f64);
    fn finished(&self, factors: &[BigInt]);
}

/// Observer that discards every notification.
pub struct NullObserver;

impl SieveObserver for NullObserver {
    fn progress(&self, _ratio: f64) {}

    fn finished(&self, _factors: &[BigInt]) {}
}
