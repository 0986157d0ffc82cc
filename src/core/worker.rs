// src/core/worker.rs

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use num::BigInt;
use crate::config::QsConfig;
use crate::core::events::{FactorEvent, SieveObserver};
use crate::core::quadratic_sieve::QuadraticSieve;

/// Observer that forwards notifications into a channel. Send failures
/// mean the caller hung up; the run keeps going regardless.
struct ChannelObserver {
    sender: Sender<FactorEvent>,
}

impl SieveObserver for ChannelObserver {
    fn progress(&self, ratio: f64) {
        let _ = self.sender.send(FactorEvent::Progress(ratio));
    }

    fn finished(&self, factors: &[BigInt]) {
        let _ = self.sender.send(FactorEvent::Done(factors.to_vec()));
    }
}

/// Runs one factoring request on its own detached thread. The returned
/// channel delivers a `Started` marker, zero or more `Progress` ratios,
/// and exactly one terminal `Done` payload; the engine never waits for
/// the receiver.
pub fn spawn(n: BigInt, config: QsConfig) -> Receiver<FactorEvent> {
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let _ = sender.send(FactorEvent::Started);
        let observer = ChannelObserver { sender };
        QuadraticSieve::with_config(&n, config).factor(&observer);
    });
    receiver
}
