// src/core/rng.rs

use num::bigint::Sign;
use num::BigInt;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source for witness selection. The draws filter candidates
/// rather than protect secrets, so a fast non-cryptographic stream
/// cipher seeded from the OS is plenty.
pub struct SieveRng {
    rng: ChaCha8Rng,
}

impl SieveRng {
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        rand::rng().fill(&mut seed);
        SieveRng {
            rng: ChaCha8Rng::from_seed(seed),
        }
    }

    /// Deterministic stream for reproducible tests.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        SieveRng {
            rng: ChaCha8Rng::from_seed(seed),
        }
    }

    pub fn next_bool(&mut self) -> bool {
        self.rng.random()
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.rng.random_range(0..bound)
    }

    /// Uniform draw from the inclusive range `[lower, upper]` by
    /// rejection sampling over the span's byte width.
    pub fn bigint_in(&mut self, lower: &BigInt, upper: &BigInt) -> BigInt {
        if lower > upper {
            panic!("upper must be greater than or equal to lower");
        }

        let delta = upper - lower;
        let width = delta.to_bytes_be().1.len();
        let mut buffer = vec![0u8; width];

        loop {
            self.rng.fill(&mut buffer[..]);
            let candidate = BigInt::from_bytes_be(Sign::Plus, &buffer);
            if candidate <= delta {
                return lower + candidate;
            }
        }
    }
}

impl Default for SieveRng {
    fn default() -> Self {
        Self::new()
    }
}
