//! Workload generation for the benchmark phases.
//!
//! One uniform-draw contract with two views: `below` for value draws and
//! `position` for index draws. Backed by `StdRng`, entropy-seeded in the
//! production path and explicitly seeded in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source driving both benchmark phases.
///
/// Constructed once per run and passed `&mut` into each phase, so every
/// draw advances a single generator state.
pub struct WorkloadRng {
    rng: StdRng,
}

impl WorkloadRng {
    /// Entropy-seeded source. Runs are not reproducible across executions.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministically seeded source.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw in `[0, n)`. Returns 0 when the range is empty.
    pub fn below(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        self.rng.random_range(0..n)
    }

    /// Uniform position in `[0, len)`. Returns 0 when `len` is 0.
    pub fn position(&mut self, len: usize) -> usize {
        self.below(len as u64) as usize
    }
}
