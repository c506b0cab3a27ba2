//! Random Sources
//!
//! The simulator and chart generator never touch a global RNG. They draw from
//! an injected [`RandomSource`], which lets tests pin every draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

/// Source of uniform draws over half-open ranges
pub trait RandomSource: Send {
    /// Uniform integer in `range`. An empty range yields `range.start`.
    fn int_in(&mut self, range: Range<i64>) -> i64;

    /// Uniform real in `range`. An empty range yields `range.start`.
    fn real_in(&mut self, range: Range<f64>) -> f64;
}

/// `rand`-backed source, either OS-seeded or reproducible from a fixed seed
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seed from the operating system
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is configured, OS-seeded otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os(),
        }
    }
}

impl RandomSource for StdRandom {
    fn int_in(&mut self, range: Range<i64>) -> i64 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.random_range(range)
    }

    fn real_in(&mut self, range: Range<f64>) -> f64 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.random_range(range)
    }
}

/// Replays fixed draws, cycling when a script runs out.
///
/// Integer and real draws come from separate scripts. Scripted values are
/// returned as-is, without checking them against the requested range.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    ints: Vec<i64>,
    reals: Vec<f64>,
    next_int: usize,
    next_real: usize,
}

impl ScriptedRandom {
    pub fn new(ints: Vec<i64>, reals: Vec<f64>) -> Self {
        Self {
            ints,
            reals,
            next_int: 0,
            next_real: 0,
        }
    }

    /// Number of integer draws served so far
    pub fn int_draws(&self) -> usize {
        self.next_int
    }

    /// Number of real draws served so far
    pub fn real_draws(&self) -> usize {
        self.next_real
    }
}

impl RandomSource for ScriptedRandom {
    fn int_in(&mut self, range: Range<i64>) -> i64 {
        if self.ints.is_empty() {
            return range.start;
        }
        let value = self.ints[self.next_int % self.ints.len()];
        self.next_int += 1;
        value
    }

    fn real_in(&mut self, range: Range<f64>) -> f64 {
        if self.reals.is_empty() {
            return range.start;
        }
        let value = self.reals[self.next_real % self.reals.len()];
        self.next_real += 1;
        value
    }
}
