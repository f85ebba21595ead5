//! Injectable randomness for the promotional insertion.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws used by [`InsertPromo`](super::InsertPromo).
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..=upper`.
    fn index_inclusive(&mut self, upper: usize) -> usize;
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Generator seeded from the operating system.
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Reproducible generator, for `--seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn index_inclusive(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..=upper)
    }
}

/// Replays fixed draws, cycling when a script runs out.
///
/// An empty unit script draws just below `1.0` (never inserts unless the
/// probability is `1.0`); an empty index script draws `0`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    units: Vec<f64>,
    indices: Vec<usize>,
    unit_pos: usize,
    index_pos: usize,
}

impl ScriptedSource {
    pub fn new(units: Vec<f64>, indices: Vec<usize>) -> Self {
        Self {
            units,
            indices,
            unit_pos: 0,
            index_pos: 0,
        }
    }

    /// Number of unit draws taken so far.
    pub fn unit_draws(&self) -> usize {
        self.unit_pos
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.units.is_empty() {
            return 1.0 - f64::EPSILON;
        }
        let value = self.units[self.unit_pos % self.units.len()];
        self.unit_pos += 1;
        value
    }

    fn index_inclusive(&mut self, upper: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let value = self.indices[self.index_pos % self.indices.len()];
        self.index_pos += 1;
        value.min(upper)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }

    fn index_inclusive(&mut self, upper: usize) -> usize {
        (**self).index_inclusive(upper)
    }
}
