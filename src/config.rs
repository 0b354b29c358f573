//! Run parameters for one estimation.

use anyhow::{Result, bail};
use fastrand::Rng;

use crate::constants::{DAMPING, N_ITERATIONS, N_SAMPLES};

/// Parameters of the sampling and ranking pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Turns sampled from each starting square.
    pub samples: usize,
    /// Power-iteration steps.
    pub iterations: usize,
    /// Damping factor in `[0, 1]`.
    pub damping: f64,
    /// Seed for the random source; `None` draws one from process entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            samples: N_SAMPLES,
            iterations: N_ITERATIONS,
            damping: DAMPING,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            bail!("damping factor must be in [0, 1], got {}", self.damping);
        }
        Ok(())
    }

    /// The seed this run will use, drawing a fresh one if none was given.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| fastrand::u64(..))
    }

    /// A generator seeded with [`resolve_seed`](Self::resolve_seed).
    pub fn rng(&self) -> Rng {
        Rng::with_seed(self.resolve_seed())
    }
}
