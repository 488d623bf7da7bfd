//! Configuration for rolling: seeding and history size.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::dice::RollHistory;
use crate::dice::history::DEFAULT_CAPACITY;

/// How a front-end sets up its random source and roll history.
#[derive(Debug, Clone)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Number of roll batches the history keeps.
    pub history_capacity: usize,
}

impl Default for RollerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            history_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl RollerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the history capacity (at least 1).
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    /// Build the random source.
    pub fn make_source(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Build an empty roll history.
    pub fn make_history(&self) -> RollHistory {
        RollHistory::with_capacity(self.history_capacity)
    }
}
