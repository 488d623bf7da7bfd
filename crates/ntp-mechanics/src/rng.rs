//! The random source every roll draws from.
//!
//! Production code rolls with a [`StdRng`]; tests and replays can feed a
//! [`ScriptedRolls`] queue instead.

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// Supplies uniform integers in `[1, sides]`.
pub trait RandomSource {
    /// Draw one value in `[1, sides]`. A `sides` of 0 is treated as 1.
    fn roll(&mut self, sides: u32) -> u32;
}

impl RandomSource for StdRng {
    fn roll(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }
}

/// A predetermined sequence of draws.
///
/// Each value is clamped into `[1, sides]` for the die it lands on. Once the
/// queue is empty every further draw returns 1.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    values: VecDeque<u32>,
    draws: usize,
}

impl ScriptedRolls {
    /// Queue up the given values in draw order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
            draws: 0,
        }
    }

    /// How many draws have been made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// How many scripted values are left.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn roll(&mut self, sides: u32) -> u32 {
        self.draws += 1;
        self.values
            .pop_front()
            .unwrap_or(1)
            .clamp(1, sides.max(1))
    }
}
