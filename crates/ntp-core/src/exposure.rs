//! Terror exposure (NTP): a percentage dial of accumulated horror.
//!
//! The dial moves in steps of 5 between 5% and 100%. Every full 5% is one
//! tier, and the tier scales all derived-stat growth.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest exposure percentage.
pub const MIN_EXPOSURE: u8 = 5;
/// Highest exposure percentage.
pub const MAX_EXPOSURE: u8 = 100;
/// Granularity of the dial.
pub const EXPOSURE_STEP: u8 = 5;

/// Terror exposure percentage, always in `[5, 100]` and a multiple of 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "u8")]
pub struct TerrorExposure(u8);

impl TerrorExposure {
    /// Create an exposure value, clamping into range and snapping down to
    /// the nearest step.
    pub fn new(percent: i32) -> Self {
        Self::checked(percent).0
    }

    /// Like [`TerrorExposure::new`], but also reports when the input was
    /// outside `[5, 100]`. Snapping to the step is never reported.
    pub fn checked(percent: i32) -> (Self, Option<ValidationError>) {
        let (clamped, error) = ValidationError::clamp(
            "exposure",
            i64::from(percent),
            i64::from(MIN_EXPOSURE),
            i64::from(MAX_EXPOSURE),
        );
        let clamped = clamped as u8;
        (Self(clamped - clamped % EXPOSURE_STEP), error)
    }

    /// The percentage value.
    pub fn percent(self) -> u8 {
        self.0
    }

    /// `floor(percent / 5)`, in `[1, 20]`.
    pub fn tier(self) -> u32 {
        u32::from(self.0 / EXPOSURE_STEP)
    }
}

impl Default for TerrorExposure {
    fn default() -> Self {
        Self(MIN_EXPOSURE)
    }
}

impl From<i32> for TerrorExposure {
    fn from(percent: i32) -> Self {
        Self::new(percent)
    }
}

impl From<TerrorExposure> for u8 {
    fn from(exposure: TerrorExposure) -> Self {
        exposure.0
    }
}

impl fmt::Display for TerrorExposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
