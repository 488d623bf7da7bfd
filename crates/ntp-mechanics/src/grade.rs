//! Success tiers for a single d20 result.
//!
//! Thresholds are checked highest first and every boundary belongs to the
//! higher tier:
//! - 20: extreme
//! - 18-19: high
//! - 15-17: guaranteed
//! - 12-14: basic
//! - below 12: failure

use serde::{Deserialize, Serialize};

use crate::dice::DieResult;

/// Ordered success classification of a d20 result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SuccessTier {
    /// Below 12.
    Failure,
    /// 12 or more.
    Basic,
    /// 15 or more.
    Guaranteed,
    /// 18 or more.
    High,
    /// A natural 20.
    Extreme,
}

impl SuccessTier {
    /// Returns true for every tier above failure.
    pub fn is_success(self) -> bool {
        self > Self::Failure
    }
}

impl std::fmt::Display for SuccessTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failure => write!(f, "Failure"),
            Self::Basic => write!(f, "Basic"),
            Self::Guaranteed => write!(f, "Guaranteed"),
            Self::High => write!(f, "High"),
            Self::Extreme => write!(f, "Extreme!"),
        }
    }
}

/// Grade a d20 value. Only meaningful for d20 results; see [`grade_die`].
pub fn grade(value: u32) -> SuccessTier {
    if value >= 20 {
        SuccessTier::Extreme
    } else if value >= 18 {
        SuccessTier::High
    } else if value >= 15 {
        SuccessTier::Guaranteed
    } else if value >= 12 {
        SuccessTier::Basic
    } else {
        SuccessTier::Failure
    }
}

/// Grade a die result, or `None` if it is not a d20.
pub fn grade_die(result: &DieResult) -> Option<SuccessTier> {
    result.die.is_d20().then(|| grade(result.value))
}
