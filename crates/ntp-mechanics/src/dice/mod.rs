//! Dice types, pools, notation, and rolling.
//!
//! Supports the polyhedral dice offered on the sheet (d4 through d20), the
//! percentile die, and arbitrary custom sizes coming from damage notation.

pub mod history;
pub mod notation;
pub mod pool;
pub mod roll;

pub use history::RollHistory;
pub use notation::{DiceFormula, FormulaRoll, ParseError};
pub use pool::{CheckResult, DicePool, roll_many, roll_pool};
pub use roll::{DieResult, RollResult};

use serde::{Deserialize, Serialize};

/// Most dice a single pool or formula may roll. Notation asking for more is
/// rejected; pools sized from a number are capped here.
pub const MAX_DICE: u32 = 1000;

/// A polyhedral die type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// The dice the free roller offers.
    pub const STANDARD: [Die; 6] = [Self::D4, Self::D6, Self::D8, Self::D10, Self::D12, Self::D20];

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Map a side count onto the matching variant.
    pub fn from_sides(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }

    /// Parse a die from a string like "d20", "6", "D100".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        let digits = s.strip_prefix('d').unwrap_or(&s);
        match digits.parse::<u32>().ok()? {
            0 | 1 => None,
            n => Some(Self::from_sides(n)),
        }
    }

    /// Success tiers only apply to d20 results.
    pub fn is_d20(self) -> bool {
        self.sides() == 20
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
