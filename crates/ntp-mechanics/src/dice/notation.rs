//! Damage notation: `<count>d<sides>[+<bonus>]`, e.g. `"2d6+3"`.
//!
//! The parser looks for the first `NdM[+B]` anywhere in the input, so text
//! around the formula is ignored (`"claws 2d6+3 (bleed)"` parses). Sheets in
//! the wild write damage this way and rely on it.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Die, MAX_DICE};
use super::pool::DicePool;
use super::roll::RollResult;
use crate::rng::RandomSource;

static NOTATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)d([0-9]+)(?:\+([0-9]+))?").expect("valid regex"));

/// Errors from parsing dice notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// No usable `NdM[+B]` was found in the input.
    #[error("malformed dice notation: {input:?} (expected NdM or NdM+B)")]
    Malformed {
        /// The rejected input.
        input: String,
    },
}

/// A parsed damage formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceFormula {
    /// Number of dice. Zero is allowed and rolls nothing.
    pub count: u32,
    /// Die type rolled.
    pub die: Die,
    /// Flat amount added after rolling.
    pub bonus: u32,
}

impl DiceFormula {
    /// Parse the first `NdM[+B]` found in `input`.
    ///
    /// Fails with [`ParseError::Malformed`] when nothing matches, when the
    /// first match has zero sides or more than [`MAX_DICE`] dice, or when a
    /// number does not fit in `u32`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::Malformed {
            input: input.to_string(),
        };
        let caps = NOTATION.captures(input).ok_or_else(malformed)?;

        let count: u32 = caps[1].parse().map_err(|_| malformed())?;
        let sides: u32 = caps[2].parse().map_err(|_| malformed())?;
        let bonus: u32 = match caps.get(3) {
            Some(m) => m.as_str().parse().map_err(|_| malformed())?,
            None => 0,
        };
        if sides == 0 || count > MAX_DICE {
            return Err(malformed());
        }

        Ok(Self {
            count,
            die: Die::from_sides(sides),
            bonus,
        })
    }

    /// Lowest possible total.
    pub fn min_total(&self) -> u64 {
        u64::from(self.count) + u64::from(self.bonus)
    }

    /// Highest possible total.
    pub fn max_total(&self) -> u64 {
        u64::from(self.count) * u64::from(self.die.sides()) + u64::from(self.bonus)
    }

    /// Roll the formula. Draws exactly `count` values.
    pub fn evaluate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> FormulaRoll {
        let rolls = DicePool::new().add(self.die, self.count).roll(rng);
        let total = rolls.total().saturating_add(u64::from(self.bonus));
        FormulaRoll {
            formula: *self,
            rolls,
            total,
        }
    }
}

impl FromStr for DiceFormula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        if self.bonus > 0 {
            write!(f, "+{}", self.bonus)?;
        }
        Ok(())
    }
}

/// The result of evaluating a [`DiceFormula`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaRoll {
    /// The formula that was rolled.
    pub formula: DiceFormula,
    /// The individual dice.
    pub rolls: RollResult,
    /// Sum of the dice plus the bonus.
    pub total: u64,
}

impl fmt::Display for FormulaRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.rolls.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "{}: [{}]", self.formula, values.join(", "))?;
        if self.formula.bonus > 0 {
            write!(f, " + {}", self.formula.bonus)?;
        }
        write!(f, " = {}", self.total)
    }
}
