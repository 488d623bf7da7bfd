//! Rules engine for the NTP character sheet.
//!
//! Provides an injectable random source, dice pools with keep-highest
//! checks, damage notation (`2d6+3`) parsing and evaluation, success tier
//! grading for d20 results, derived statistics per class and terror
//! exposure, and collection totals. Every operation is a pure function of a
//! [`ntp_core::CharacterRecord`] snapshot plus draws from a
//! [`RandomSource`].

pub mod aggregate;
pub mod check;
pub mod config;
pub mod derived;
pub mod dice;
pub mod error;
pub mod grade;
pub mod rng;
pub mod sheet;

pub use check::{attribute_check, sanity_check, skill_check};
pub use config::RollerConfig;
pub use derived::{DerivedStats, Maxima, recompute};
pub use dice::{
    CheckResult, DiceFormula, DicePool, Die, DieResult, FormulaRoll, ParseError, RollHistory,
    RollResult,
};
pub use error::{MechError, MechResult};
pub use grade::{SuccessTier, grade};
pub use rng::{RandomSource, ScriptedRolls};
