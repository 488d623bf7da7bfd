//! Record-level operations.
//!
//! Each function takes a record snapshot and returns a new one. Writes to
//! class, attributes, or exposure are followed by a recompute of derived
//! statistics before the snapshot is returned.

use ntp_core::{Attribute, CharacterClass, CharacterRecord, ItemId, ValidationError};

use crate::aggregate::{clamp_ammo, clamp_resource};
use crate::derived;
use crate::dice::{DiceFormula, FormulaRoll};
use crate::error::{MechError, MechResult};
use crate::rng::RandomSource;

/// Which pool a resource adjustment targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    /// Hit points; the ceiling includes temporary hit points.
    Health,
    /// Sanity points.
    Sanity,
    /// Effort points.
    Effort,
}

impl Pool {
    /// Parse a pool name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "health" | "hp" => Some(Self::Health),
            "sanity" | "san" => Some(Self::Sanity),
            "effort" | "ep" => Some(Self::Effort),
            _ => None,
        }
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Health => write!(f, "health"),
            Self::Sanity => write!(f, "sanity"),
            Self::Effort => write!(f, "effort"),
        }
    }
}

/// Write an attribute score and recompute. Reports when the value was clamped.
pub fn set_attribute(
    record: &CharacterRecord,
    attribute: Attribute,
    value: i32,
) -> (CharacterRecord, Option<ValidationError>) {
    let mut next = record.clone();
    let warning = next.attributes.set(attribute, value).err();
    (derived::apply(&next), warning)
}

/// Change class and recompute.
pub fn set_class(record: &CharacterRecord, class: CharacterClass) -> CharacterRecord {
    let mut next = record.clone();
    next.class = class;
    derived::apply(&next)
}

/// Write the exposure dial and recompute. Reports when the value was clamped.
pub fn set_exposure(
    record: &CharacterRecord,
    percent: i32,
) -> (CharacterRecord, Option<ValidationError>) {
    let mut next = record.clone();
    let warning = next.set_exposure(percent).err();
    (derived::apply(&next), warning)
}

/// Spend (negative) or restore (positive) a pool, clamped to `[0, ceiling]`.
pub fn adjust(record: &CharacterRecord, pool: Pool, delta: i32) -> CharacterRecord {
    let mut next = record.clone();
    match pool {
        Pool::Health => {
            let ceiling = next.health.ceiling();
            next.health.current = clamp_resource(next.health.current, delta, ceiling);
        }
        Pool::Sanity => {
            let ceiling = next.sanity.ceiling();
            next.sanity.current = clamp_resource(next.sanity.current, delta, ceiling);
        }
        Pool::Effort => {
            let ceiling = next.effort.ceiling();
            next.effort.current = clamp_resource(next.effort.current, delta, ceiling);
        }
    }
    next
}

/// Load (positive) or spend (negative) a weapon's ammunition.
///
/// Weapons without ammunition are returned unchanged.
pub fn adjust_ammo(
    record: &CharacterRecord,
    weapon: ItemId,
    delta: i64,
) -> MechResult<CharacterRecord> {
    let mut next = record.clone();
    let entry = next
        .weapon_mut(weapon)
        .ok_or(MechError::WeaponNotFound(weapon))?;
    if let Some(ammo) = entry.ammo.as_mut() {
        ammo.current = clamp_ammo(ammo.current, delta, ammo.max);
    }
    Ok(next)
}

/// Roll a weapon's damage notation. A malformed notation yields
/// [`MechError::Parse`] and draws nothing.
pub fn roll_weapon_damage<R: RandomSource + ?Sized>(
    record: &CharacterRecord,
    weapon: ItemId,
    rng: &mut R,
) -> MechResult<FormulaRoll> {
    let entry = record
        .weapon(weapon)
        .ok_or(MechError::WeaponNotFound(weapon))?;
    let formula = DiceFormula::parse(&entry.damage)?;
    Ok(formula.evaluate(rng))
}
