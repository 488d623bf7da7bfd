//! Skill, attribute, and sanity checks.
//!
//! A check rolls one d20 per point of the governing attribute, keeps the
//! highest, and grades it. Training and skill bonuses are shown on the sheet
//! but do not change the pool.

use ntp_core::{Attribute, CharacterRecord, Skill};

use crate::dice::{CheckResult, Die, roll_pool};
use crate::rng::RandomSource;

/// Roll a check for an attribute.
pub fn attribute_check<R: RandomSource + ?Sized>(
    record: &CharacterRecord,
    attribute: Attribute,
    rng: &mut R,
) -> CheckResult {
    let pool = record.attributes.get(attribute);
    roll_pool(i64::from(pool), Die::D20, rng)
}

/// Roll a check for a skill, resolving Profession's attribute from the record.
pub fn skill_check<R: RandomSource + ?Sized>(
    record: &CharacterRecord,
    skill: Skill,
    rng: &mut R,
) -> CheckResult {
    attribute_check(record, record.skills.attribute_for(skill), rng)
}

/// A single graded d20.
pub fn sanity_check<R: RandomSource + ?Sized>(rng: &mut R) -> CheckResult {
    roll_pool(1, Die::D20, rng)
}
