//! Derived statistics: maximum health, sanity, effort, and defense.
//!
//! Each class grows linearly with the exposure tier:
//!
//! | Class        | max health               | max sanity  | max effort                       |
//! |--------------|--------------------------|-------------|----------------------------------|
//! | Fighter      | 20 + VIG + t·(4 + VIG)   | 12 + t·3    | 2 + DIS + t·(2 + DIS)            |
//! | Practitioner | 16 + VIG + t·(3 + VIG)   | 16 + t·4    | 3 + DIS + t·(3 + DIS)            |
//! | Occultist    | 12 + VIG + t·(2 + VIG)   | 20 + t·5    | 4 + DIS + t·(4 + DIS)            |
//!
//! Defense is `10 + STR` for every class, including an unset one.

use ntp_core::{Attribute, Attributes, CharacterClass, CharacterRecord};
use serde::{Deserialize, Serialize};

/// Base and per-tier growth for one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Progression {
    health_base: i64,
    health_growth: i64,
    sanity_base: i64,
    sanity_growth: i64,
    effort_base: i64,
    effort_growth: i64,
}

impl Progression {
    fn for_class(class: CharacterClass) -> Option<Self> {
        let p = match class {
            CharacterClass::Fighter => Self {
                health_base: 20,
                health_growth: 4,
                sanity_base: 12,
                sanity_growth: 3,
                effort_base: 2,
                effort_growth: 2,
            },
            CharacterClass::Practitioner => Self {
                health_base: 16,
                health_growth: 3,
                sanity_base: 16,
                sanity_growth: 4,
                effort_base: 3,
                effort_growth: 3,
            },
            CharacterClass::Occultist => Self {
                health_base: 12,
                health_growth: 2,
                sanity_base: 20,
                sanity_growth: 5,
                effort_base: 4,
                effort_growth: 4,
            },
            CharacterClass::Unset => return None,
        };
        Some(p)
    }
}

/// Class-driven maxima.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Maxima {
    /// Maximum health.
    pub health: i32,
    /// Maximum sanity.
    pub sanity: i32,
    /// Maximum effort points.
    pub effort: i32,
}

/// Everything the calculator derives from class, attributes, and tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedStats {
    /// New maxima, or `None` when the class is unset.
    pub maxima: Option<Maxima>,
    /// Defense, always computed.
    pub defense: i32,
}

/// Compute derived statistics for a class, attribute set, and exposure tier.
pub fn recompute(class: CharacterClass, attributes: &Attributes, tier: u32) -> DerivedStats {
    let vigor = i64::from(attributes.get(Attribute::Vigor));
    let disposition = i64::from(attributes.get(Attribute::Disposition));
    let t = i64::from(tier);

    let maxima = Progression::for_class(class).map(|p| Maxima {
        health: saturate(p.health_base + vigor + t * (p.health_growth + vigor)),
        sanity: saturate(p.sanity_base + t * p.sanity_growth),
        effort: saturate(p.effort_base + disposition + t * (p.effort_growth + disposition)),
    });

    DerivedStats {
        maxima,
        defense: defense(attributes),
    }
}

/// `10 + strength`.
pub fn defense(attributes: &Attributes) -> i32 {
    10 + i32::from(attributes.get(Attribute::Strength))
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Recompute a record's maxima and defense, then pull each `current` back
/// into `[0, ceiling]`. Values already in bounds are left alone, so applying
/// this twice is the same as applying it once.
pub fn apply(record: &CharacterRecord) -> CharacterRecord {
    let stats = recompute(record.class, &record.attributes, record.exposure.tier());
    let mut next = record.clone();
    next.defense = stats.defense;

    if let Some(max) = stats.maxima {
        next.health.maximum = max.health;
        next.sanity.maximum = max.sanity;
        next.effort.maximum = max.effort;
    }

    next.health.current = bring_within(next.health.current, next.health.ceiling());
    next.sanity.current = bring_within(next.sanity.current, next.sanity.ceiling());
    next.effort.current = bring_within(next.effort.current, next.effort.ceiling());
    next
}

fn bring_within(current: i32, ceiling: i32) -> i32 {
    current.clamp(0, ceiling.max(0))
}
