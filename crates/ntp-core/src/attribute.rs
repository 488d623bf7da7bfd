use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Lowest attribute score.
pub const MIN_SCORE: u8 = 1;
/// Highest attribute score.
pub const MAX_SCORE: u8 = 10;

/// One of the five primary attributes.
///
/// An attribute's score is the number of d20s rolled for checks it governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Physical power; also sets defense.
    Strength,
    /// Speed and coordination.
    Agility,
    /// Reasoning and knowledge.
    Intellect,
    /// Willpower and presence; scales effort points.
    Disposition,
    /// Toughness; scales health.
    Vigor,
}

impl Attribute {
    /// All attributes in sheet order.
    pub const ALL: [Attribute; 5] = [
        Self::Strength,
        Self::Agility,
        Self::Intellect,
        Self::Disposition,
        Self::Vigor,
    ];

    /// Three-letter abbreviation shown next to skills.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::Strength => "STR",
            Self::Agility => "AGI",
            Self::Intellect => "INT",
            Self::Disposition => "DIS",
            Self::Vigor => "VIG",
        }
    }

    /// Parse a full name or abbreviation, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|a| a.to_string() == s || a.abbreviation().eq_ignore_ascii_case(&s))
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strength => write!(f, "strength"),
            Self::Agility => write!(f, "agility"),
            Self::Intellect => write!(f, "intellect"),
            Self::Disposition => write!(f, "disposition"),
            Self::Vigor => write!(f, "vigor"),
        }
    }
}

/// The five attribute scores, each kept in `[1, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAttributes")]
pub struct Attributes {
    strength: u8,
    agility: u8,
    intellect: u8,
    disposition: u8,
    vigor: u8,
}

impl Attributes {
    /// Build a score set, clamping every value into range.
    pub fn new(strength: i32, agility: i32, intellect: i32, disposition: i32, vigor: i32) -> Self {
        Self {
            strength: clamp_score(strength),
            agility: clamp_score(agility),
            intellect: clamp_score(intellect),
            disposition: clamp_score(disposition),
            vigor: clamp_score(vigor),
        }
    }

    /// The score of one attribute.
    pub fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Agility => self.agility,
            Attribute::Intellect => self.intellect,
            Attribute::Disposition => self.disposition,
            Attribute::Vigor => self.vigor,
        }
    }

    /// Write a score. Out-of-range values are clamped and stored, and the
    /// clamping is reported as an error.
    pub fn set(&mut self, attribute: Attribute, value: i32) -> Result<(), ValidationError> {
        let (clamped, error) = ValidationError::clamp(
            field_name(attribute),
            i64::from(value),
            i64::from(MIN_SCORE),
            i64::from(MAX_SCORE),
        );
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Agility => &mut self.agility,
            Attribute::Intellect => &mut self.intellect,
            Attribute::Disposition => &mut self.disposition,
            Attribute::Vigor => &mut self.vigor,
        };
        *slot = clamped as u8;
        error.map_or(Ok(()), Err)
    }

    /// Builder-style variant of [`Attributes::set`] that drops the clamp report.
    pub fn with(mut self, attribute: Attribute, value: i32) -> Self {
        let _ = self.set(attribute, value);
        self
    }

    /// Iterate over `(attribute, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, u8)> + '_ {
        Attribute::ALL.into_iter().map(|a| (a, self.get(a)))
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new(1, 1, 1, 1, 1)
    }
}

fn clamp_score(value: i32) -> u8 {
    value.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8
}

fn field_name(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::Strength => "strength",
        Attribute::Agility => "agility",
        Attribute::Intellect => "intellect",
        Attribute::Disposition => "disposition",
        Attribute::Vigor => "vigor",
    }
}

/// Unchecked wire form; loaded scores go through the same clamp as writes.
#[derive(Deserialize)]
struct RawAttributes {
    strength: i32,
    agility: i32,
    intellect: i32,
    disposition: i32,
    vigor: i32,
}

impl From<RawAttributes> for Attributes {
    fn from(raw: RawAttributes) -> Self {
        Self::new(
            raw.strength,
            raw.agility,
            raw.intellect,
            raw.disposition,
            raw.vigor,
        )
    }
}
