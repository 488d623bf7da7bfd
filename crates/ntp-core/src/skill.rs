//! Skills and the attribute each one rolls with.
//!
//! Every skill is governed by a fixed attribute except Profession, whose
//! attribute is chosen per character and resolved when a check is made.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attribute::Attribute;

/// How a skill finds the attribute that sizes its dice pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoverningAttribute {
    /// Always the same attribute.
    Fixed(Attribute),
    /// Read from the character's override at check time.
    Variable,
}

impl fmt::Display for GoverningAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(a) => write!(f, "{}", a.abbreviation()),
            Self::Variable => write!(f, "VAR"),
        }
    }
}

/// A skill on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Athletics (STR).
    Athletics,
    /// Cooking (AGI).
    Cooking,
    /// Knowledge (INT).
    Knowledge,
    /// Dexterity (AGI).
    Dexterity,
    /// Diplomacy (DIS).
    Diplomacy,
    /// Fortitude (VIG).
    Fortitude,
    /// Stealth (AGI).
    Stealth,
    /// Intimidation (DIS).
    Intimidation,
    /// Intuition (DIS).
    Intuition,
    /// Investigation (INT).
    Investigation,
    /// Fast Talk (DIS).
    FastTalk,
    /// Fighting (STR).
    Fighting,
    /// Medicine (INT).
    Medicine,
    /// Occultism (INT).
    Occultism,
    /// Perception (DIS).
    Perception,
    /// Profession (attribute chosen per character).
    Profession,
    /// Marksmanship (AGI).
    Marksmanship,
    /// Reflexes (AGI).
    Reflexes,
    /// Religion (INT).
    Religion,
    /// Survival (INT).
    Survival,
    /// Technology (INT).
    Technology,
    /// Will (DIS).
    Will,
}

impl Skill {
    /// All skills in sheet order.
    pub const ALL: [Skill; 22] = [
        Self::Athletics,
        Self::Cooking,
        Self::Knowledge,
        Self::Dexterity,
        Self::Diplomacy,
        Self::Fortitude,
        Self::Stealth,
        Self::Intimidation,
        Self::Intuition,
        Self::Investigation,
        Self::FastTalk,
        Self::Fighting,
        Self::Medicine,
        Self::Occultism,
        Self::Perception,
        Self::Profession,
        Self::Marksmanship,
        Self::Reflexes,
        Self::Religion,
        Self::Survival,
        Self::Technology,
        Self::Will,
    ];

    /// The attribute this skill rolls with.
    pub fn governing(self) -> GoverningAttribute {
        use Attribute::*;
        let attribute = match self {
            Self::Athletics | Self::Fighting => Strength,
            Self::Cooking
            | Self::Dexterity
            | Self::Stealth
            | Self::Marksmanship
            | Self::Reflexes => Agility,
            Self::Knowledge
            | Self::Investigation
            | Self::Medicine
            | Self::Occultism
            | Self::Religion
            | Self::Survival
            | Self::Technology => Intellect,
            Self::Diplomacy
            | Self::Intimidation
            | Self::Intuition
            | Self::FastTalk
            | Self::Perception
            | Self::Will => Disposition,
            Self::Fortitude => Vigor,
            Self::Profession => return GoverningAttribute::Variable,
        };
        GoverningAttribute::Fixed(attribute)
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Athletics => "Athletics",
            Self::Cooking => "Cooking",
            Self::Knowledge => "Knowledge",
            Self::Dexterity => "Dexterity",
            Self::Diplomacy => "Diplomacy",
            Self::Fortitude => "Fortitude",
            Self::Stealth => "Stealth",
            Self::Intimidation => "Intimidation",
            Self::Intuition => "Intuition",
            Self::Investigation => "Investigation",
            Self::FastTalk => "Fast Talk",
            Self::Fighting => "Fighting",
            Self::Medicine => "Medicine",
            Self::Occultism => "Occultism",
            Self::Perception => "Perception",
            Self::Profession => "Profession",
            Self::Marksmanship => "Marksmanship",
            Self::Reflexes => "Reflexes",
            Self::Religion => "Religion",
            Self::Survival => "Survival",
            Self::Technology => "Technology",
            Self::Will => "Will",
        }
    }

    /// Parse a display name, ignoring case, spaces, dashes and underscores.
    pub fn parse(s: &str) -> Option<Self> {
        let key = normalize(s);
        Self::ALL.into_iter().find(|sk| normalize(sk.name()) == key)
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A character's standing in one skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillProficiency {
    /// Whether the character is trained in the skill.
    pub trained: bool,
    /// Flat bonus written on the sheet.
    pub bonus: i32,
}

/// Every skill's proficiency plus the Profession attribute override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    /// Proficiency per skill. Missing entries read as untrained.
    pub proficiencies: BTreeMap<Skill, SkillProficiency>,
    /// The attribute Profession rolls with.
    pub profession_attribute: Attribute,
}

impl Skills {
    /// Proficiency in a skill, defaulting to untrained with no bonus.
    pub fn get(&self, skill: Skill) -> SkillProficiency {
        self.proficiencies.get(&skill).copied().unwrap_or_default()
    }

    /// Mutable proficiency for a skill, inserting the default if missing.
    pub fn get_mut(&mut self, skill: Skill) -> &mut SkillProficiency {
        self.proficiencies.entry(skill).or_default()
    }

    /// Resolve the attribute a skill rolls with for this character.
    pub fn attribute_for(&self, skill: Skill) -> Attribute {
        match skill.governing() {
            GoverningAttribute::Fixed(a) => a,
            GoverningAttribute::Variable => self.profession_attribute,
        }
    }

    /// Skills the character is trained in, in sheet order.
    pub fn trained(&self) -> impl Iterator<Item = Skill> + '_ {
        Skill::ALL.into_iter().filter(|s| self.get(*s).trained)
    }
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            proficiencies: Skill::ALL
                .into_iter()
                .map(|s| (s, SkillProficiency::default()))
                .collect(),
            profession_attribute: Attribute::Intellect,
        }
    }
}
