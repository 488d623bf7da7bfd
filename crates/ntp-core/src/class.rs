use std::fmt;

use serde::{Deserialize, Serialize};

/// A character class. Determines how derived statistics grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// Front-line combatant: most health, least sanity.
    Fighter,
    /// Skilled generalist.
    Practitioner,
    /// Student of the occult: most sanity and effort, least health.
    Occultist,
    /// No class chosen yet. Derived maxima are left untouched.
    #[default]
    Unset,
}

impl CharacterClass {
    /// The classes a player can pick.
    pub const PLAYABLE: [CharacterClass; 3] = [Self::Fighter, Self::Practitioner, Self::Occultist];

    /// Returns true unless the class is [`CharacterClass::Unset`].
    pub fn is_set(self) -> bool {
        self != Self::Unset
    }

    /// Parse a class name, case-insensitively. `""`, `"none"` and `"unset"`
    /// all map to [`CharacterClass::Unset`].
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "fighter" => Some(Self::Fighter),
            "practitioner" => Some(Self::Practitioner),
            "occultist" => Some(Self::Occultist),
            "" | "none" | "unset" => Some(Self::Unset),
            _ => None,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fighter => write!(f, "Fighter"),
            Self::Practitioner => write!(f, "Practitioner"),
            Self::Occultist => write!(f, "Occultist"),
            Self::Unset => write!(f, "—"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_classes() {
        assert_eq!(CharacterClass::parse("Fighter"), Some(CharacterClass::Fighter));
        assert_eq!(
            CharacterClass::parse(" occultist "),
            Some(CharacterClass::Occultist)
        );
        assert_eq!(CharacterClass::parse(""), Some(CharacterClass::Unset));
        assert_eq!(CharacterClass::parse("bard"), None);
    }

    #[test]
    fn default_is_unset() {
        assert_eq!(CharacterClass::default(), CharacterClass::Unset);
        assert!(!CharacterClass::Unset.is_set());
        assert!(CharacterClass::PLAYABLE.iter().all(|c| c.is_set()));
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&CharacterClass::Practitioner).unwrap();
        assert_eq!(json, "\"practitioner\"");
    }
}
