//! Health, sanity, and effort pools.
//!
//! Maxima are owned by the derived-stats calculator; callers only move
//! `current` (and health's `temporary`) directly.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Hit points, with a temporary buffer that raises the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Current hit points.
    pub current: i32,
    /// Maximum hit points from the class formula.
    pub maximum: i32,
    /// Temporary hit points stacked on top of the maximum. Never negative
    /// once loaded.
    #[serde(deserialize_with = "non_negative")]
    pub temporary: i32,
}

impl Health {
    /// A full pool with no temporary hit points.
    pub fn new(maximum: i32) -> Self {
        Self {
            current: maximum,
            maximum,
            temporary: 0,
        }
    }

    /// Highest value `current` may reach: `maximum + temporary`, saturating.
    /// A negative `temporary` counts as 0.
    pub fn ceiling(&self) -> i32 {
        self.maximum.saturating_add(self.temporary.max(0))
    }

    /// Fraction of the maximum remaining, for display (0.0 to 1.0).
    pub fn fraction(&self) -> f64 {
        fraction(self.current, self.maximum)
    }
}

/// A pool bounded by its maximum (sanity, effort points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Current value.
    pub current: i32,
    /// Maximum value from the class formula.
    pub maximum: i32,
}

impl Resource {
    /// A full pool.
    pub fn new(maximum: i32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Highest value `current` may reach.
    pub fn ceiling(&self) -> i32 {
        self.maximum
    }

    /// Fraction of the maximum remaining, for display (0.0 to 1.0).
    pub fn fraction(&self) -> f64 {
        fraction(self.current, self.maximum)
    }
}

fn non_negative<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Ok(i32::deserialize(deserializer)?.max(0))
}

/// `current / max(1, maximum)`, capped to `[0, 1]`.
pub fn fraction(current: i32, maximum: i32) -> f64 {
    (f64::from(current) / f64::from(maximum.max(1))).clamp(0.0, 1.0)
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.temporary > 0 {
            write!(f, "{}/{} (+{})", self.current, self.maximum, self.temporary)
        } else {
            write!(f, "{}/{}", self.current, self.maximum)
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.maximum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_ceiling_includes_temporary() {
        let mut h = Health::new(20);
        h.temporary = 5;
        assert_eq!(h.ceiling(), 25);
        assert_eq!(h.to_string(), "20/20 (+5)");
    }

    #[test]
    fn health_ceiling_saturates() {
        let mut h = Health::new(20);
        h.temporary = i32::MAX;
        assert_eq!(h.ceiling(), i32::MAX);
    }

    #[test]
    fn negative_temporary_does_not_lower_ceiling() {
        let mut h = Health::new(20);
        h.temporary = -7;
        assert_eq!(h.ceiling(), 20);
    }

    #[test]
    fn deserialize_clamps_temporary() {
        let h: Health =
            serde_json::from_str(r#"{"current":5,"maximum":20,"temporary":-3}"#).unwrap();
        assert_eq!(h.temporary, 0);
        assert_eq!(h.ceiling(), 20);
    }

    #[test]
    fn resource_ceiling_is_maximum() {
        let r = Resource::new(12);
        assert_eq!(r.ceiling(), 12);
        assert_eq!(r.to_string(), "12/12");
    }

    #[test]
    fn fraction_bounds() {
        assert!((fraction(5, 10) - 0.5).abs() < f64::EPSILON);
        assert!((fraction(15, 10) - 1.0).abs() < f64::EPSILON);
        assert!((fraction(3, 0) - 1.0).abs() < f64::EPSILON);
        assert!(fraction(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn health_fraction_ignores_temporary() {
        let h = Health {
            current: 10,
            maximum: 20,
            temporary: 5,
        };
        assert!((h.fraction() - 0.5).abs() < f64::EPSILON);
    }
}
