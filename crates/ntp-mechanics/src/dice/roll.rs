//! Dice roll results and aggregation.

use serde::{Deserialize, Serialize};

use super::Die;

/// The result of rolling a single die.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieResult {
    /// The type of die that was rolled.
    pub die: Die,
    /// The value rolled (1 to die.sides()).
    pub value: u32,
    /// Whether this die is the one kept for a keep-highest check.
    #[serde(default)]
    pub kept: bool,
}

/// The result of rolling a batch of dice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Individual die results, in roll order.
    pub dice: Vec<DieResult>,
}

impl RollResult {
    /// Sum of all die values.
    pub fn total(&self) -> u64 {
        self.dice.iter().map(|d| u64::from(d.value)).sum()
    }

    /// The highest single die value, or 0 if empty.
    pub fn highest(&self) -> u32 {
        self.dice.iter().map(|d| d.value).max().unwrap_or(0)
    }

    /// The lowest single die value, or 0 if empty.
    pub fn lowest(&self) -> u32 {
        self.dice.iter().map(|d| d.value).min().unwrap_or(0)
    }

    /// The die marked as kept, if any.
    pub fn kept(&self) -> Option<&DieResult> {
        self.dice.iter().find(|d| d.kept)
    }

    /// Mark the first die holding the highest value as kept, clearing any
    /// previous mark.
    pub fn keep_highest(&mut self) {
        let highest = self.highest();
        let mut marked = false;
        for die in &mut self.dice {
            die.kept = !marked && die.value == highest;
            marked |= die.kept;
        }
    }

    /// Number of dice in the result.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if no dice were rolled.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.dice.iter().map(|d| d.value.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_result(die: Die, values: &[u32]) -> RollResult {
        RollResult {
            dice: values
                .iter()
                .map(|&value| DieResult {
                    die,
                    value,
                    kept: false,
                })
                .collect(),
        }
    }

    #[test]
    fn total() {
        let r = make_result(Die::D20, &[15, 8]);
        assert_eq!(r.total(), 23);
    }

    #[test]
    fn highest_and_lowest() {
        let r = make_result(Die::D6, &[3, 6, 1]);
        assert_eq!(r.highest(), 6);
        assert_eq!(r.lowest(), 1);
    }

    #[test]
    fn empty_result() {
        let r = RollResult::default();
        assert_eq!(r.total(), 0);
        assert_eq!(r.highest(), 0);
        assert_eq!(r.lowest(), 0);
        assert!(r.is_empty());
        assert!(r.kept().is_none());
    }

    #[test]
    fn keep_highest_marks_exactly_one() {
        let mut r = make_result(Die::D20, &[7, 16, 3, 16]);
        r.keep_highest();
        assert_eq!(r.dice.iter().filter(|d| d.kept).count(), 1);
        assert_eq!(r.kept().map(|d| d.value), Some(16));
        assert!(r.dice[1].kept);
    }

    #[test]
    fn keep_highest_resets_previous_mark() {
        let mut r = make_result(Die::D20, &[7, 16]);
        r.dice[0].kept = true;
        r.keep_highest();
        assert!(!r.dice[0].kept);
        assert!(r.dice[1].kept);
    }

    #[test]
    fn display() {
        let r = make_result(Die::D6, &[3, 5]);
        assert_eq!(r.to_string(), "[3, 5] = 8");
    }
}
