//! Dice pool construction and rolling.
//!
//! A check rolls one d20 per point of the governing attribute and keeps the
//! highest. Pools never roll zero dice: a size of 0 or less still rolls one.

use serde::{Deserialize, Serialize};

use super::{Die, MAX_DICE};
use super::roll::{DieResult, RollResult};
use crate::grade::{SuccessTier, grade_die};
use crate::rng::RandomSource;

/// A collection of dice to be rolled together.
#[derive(Debug, Clone, Default)]
pub struct DicePool {
    /// The dice in this pool.
    pub dice: Vec<Die>,
}

impl DicePool {
    /// Create an empty dice pool.
    pub fn new() -> Self {
        Self { dice: Vec::new() }
    }

    /// A pool of `size` dice of one type, between one and [`MAX_DICE`].
    pub fn sized(die: Die, size: i64) -> Self {
        let count = size.clamp(1, i64::from(MAX_DICE)) as u32;
        Self::new().add(die, count)
    }

    /// Add `count` dice of the given type. The pool never grows past
    /// [`MAX_DICE`].
    pub fn add(mut self, die: Die, count: u32) -> Self {
        let room = (MAX_DICE as usize).saturating_sub(self.dice.len());
        self.dice.extend(std::iter::repeat_n(die, (count as usize).min(room)));
        self
    }

    /// Returns how many dice are in the pool.
    pub fn count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the pool has no dice.
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Roll every die once, in order. Draws exactly `count()` values.
    pub fn roll<R: RandomSource + ?Sized>(&self, rng: &mut R) -> RollResult {
        let dice = self
            .dice
            .iter()
            .map(|&die| DieResult {
                die,
                value: rng.roll(die.sides()),
                kept: false,
            })
            .collect();
        RollResult { dice }
    }
}

/// The outcome of a keep-highest pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// Every die rolled, with the kept one marked.
    pub roll: RollResult,
    /// The kept (highest) value.
    pub kept: u32,
    /// Success tier of the kept value. `None` unless the pool rolled d20s.
    pub tier: Option<SuccessTier>,
}

impl CheckResult {
    /// Returns true if the kept die reached at least a basic success.
    pub fn succeeded(&self) -> bool {
        self.tier.is_some_and(SuccessTier::is_success)
    }
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self
            .roll
            .dice
            .iter()
            .map(|d| {
                if d.kept {
                    format!("*{}*", d.value)
                } else {
                    d.value.to_string()
                }
            })
            .collect();
        write!(f, "[{}] → {}", values.join(", "), self.kept)?;
        if let Some(tier) = self.tier {
            write!(f, " ({tier})")?;
        }
        Ok(())
    }
}

/// Roll `max(1, dice_count)` dice and keep the highest.
pub fn roll_pool<R: RandomSource + ?Sized>(dice_count: i64, die: Die, rng: &mut R) -> CheckResult {
    let mut roll = DicePool::sized(die, dice_count).roll(rng);
    roll.keep_highest();
    let kept = roll.highest();
    let tier = roll.kept().and_then(grade_die);
    CheckResult { roll, kept, tier }
}

/// Roll `max(1, quantity)` dice of one size with no keep rule (free roller).
pub fn roll_many<R: RandomSource + ?Sized>(quantity: i64, die: Die, rng: &mut R) -> RollResult {
    DicePool::sized(die, quantity).roll(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRolls;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_pool() {
        let pool = DicePool::new();
        assert_eq!(pool.count(), 0);
        assert!(pool.is_empty());
    }

    #[test]
    fn add_dice() {
        let pool = DicePool::new().add(Die::D20, 2).add(Die::D6, 3);
        assert_eq!(pool.count(), 5);
        assert!(!pool.is_empty());
    }

    #[test]
    fn sized_never_empty() {
        assert_eq!(DicePool::sized(Die::D20, 0).count(), 1);
        assert_eq!(DicePool::sized(Die::D20, -4).count(), 1);
        assert_eq!(DicePool::sized(Die::D20, 3).count(), 3);
    }

    #[test]
    fn sized_is_capped() {
        assert_eq!(DicePool::sized(Die::D20, 5_000_000_000).count(), MAX_DICE as usize);
        assert_eq!(DicePool::sized(Die::D6, i64::MAX).count(), MAX_DICE as usize);
    }

    #[test]
    fn add_stops_at_cap() {
        let pool = DicePool::new()
            .add(Die::D6, MAX_DICE - 1)
            .add(Die::D8, u32::MAX);
        assert_eq!(pool.count(), MAX_DICE as usize);
        assert_eq!(pool.dice.last(), Some(&Die::D8));
    }

    #[test]
    fn roll_many_over_cap_rolls_cap() {
        let mut rolls = ScriptedRolls::new([]);
        let result = roll_many(5_000_000_000, Die::D20, &mut rolls);
        assert_eq!(result.count(), MAX_DICE as usize);
        assert_eq!(rolls.draws(), MAX_DICE as usize);
    }

    #[test]
    fn roll_produces_valid_values() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = DicePool::new().add(Die::D6, 10);
        let result = pool.roll(&mut rng);
        assert_eq!(result.dice.len(), 10);
        for die_result in &result.dice {
            assert!((1..=6).contains(&die_result.value));
        }
    }

    #[test]
    fn roll_deterministic_with_seed() {
        let pool = DicePool::new().add(Die::D20, 3);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        assert_eq!(pool.roll(&mut rng1), pool.roll(&mut rng2));
    }

    #[test]
    fn zero_pool_draws_one_die() {
        let mut rolls = ScriptedRolls::new([13, 20]);
        let result = roll_pool(0, Die::D20, &mut rolls);
        assert_eq!(rolls.draws(), 1);
        assert_eq!(result.roll.count(), 1);
        assert_eq!(result.kept, 13);
        assert_eq!(result.tier, Some(SuccessTier::Basic));
    }

    #[test]
    fn pool_keeps_highest_and_grades_it() {
        let mut rolls = ScriptedRolls::new([4, 18, 11]);
        let result = roll_pool(3, Die::D20, &mut rolls);
        assert_eq!(rolls.draws(), 3);
        assert_eq!(result.kept, 18);
        assert_eq!(result.tier, Some(SuccessTier::High));
        assert!(result.roll.dice[1].kept);
        assert!(result.succeeded());
        assert_eq!(result.to_string(), "[4, *18*, 11] → 18 (High)");
    }

    #[test]
    fn non_d20_pool_is_not_graded() {
        let mut rolls = ScriptedRolls::new([5, 2]);
        let result = roll_pool(2, Die::D6, &mut rolls);
        assert_eq!(result.kept, 5);
        assert_eq!(result.tier, None);
        assert!(!result.succeeded());
    }

    #[test]
    fn roll_many_counts() {
        let mut rolls = ScriptedRolls::new([1, 2, 3, 4]);
        let result = roll_many(4, Die::D8, &mut rolls);
        assert_eq!(result.count(), 4);
        assert_eq!(result.total(), 10);
        assert!(result.kept().is_none());
    }
}
