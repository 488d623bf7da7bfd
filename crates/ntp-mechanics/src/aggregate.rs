//! Collection totals and clamped adjustments.

use std::collections::BTreeMap;

use ntp_core::{InventoryItem, Power};

/// `Σ weight × quantity`, unrounded.
pub fn total_weight(items: &[InventoryItem]) -> f64 {
    items
        .iter()
        .map(|item| item.weight * f64::from(item.quantity))
        .sum()
}

/// `max(0, min(current + delta, max))`.
pub fn clamp_ammo(current: u32, delta: i64, max: u32) -> u32 {
    let next = i64::from(current).saturating_add(delta);
    next.clamp(0, i64::from(max)) as u32
}

/// `clamp(current + delta, 0, ceiling)`. A negative ceiling is treated as 0.
pub fn clamp_resource(current: i32, delta: i32, ceiling: i32) -> i32 {
    let next = i64::from(current) + i64::from(delta);
    next.clamp(0, i64::from(ceiling.max(0))) as i32
}

/// Powers grouped by level, lowest level first, in insertion order within a
/// level.
pub fn powers_by_level(powers: &[Power]) -> BTreeMap<u8, Vec<&Power>> {
    let mut grouped: BTreeMap<u8, Vec<&Power>> = BTreeMap::new();
    for power in powers {
        grouped.entry(power.level).or_default().push(power);
    }
    grouped
}
