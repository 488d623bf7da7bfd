use std::path::Path;

use colored::Colorize;
use ntp_core::{CharacterRecord, ItemId};
use ntp_mechanics::sheet;
use tracing::info;

fn resolve(record: &CharacterRecord, needle: &str) -> Result<ItemId, String> {
    super::find_entry(&record.weapons, needle, |w| w.id, |w| w.name.as_str())
        .map(|w| w.id)
        .ok_or_else(|| format!("weapon not found: \"{needle}\""))
}

pub fn damage(path: &Path, needle: &str, seed: Option<u64>) -> Result<(), String> {
    let record = super::load_record(path)?;
    let id = resolve(&record, needle)?;
    let mut rng = super::roller(seed).make_source();

    let roll = sheet::roll_weapon_damage(&record, id, &mut rng).map_err(|e| e.to_string())?;
    let name = record.weapon(id).map(|w| w.name.as_str()).unwrap_or(needle);
    println!("  {}", name.bold());
    println!("  {roll}");
    Ok(())
}

pub fn ammo(path: &Path, needle: &str, delta: i64) -> Result<(), String> {
    let record = super::load_record(path)?;
    let id = resolve(&record, needle)?;

    let next = sheet::adjust_ammo(&record, id, delta).map_err(|e| e.to_string())?;
    let Some(weapon) = next.weapon(id) else {
        return Err(format!("weapon not found: \"{needle}\""));
    };
    let Some(ammo) = weapon.ammo else {
        println!("  {} uses no ammunition", weapon.name);
        return Ok(());
    };

    super::save_record(path, &next)?;
    info!(weapon = %weapon.name, delta, "ammo adjusted");
    println!("  {}: {ammo}", weapon.name.bold());
    Ok(())
}
