use std::path::{Path, PathBuf};

use chrono::Utc;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tracing::info;

use crate::store::SlotStore;

pub fn save(store_path: &Path, file: &Path, name: &str) -> Result<(), String> {
    let name = slot_name(name)?;
    let record = super::load_record(file)?;
    let mut store = SlotStore::load(store_path)?;

    let replaced = store.get(name).is_some();
    store.put(name, record, Utc::now());
    store.save(store_path)?;
    info!(slot = name, replaced, "slot saved");

    let verb = if replaced { "Replaced" } else { "Saved" };
    println!("  {} slot {}", verb.green().bold(), name.bold());
    Ok(())
}

pub fn load(store_path: &Path, name: &str, output: Option<&Path>) -> Result<(), String> {
    let name = slot_name(name)?;
    let store = SlotStore::load(store_path)?;
    let slot = store
        .get(name)
        .ok_or_else(|| format!("slot not found: \"{name}\""))?;

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format!("{name}.json")));
    super::save_record(&path, &slot.record)?;

    println!(
        "  {} {} from slot {}",
        "Loaded".green().bold(),
        slot.record.name.bold(),
        name
    );
    println!("  {}", path.display());
    Ok(())
}

pub fn list(store_path: &Path) -> Result<(), String> {
    let store = SlotStore::load(store_path)?;
    if store.slots.is_empty() {
        println!("  No saved slots.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Slot", "Character", "Class", "Saved"]);
    for slot in &store.slots {
        table.add_row(vec![
            slot.name.clone(),
            slot.record.name.clone(),
            slot.record.class.to_string(),
            slot.saved_at.format("%Y-%m-%d %H:%M").to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} slots", store.slots.len());
    Ok(())
}

pub fn delete(store_path: &Path, name: &str) -> Result<(), String> {
    let name = slot_name(name)?;
    let mut store = SlotStore::load(store_path)?;
    if !store.remove(name) {
        return Err(format!("slot not found: \"{name}\""));
    }
    store.save(store_path)?;
    info!(slot = name, "slot deleted");
    println!("  {} slot {}", "Deleted".green().bold(), name.bold());
    Ok(())
}

fn slot_name(name: &str) -> Result<&str, String> {
    let name = name.trim();
    if name.is_empty() {
        Err("slot name cannot be empty".into())
    } else {
        Ok(name)
    }
}
