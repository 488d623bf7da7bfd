use std::path::Path;

use colored::Colorize;
use ntp_core::{Ammo, InventoryItem, Power, PowerKind, Weapon};
use tracing::info;

/// Which collection on the sheet an entry command targets.
#[derive(Debug, Clone, Copy)]
pub enum Kind {
    Item,
    Weapon,
    Power,
}

impl Kind {
    fn label(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Weapon => "weapon",
            Self::Power => "power",
        }
    }
}

/// Fields gathered from `add` flags. Each kind reads the ones it needs.
pub struct NewEntry {
    pub name: String,
    pub damage: Option<String>,
    pub quantity: u32,
    pub weight: f64,
    pub ammo: Option<u32>,
    pub level: u8,
}

pub fn add(path: &Path, kind: Kind, entry: NewEntry) -> Result<(), String> {
    let mut record = super::load_record(path)?;

    let id = match kind {
        Kind::Item => {
            if entry.weight < 0.0 {
                return Err("weight cannot be negative".into());
            }
            record.add_item(InventoryItem::new(entry.name.trim(), entry.quantity, entry.weight))
        }
        Kind::Weapon => {
            let damage = entry
                .damage
                .ok_or("weapons need a damage notation (--damage 1d8)")?;
            let mut weapon = Weapon::new(entry.name.trim(), damage);
            if let Some(max) = entry.ammo {
                weapon = weapon.with_ammo(Ammo::full(max));
            }
            record.add_weapon(weapon)
        }
        Kind::Power => {
            let power = Power::new(entry.name.trim(), entry.level, PowerKind::default());
            record.add_power(power)
        }
    }
    .map_err(|e| e.to_string())?;

    super::save_record(path, &record)?;
    info!(kind = kind.label(), %id, "entry added");
    println!(
        "  {} {} {} [{}]",
        "Added".green().bold(),
        kind.label(),
        entry.name.trim().bold(),
        id.to_string().dimmed()
    );
    Ok(())
}

pub fn remove(path: &Path, kind: Kind, needle: &str) -> Result<(), String> {
    let mut record = super::load_record(path)?;

    let not_found = || format!("{} not found: \"{needle}\"", kind.label());
    let name = match kind {
        Kind::Item => {
            let id = super::find_entry(&record.inventory, needle, |i| i.id, |i| i.name.as_str())
                .map(|i| i.id)
                .ok_or_else(not_found)?;
            record.remove_item(id).map(|i| i.name)
        }
        Kind::Weapon => {
            let id = super::find_entry(&record.weapons, needle, |w| w.id, |w| w.name.as_str())
                .map(|w| w.id)
                .ok_or_else(not_found)?;
            record.remove_weapon(id).map(|w| w.name)
        }
        Kind::Power => {
            let id = super::find_entry(&record.powers, needle, |p| p.id, |p| p.name.as_str())
                .map(|p| p.id)
                .ok_or_else(not_found)?;
            record.remove_power(id).map(|p| p.name)
        }
    }
    .map_err(|e| e.to_string())?;

    super::save_record(path, &record)?;
    info!(kind = kind.label(), name = %name, "entry removed");
    println!("  {} {} {}", "Removed".green().bold(), kind.label(), name.bold());
    Ok(())
}
