pub mod adjust;
pub mod check;
pub mod dice;
pub mod entry;
pub mod new;
pub mod roll;
pub mod set;
pub mod show;
pub mod slot;
pub mod weapon;
pub mod weight;

use std::path::Path;

use colored::Colorize;
use ntp_core::{CharacterRecord, ItemId, ValidationError};
use ntp_mechanics::RollerConfig;
use tracing::debug;

/// Read a character file.
fn load_record(path: &Path) -> Result<CharacterRecord, String> {
    debug!(path = %path.display(), "reading character");
    let json = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    CharacterRecord::from_json(&json)
        .map_err(|e| format!("invalid character file {}: {e}", path.display()))
}

/// Write a character file, replacing its contents.
fn save_record(path: &Path, record: &CharacterRecord) -> Result<(), String> {
    debug!(path = %path.display(), "writing character");
    let json = record
        .to_json()
        .map_err(|e| format!("cannot serialize character: {e}"))?;
    std::fs::write(path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))
}

/// Roller setup from the global `--seed` flag.
fn roller(seed: Option<u64>) -> RollerConfig {
    RollerConfig {
        seed,
        ..RollerConfig::default()
    }
}

/// Print a clamping warning, if any.
fn warn_clamped(warning: Option<ValidationError>) {
    if let Some(w) = warning {
        eprintln!("  {} {w}", "warning:".yellow());
    }
}

/// Resolve a collection entry by exact id, short id prefix, or name.
fn find_entry<'a, T>(
    entries: &'a [T],
    needle: &str,
    id: impl Fn(&T) -> ItemId,
    name: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let lower = needle.trim().to_lowercase();
    if lower.is_empty() {
        return None;
    }
    entries
        .iter()
        .find(|e| name(e).to_lowercase() == lower)
        .or_else(|| {
            entries
                .iter()
                .find(|e| id(e).0.to_string().starts_with(&lower))
        })
}
