use std::path::{Path, PathBuf};

use colored::Colorize;
use ntp_core::{CharacterClass, CharacterRecord};
use ntp_mechanics::sheet;
use tracing::info;

pub fn run(name: &str, class: Option<&str>, output: Option<&Path>) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("character name cannot be empty".into());
    }

    let class = match class {
        Some(c) => CharacterClass::parse(c).ok_or_else(|| format!("unknown class: \"{c}\""))?,
        None => CharacterClass::Unset,
    };

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_path(name));
    if path.exists() {
        return Err(format!("{} already exists", path.display()));
    }

    let record = sheet::set_class(&CharacterRecord::new(name), class);
    super::save_record(&path, &record)?;
    info!(name, class = %record.class, "created character");

    println!(
        "  {} {} ({})",
        "Created".green().bold(),
        record.name.bold(),
        record.class
    );
    println!("  {}", path.display());
    Ok(())
}

/// `Ada Quill` -> `ada_quill.json`.
fn default_path(name: &str) -> PathBuf {
    let stem: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    PathBuf::from(format!("{stem}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_is_snake_case() {
        assert_eq!(default_path("Ada Quill"), PathBuf::from("ada_quill.json"));
        assert_eq!(default_path("Rui"), PathBuf::from("rui.json"));
    }
}
