use std::path::Path;

use colored::Colorize;
use ntp_core::{Attribute, CharacterClass, CharacterRecord};
use ntp_mechanics::sheet;
use tracing::info;

pub fn attribute(path: &Path, name: &str, value: i32) -> Result<(), String> {
    let attribute =
        Attribute::parse(name).ok_or_else(|| format!("unknown attribute: \"{name}\""))?;
    let record = super::load_record(path)?;

    let (next, warning) = sheet::set_attribute(&record, attribute, value);
    super::warn_clamped(warning);
    super::save_record(path, &next)?;
    info!(%attribute, score = next.attributes.get(attribute), "attribute set");

    println!(
        "  {} {} = {}",
        "Set".green().bold(),
        attribute.abbreviation(),
        next.attributes.get(attribute)
    );
    print_maxima(&next);
    Ok(())
}

pub fn class(path: &Path, name: &str) -> Result<(), String> {
    let class = CharacterClass::parse(name).ok_or_else(|| format!("unknown class: \"{name}\""))?;
    let record = super::load_record(path)?;

    let next = sheet::set_class(&record, class);
    super::save_record(path, &next)?;
    info!(%class, "class set");

    println!("  {} class = {}", "Set".green().bold(), next.class);
    print_maxima(&next);
    Ok(())
}

pub fn exposure(path: &Path, percent: i32) -> Result<(), String> {
    let record = super::load_record(path)?;

    let (next, warning) = sheet::set_exposure(&record, percent);
    super::warn_clamped(warning);
    super::save_record(path, &next)?;
    info!(exposure = next.exposure.percent(), "exposure set");

    println!(
        "  {} exposure = {} (tier {})",
        "Set".green().bold(),
        next.exposure,
        next.exposure.tier()
    );
    print_maxima(&next);
    Ok(())
}

fn print_maxima(record: &CharacterRecord) {
    println!(
        "  health {}  sanity {}  effort {}  defense {}",
        record.health, record.sanity, record.effort, record.defense
    );
}
