use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ntp_core::{CharacterRecord, Skill};
use ntp_mechanics::aggregate::{powers_by_level, total_weight};

pub fn run(path: &Path) -> Result<(), String> {
    let record = super::load_record(path)?;

    print_identity(&record);
    print_attributes(&record);
    print_resources(&record);
    print_skills(&record);
    print_weapons(&record);
    print_inventory(&record);
    print_powers(&record);

    if !record.notes.is_empty() {
        println!();
        for line in record.notes.lines() {
            println!("  {}", line.trim());
        }
    }

    Ok(())
}

fn print_identity(record: &CharacterRecord) {
    println!("  {} [{}]", record.name.bold(), record.class.to_string().dimmed());
    println!();
    println!("  level:      {}", record.level);
    println!("  experience: {}", record.experience);
    println!("  exposure:   {} (tier {})", record.exposure, record.exposure.tier());
    if !record.race.is_empty() {
        println!("  race:       {}", record.race);
    }
    if !record.background.is_empty() {
        println!("  background: {}", record.background);
    }
    if !record.alignment.is_empty() {
        println!("  alignment:  {}", record.alignment);
    }
    println!();
}

fn print_attributes(record: &CharacterRecord) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Attribute", "Score", "Save"]);
    for (attribute, score) in record.attributes.iter() {
        let save = if record.saving_throws.contains(&attribute) {
            "●"
        } else {
            ""
        };
        table.add_row(vec![
            attribute.abbreviation().to_string(),
            score.to_string(),
            save.to_string(),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_resources(record: &CharacterRecord) {
    println!("  health:     {} {}", record.health, bar(record.health.fraction()));
    println!("  sanity:     {} {}", record.sanity, bar(record.sanity.fraction()));
    println!("  effort:     {} {}", record.effort, bar(record.effort.fraction()));
    println!("  defense:    {}", record.defense);
    println!("  initiative: {:+}", record.initiative);
    println!("  speed:      {}", record.speed);
    println!();
}

/// Ten-cell fill bar.
fn bar(fraction: f64) -> String {
    let filled = (fraction * 10.0).round().clamp(0.0, 10.0) as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}

fn print_skills(record: &CharacterRecord) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Skill", "Attr", "Pool", "Trained", "Bonus"]);
    for skill in Skill::ALL {
        let proficiency = record.skills.get(skill);
        let attribute = record.skills.attribute_for(skill);
        table.add_row(vec![
            skill.to_string(),
            attribute.abbreviation().to_string(),
            format!("{}d20", record.attributes.get(attribute)),
            if proficiency.trained { "yes" } else { "" }.to_string(),
            if proficiency.bonus == 0 {
                String::new()
            } else {
                format!("{:+}", proficiency.bonus)
            },
        ]);
    }
    println!("{table}");
}

fn print_weapons(record: &CharacterRecord) {
    if record.weapons.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Weapon", "Damage", "Ammo"]);
    for weapon in &record.weapons {
        table.add_row(vec![
            weapon.id.to_string(),
            weapon.name.clone(),
            weapon.damage.clone(),
            weapon
                .ammo
                .map(|a| a.to_string())
                .unwrap_or_else(|| "—".to_string()),
        ]);
    }
    println!();
    println!("{table}");
}

fn print_inventory(record: &CharacterRecord) {
    if record.inventory.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Item", "Qty", "Weight"]);
    for item in &record.inventory {
        table.add_row(vec![
            item.id.to_string(),
            item.name.clone(),
            item.quantity.to_string(),
            format!("{:.2}", item.weight),
        ]);
    }
    println!();
    println!("{table}");
    println!("  total weight: {:.2}", total_weight(&record.inventory));
}

fn print_powers(record: &CharacterRecord) {
    if record.powers.is_empty() {
        return;
    }
    println!();
    for (level, powers) in powers_by_level(&record.powers) {
        let names: Vec<&str> = powers.iter().map(|p| p.name.as_str()).collect();
        println!("  level {level}: {}", names.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_fills_proportionally() {
        assert_eq!(bar(0.0), "[----------]");
        assert_eq!(bar(0.5), "[#####-----]");
        assert_eq!(bar(1.0), "[##########]");
    }
}
