use std::path::Path;

use colored::Colorize;
use ntp_core::{Attribute, Skill};
use ntp_mechanics::{CheckResult, attribute_check, sanity_check, skill_check};

pub fn run(path: &Path, target: &str, seed: Option<u64>) -> Result<(), String> {
    let record = super::load_record(path)?;
    let mut rng = super::roller(seed).make_source();

    let (label, attribute, result) = if let Some(skill) = Skill::parse(target) {
        let attribute = record.skills.attribute_for(skill);
        (
            skill.to_string(),
            attribute,
            skill_check(&record, skill, &mut rng),
        )
    } else if let Some(attribute) = Attribute::parse(target) {
        (
            attribute.abbreviation().to_string(),
            attribute,
            attribute_check(&record, attribute, &mut rng),
        )
    } else {
        return Err(format!("unknown skill or attribute: \"{target}\""));
    };

    println!(
        "  {} {}",
        label.bold(),
        format!(
            "({} {}d20)",
            attribute.abbreviation(),
            record.attributes.get(attribute)
        )
        .dimmed()
    );
    print_result(&result);
    Ok(())
}

pub fn sanity(seed: Option<u64>) -> Result<(), String> {
    let mut rng = super::roller(seed).make_source();
    println!("  {}", "Sanity check".bold());
    print_result(&sanity_check(&mut rng));
    Ok(())
}

fn print_result(result: &CheckResult) {
    let line = result.to_string();
    if result.succeeded() {
        println!("  {}", line.green());
    } else {
        println!("  {}", line.red());
    }
}
