use std::path::Path;

use ntp_mechanics::aggregate::total_weight;

pub fn run(path: &Path) -> Result<(), String> {
    let record = super::load_record(path)?;
    println!("  {:.2}", total_weight(&record.inventory));
    Ok(())
}
