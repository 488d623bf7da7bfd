use std::path::Path;

use ntp_mechanics::sheet::{self, Pool};
use tracing::info;

pub fn run(path: &Path, pool: &str, delta: i32) -> Result<(), String> {
    let pool = Pool::parse(pool)
        .ok_or_else(|| format!("unknown pool: \"{pool}\" (expected health, sanity, effort)"))?;
    let record = super::load_record(path)?;

    let next = sheet::adjust(&record, pool, delta);
    super::save_record(path, &next)?;
    info!(%pool, delta, "resource adjusted");

    let shown = match pool {
        Pool::Health => next.health.to_string(),
        Pool::Sanity => next.sanity.to_string(),
        Pool::Effort => next.effort.to_string(),
    };
    println!("  {pool}: {shown}");
    Ok(())
}
