use colored::Colorize;
use ntp_mechanics::dice::roll_many;
use ntp_mechanics::grade::grade_die;
use ntp_mechanics::{Die, RollResult};

pub fn run(sides: &str, quantity: i64, times: u32, seed: Option<u64>) -> Result<(), String> {
    let die = Die::from_str_tag(sides)
        .filter(|d| Die::STANDARD.contains(d))
        .ok_or_else(|| {
            format!("unsupported die: \"{sides}\" (expected d4, d6, d8, d10, d12, d20)")
        })?;

    let config = super::roller(seed);
    let mut rng = config.make_source();
    let mut history = config.make_history();

    for _ in 0..times.max(1) {
        history.push(roll_many(quantity, die, &mut rng));
    }

    let latest_first: Vec<&RollResult> = history.iter().collect();
    if let Some((latest, earlier)) = latest_first.split_first() {
        print_batch(latest, die);
        if !earlier.is_empty() {
            println!();
            println!("  {}", "earlier".dimmed());
            for batch in earlier {
                println!("  {}", batch.to_string().dimmed());
            }
        }
    }
    Ok(())
}

fn print_batch(batch: &RollResult, die: Die) {
    println!("  {} {}{}", batch.count(), die, ":".dimmed());
    for result in &batch.dice {
        match grade_die(result) {
            Some(tier) if tier.is_success() => {
                println!("    {:>3}  {}", result.value, tier.to_string().green())
            }
            Some(tier) => println!("    {:>3}  {}", result.value, tier.to_string().red()),
            None => println!("    {:>3}", result.value),
        }
    }
    println!("  {} {}", "total".bold(), batch.total().to_string().bold());
}
