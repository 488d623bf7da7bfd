use colored::Colorize;
use ntp_mechanics::DiceFormula;

pub fn run(notation: &str, seed: Option<u64>) -> Result<(), String> {
    let formula = DiceFormula::parse(notation).map_err(|e| e.to_string())?;
    let mut rng = super::roller(seed).make_source();
    let roll = formula.evaluate(&mut rng);

    println!("  {roll}");
    println!("  {} {}", "total".bold(), roll.total.to_string().bold());
    Ok(())
}
