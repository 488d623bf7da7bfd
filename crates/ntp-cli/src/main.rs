//! CLI frontend for the NTP character sheet and dice roller.

mod commands;
mod store;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "ntp",
    about = "NTP: character sheets and dice for a horror tabletop RPG",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Save slot store file
    #[arg(long, global = true, default_value = "saved_characters.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new character file
    New {
        /// Character name
        name: String,

        /// Starting class: fighter, practitioner, occultist
        #[arg(short, long)]
        class: Option<String>,

        /// Output file (default: `<name>.json`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show a character sheet
    Show {
        /// Character file
        file: PathBuf,
    },

    /// Change an attribute, the class, or terror exposure
    Set {
        /// Character file
        file: PathBuf,

        #[command(subcommand)]
        field: SetField,
    },

    /// Spend or restore health, sanity, or effort
    Adjust {
        /// Character file
        file: PathBuf,

        /// Pool: health, sanity, effort
        pool: String,

        /// Amount to add (negative to spend)
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },

    /// Roll damage notation such as 2d6+3
    Roll {
        /// Dice notation
        notation: String,
    },

    /// Roll free dice; d20 results are graded
    Dice {
        /// Die size (4, 6, 8, 10, 12, 20)
        sides: String,

        /// Number of dice per batch (capped at 1000)
        #[arg(short = 'n', long, default_value = "1")]
        quantity: i64,

        /// Number of batches to roll (1-100)
        #[arg(
            short,
            long,
            default_value = "1",
            value_parser = clap::value_parser!(u32).range(1..=100)
        )]
        times: u32,
    },

    /// Roll a skill or attribute check
    Check {
        /// Character file
        file: PathBuf,

        /// Skill or attribute name
        target: String,
    },

    /// Roll a sanity check (a single d20)
    Sanity,

    /// Total inventory weight
    Weight {
        /// Character file
        file: PathBuf,
    },

    /// Manage inventory items
    Item {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Manage weapons
    Weapon {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Manage powers
    Power {
        #[command(subcommand)]
        action: EntryAction,
    },

    /// Roll a weapon's damage
    Damage {
        /// Character file
        file: PathBuf,

        /// Weapon name or id
        weapon: String,
    },

    /// Load or spend a weapon's ammunition
    Ammo {
        /// Character file
        file: PathBuf,

        /// Weapon name or id
        weapon: String,

        /// Rounds to add (negative to spend)
        #[arg(allow_hyphen_values = true)]
        delta: i64,
    },

    /// Named save slots
    Slot {
        #[command(subcommand)]
        action: SlotAction,
    },
}

#[derive(Subcommand)]
enum SetField {
    /// Set an attribute score (1-10)
    Attribute {
        /// Attribute name or abbreviation
        attribute: String,

        /// New score
        #[arg(allow_hyphen_values = true)]
        value: i32,
    },

    /// Set the class
    Class {
        /// fighter, practitioner, occultist, or none
        class: String,
    },

    /// Set terror exposure percent (5-100, steps of 5)
    Exposure {
        /// New percentage
        #[arg(allow_hyphen_values = true)]
        percent: i32,
    },
}

#[derive(Subcommand)]
enum EntryAction {
    /// Add an entry
    Add {
        /// Character file
        file: PathBuf,

        /// Entry name
        name: String,

        /// Weapon damage notation
        #[arg(short, long)]
        damage: Option<String>,

        /// Item quantity
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Item weight per unit
        #[arg(short, long, default_value = "0")]
        weight: f64,

        /// Weapon magazine size
        #[arg(long)]
        ammo: Option<u32>,

        /// Power level (0-5)
        #[arg(short, long, default_value = "0")]
        level: u8,
    },

    /// Remove an entry by name or id
    Remove {
        /// Character file
        file: PathBuf,

        /// Entry name or id
        entry: String,
    },
}

#[derive(Subcommand)]
enum SlotAction {
    /// Save a character into a slot, replacing any slot of the same name
    Save {
        /// Character file
        file: PathBuf,

        /// Slot name
        name: String,
    },

    /// Write a slot's character to a file
    Load {
        /// Slot name
        name: String,

        /// Output file (default: `<slot>.json`)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List saved slots
    List,

    /// Delete a slot
    Delete {
        /// Slot name
        name: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("NTP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let seed = cli.seed;

    let result = match cli.command {
        Commands::New {
            name,
            class,
            output,
        } => commands::new::run(&name, class.as_deref(), output.as_deref()),
        Commands::Show { file } => commands::show::run(&file),
        Commands::Set { file, field } => match field {
            SetField::Attribute { attribute, value } => {
                commands::set::attribute(&file, &attribute, value)
            }
            SetField::Class { class } => commands::set::class(&file, &class),
            SetField::Exposure { percent } => commands::set::exposure(&file, percent),
        },
        Commands::Adjust { file, pool, delta } => commands::adjust::run(&file, &pool, delta),
        Commands::Roll { notation } => commands::roll::run(&notation, seed),
        Commands::Dice {
            sides,
            quantity,
            times,
        } => commands::dice::run(&sides, quantity, times, seed),
        Commands::Check { file, target } => commands::check::run(&file, &target, seed),
        Commands::Sanity => commands::check::sanity(seed),
        Commands::Weight { file } => commands::weight::run(&file),
        Commands::Item { action } => run_entry(commands::entry::Kind::Item, action),
        Commands::Weapon { action } => run_entry(commands::entry::Kind::Weapon, action),
        Commands::Power { action } => run_entry(commands::entry::Kind::Power, action),
        Commands::Damage { file, weapon } => commands::weapon::damage(&file, &weapon, seed),
        Commands::Ammo {
            file,
            weapon,
            delta,
        } => commands::weapon::ammo(&file, &weapon, delta),
        Commands::Slot { action } => match action {
            SlotAction::Save { file, name } => commands::slot::save(&cli.store, &file, &name),
            SlotAction::Load { name, output } => {
                commands::slot::load(&cli.store, &name, output.as_deref())
            }
            SlotAction::List => commands::slot::list(&cli.store),
            SlotAction::Delete { name } => commands::slot::delete(&cli.store, &name),
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run_entry(kind: commands::entry::Kind, action: EntryAction) -> Result<(), String> {
    match action {
        EntryAction::Add {
            file,
            name,
            damage,
            quantity,
            weight,
            ammo,
            level,
        } => {
            let entry = commands::entry::NewEntry {
                name,
                damage,
                quantity,
                weight,
                ammo,
                level,
            };
            commands::entry::add(&file, kind, entry)
        }
        EntryAction::Remove { file, entry } => commands::entry::remove(&file, kind, &entry),
    }
}
