//! Interactive terminal front end for the Tamagotchi simulation.
//!
//! Loads configuration, asks for the pet's name and species, then runs
//! the turn loop on stdin/stdout until the pet dies or the player quits.
//!
//! # Startup Sequence
//!
//! 1. Parse command-line flags
//! 2. Load configuration from `tamagotchi.yaml` (defaults if absent)
//! 3. Initialize structured logging (tracing, to stderr)
//! 4. Prompt for any name or species not given as a flag
//! 5. Create the pet and run the turn loop
//! 6. Log the result

mod console;
mod error;
mod menu;
mod render;

use std::io;
use std::path::{Path, PathBuf};

use clap::Parser;
use tamagotchi_core::config::DEFAULT_CONFIG_FILE;
use tamagotchi_core::{Clock, GameConfig, GameSession, SystemClock, run};
use tamagotchi_pet::PetFactory;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::console::{ConsoleInput, ConsoleObserver, prompt};
use crate::error::CliError;

/// Raise a virtual pet in the terminal.
#[derive(Debug, Parser)]
#[command(name = "tamagotchi", version, about)]
struct Args {
    /// Pet name; prompted for when omitted.
    #[arg(long)]
    name: Option<String>,

    /// Pet species (e.g. Dog, Cat); prompted for when omitted.
    #[arg(long)]
    species: Option<String>,

    /// Path to the YAML configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the species is unknown,
/// or terminal I/O fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (config, from_file) = load_config(&args.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    if from_file {
        info!(path = %args.config.display(), "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }

    let factory = PetFactory::with_config(config.pet.clone());
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    let name = match args.name {
        Some(name) => name,
        None => prompt(&mut reader, &mut stdout, "Enter your pet's name: ")
            .map_err(CliError::from)?
            .unwrap_or_else(|| config.session.default_name.clone()),
    };
    let species = match args.species {
        Some(species) => species,
        None => {
            let question = format!(
                "Enter the type of pet ({}): ",
                factory.registered_species().join("/")
            );
            prompt(&mut reader, &mut stdout, &question)
                .map_err(CliError::from)?
                .unwrap_or_else(|| config.session.default_species.clone())
        }
    };

    let clock = SystemClock::new();
    let pet = factory
        .create_pet(&species, name, clock.now())
        .map_err(|err| {
            error!(%err, species = %species, "Could not create pet");
            CliError::from(err)
        })?;
    info!(pet_id = %pet.id(), pet = pet.name(), species = pet.species_tag(), "Pet created");

    let mut session = GameSession::new(pet);
    let mut input = ConsoleInput::new(reader, io::stdout());
    let mut observer = ConsoleObserver::new(stdout);

    let summary = run(&mut session, &clock, &mut input, &mut observer).map_err(CliError::from)?;
    observer.finish().map_err(CliError::from)?;

    info!(
        turns = summary.turns,
        end_reason = ?summary.end_reason,
        "Game over"
    );
    Ok(())
}

/// Load configuration from `path`, falling back to defaults when the file
/// does not exist. The flag reports whether a file was read.
fn load_config(path: &Path) -> Result<(GameConfig, bool), CliError> {
    if path.exists() {
        Ok((GameConfig::from_file(path)?, true))
    } else {
        let mut config = GameConfig::default();
        config.session.apply_overrides(|key| std::env::var(key).ok());
        Ok((config, false))
    }
}
