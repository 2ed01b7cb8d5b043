//! Command-line investigator generator.
//!
//! Generates one investigator and prints it as JSON:
//!
//! ```bash
//! cargo run -p investigator -- --mode pulp --seed 42 --pretty
//! ```
//!
//! Every flag can also be set through an `INVESTIGATOR_*` environment
//! variable or a `.env` file.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use investigator_core::{Catalog, Era, GameMode, GeneratorConfig, InvestigatorGenerator};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Classic rules: no archetype, skills capped at 90
    Classic,
    /// Pulp rules: archetype, core characteristic and talents
    Pulp,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Classic => GameMode::Classic,
            ModeArg::Pulp => GameMode::Pulp,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EraArg {
    Twenties,
    Modern,
}

impl From<EraArg> for Era {
    fn from(era: EraArg) -> Self {
        match era {
            EraArg::Twenties => Era::Twenties,
            EraArg::Modern => Era::Modern,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "investigator", version)]
#[command(about = "Generate a random investigator and print it as JSON")]
struct Args {
    /// Rules variant
    #[arg(long, value_enum, default_value_t = ModeArg::Classic, env = "INVESTIGATOR_MODE")]
    mode: ModeArg,

    /// Campaign era; filters era-specific skills
    #[arg(long, value_enum, default_value_t = EraArg::Modern, env = "INVESTIGATOR_ERA")]
    era: EraArg,

    /// Seed for a reproducible investigator (random when omitted)
    #[arg(long, env = "INVESTIGATOR_SEED")]
    seed: Option<u64>,

    /// Use this archetype instead of a random one (pulp only)
    #[arg(long, env = "INVESTIGATOR_ARCHETYPE")]
    archetype: Option<String>,

    /// Use this occupation instead of a random one
    #[arg(long, env = "INVESTIGATOR_OCCUPATION")]
    occupation: Option<String>,

    /// Load the catalog from a JSON file instead of the built-in data
    #[arg(long, value_name = "FILE", env = "INVESTIGATOR_CATALOG")]
    catalog: Option<PathBuf>,

    /// Give up on a point pool after this many draws that place nothing
    #[arg(long, env = "INVESTIGATOR_MAX_IDLE_DRAWS")]
    max_idle_draws: Option<u32>,

    /// Pretty-print the JSON output
    #[arg(long, env = "INVESTIGATOR_PRETTY")]
    pretty: bool,
}

impl Args {
    fn generator_config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::new(self.mode.into()).with_era(self.era.into());
        if let Some(name) = &self.archetype {
            config = config.with_archetype(name);
        }
        if let Some(name) = &self.occupation {
            config = config.with_occupation(name);
        }
        if let Some(draws) = self.max_idle_draws {
            config = config.with_max_idle_draws(draws);
        }
        config
    }
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let loaded;
    let catalog = match &args.catalog {
        Some(path) => {
            loaded = Catalog::load(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?;
            log::info!("Loaded catalog from {}", path.display());
            &loaded
        }
        None => Catalog::builtin(),
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Using seed {seed}");

    let generator = InvestigatorGenerator::new(catalog, args.generator_config());
    let investigator = generator
        .generate_seeded(seed)
        .context("investigator generation failed")?;

    let json = if args.pretty {
        investigator.to_json_pretty()?
    } else {
        investigator.to_json()?
    };
    println!("{json}");
    Ok(())
}
