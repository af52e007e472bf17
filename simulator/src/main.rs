use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{info, Level};
use wheelhouse_simulator::{Config, Simulation};

/// Seed a local population and spin the elimination wheel until nobody is
/// left alive.
#[derive(Parser)]
#[command(name = "wheelhouse-simulator")]
struct Args {
    /// YAML config file; the flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of participants to seed.
    #[arg(long)]
    participants: Option<usize>,
    /// Window size handed to every spin.
    #[arg(long)]
    page_size: Option<u32>,
    /// Seed for all randomness in the run.
    #[arg(long)]
    seed: Option<u64>,
    /// Hard cap on spin attempts.
    #[arg(long)]
    max_spins: Option<usize>,
    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("could not read config file {}", path.display()))?;
            serde_yaml::from_str(&raw).context("could not parse config file")?
        }
        None => Config::default(),
    };
    if let Some(participants) = args.participants {
        config.participants = participants;
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(max_spins) = args.max_spins {
        config.max_spins = max_spins;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }

    let level = Level::from_str(&config.log_level).context("invalid log level")?;
    tracing_subscriber::fmt().with_max_level(level).init();

    info!(
        participants = config.participants,
        page_size = config.page_size,
        seed = config.seed,
        "starting simulation"
    );
    let simulation = Simulation::new(config).await?;
    let tally = simulation.run().await;
    info!(
        spins = tally.spins,
        eliminations = tally.eliminations,
        self_eliminations = tally.self_eliminations,
        no_results = tally.no_results,
        "simulation finished"
    );
    Ok(())
}
