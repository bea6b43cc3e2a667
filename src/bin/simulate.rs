use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_m::bot::BotKind;
use connect_m::config::AppConfig;
use connect_m::simulation::Simulation;

/// Play bots against each other and report win and tie percentages.
#[derive(Parser)]
#[command(name = "simulate", about = "Simulate Connect-M games between bots")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-m.toml")]
    config: PathBuf,

    /// Number of games to play
    #[arg(short = 'n', long)]
    num_games: Option<usize>,

    /// Bot for player 1: random-bot or smart-bot
    #[arg(long)]
    player1: Option<BotKind>,

    /// Bot for player 2: random-bot or smart-bot
    #[arg(long)]
    player2: Option<BotKind>,

    /// Base seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads (1 = sequential, 0 = one per core)
    #[arg(long)]
    threads: Option<usize>,

    /// Swap which bot moves first on every other game
    #[arg(long)]
    alternate_first: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    let sim = &mut app_config.simulation;
    if let Some(n) = cli.num_games {
        sim.num_games = n;
    }
    if let Some(kind) = cli.player1 {
        sim.player1 = kind;
    }
    if let Some(kind) = cli.player2 {
        sim.player2 = kind;
    }
    if cli.seed.is_some() {
        sim.seed = cli.seed;
    }
    if let Some(threads) = cli.threads {
        sim.threads = threads;
    }
    if cli.alternate_first {
        sim.alternate_first = true;
    }
    app_config
        .validate_for_simulation()
        .context("invalid simulation settings")?;

    let simulation = Simulation::new(app_config.simulation.clone());
    let report = simulation
        .run(&app_config.board)
        .context("simulation failed")?;

    println!("{report}");
    Ok(())
}
