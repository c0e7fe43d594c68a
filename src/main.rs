use anyhow::{Context, Result};
use block_snake::game::GameConfig;
use block_snake::modes::HumanMode;
use block_snake::render::TerminalSession;
use clap::Parser;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "block_snake")]
#[command(version, about = "Classic snake in the terminal")]
struct Cli {
    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write a game log to this file (no logging when omitted)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The terminal belongs to the UI, so logs only ever go to a file
    if let Some(path) = &cli.log_file {
        let log_file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(cli.log_level, Config::default(), log_file)
            .context("Failed to initialize logger")?;
    }

    let config = GameConfig {
        seed: cli.seed,
        ..Default::default()
    };
    info!("starting with {:?}", config);

    let mut session = TerminalSession::new()?;
    let mut human_mode = HumanMode::new(config);
    let outcome = human_mode.run(&mut session).await;
    session.restore()?;

    let outcome = outcome?;
    info!("session ended: {:?}", outcome);
    if let Some(message) = outcome.exit_message() {
        println!("{}", message);
    }

    Ok(())
}
