use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use othello_hotseat::connectors::{TerminalConnector, TerminalGuard, TextConnector};
use othello_hotseat::{logging, Session, SessionConfig};
use othello_rules::Outcome;

/// Play Othello with a friend in one terminal.
#[derive(Parser)]
#[command(name = "othello-hotseat", version, about)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "othello.toml")]
    config: PathBuf,

    /// Play over plain lines of text instead of the full-screen board
    #[arg(long)]
    text: bool,

    /// Override the frame rate
    #[arg(long)]
    fps: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_file.as_deref(), cli.text)?;

    let mut config = SessionConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(fps) = cli.fps {
        config.fps = fps;
    }
    config.validate().context("invalid settings")?;

    let outcome = if cli.text {
        play_text(config)?
    } else {
        play_terminal(config)?
    };

    match outcome {
        Some(outcome) => info!(%outcome, "session finished"),
        None => info!("session abandoned"),
    }
    Ok(())
}

fn play_text(config: SessionConfig) -> Result<Option<Outcome>> {
    let mut session = Session::new(TextConnector::stdio(), config);
    session.run().context("running text session")
}

fn play_terminal(config: SessionConfig) -> Result<Option<Outcome>> {
    // Dropping the guard on any early return puts the terminal back.
    let stdout = io::stdout();
    let mut guard = TerminalGuard::enter(stdout).context("entering raw mode")?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend).context("creating terminal")?;

    let mut session = Session::new(TerminalConnector::new(terminal, &config), config);
    let outcome = session.run().context("running terminal session")?;
    guard.restore().context("restoring terminal")?;

    if let Some(outcome) = outcome {
        println!("Winner: {}", outcome);
    }
    Ok(outcome)
}
