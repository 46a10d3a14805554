//! Terminal Pong
//!
//! W/S move the left paddle, Up/Down the right one, Q quits.

mod config;
mod input;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{Clock, Session, SystemClock};
use input::{Keyboard, HOLD_TIMEOUT};
use ratatui::backend::CrosstermBackend;
use std::path::{Path, PathBuf};
use terminal::{restore_terminal, CanvasSurface, TerminalGuard};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pong", version, about = "Two-paddle Pong in the terminal")]
struct Cli {
    /// TOML file overriding arena settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target frame rate
    #[arg(long)]
    fps: Option<u32>,

    /// Where to write logs (stdout belongs to the game)
    #[arg(long, default_value = "pong.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = config::load(cli.config.as_deref(), cli.fps)?;

    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let guard = TerminalGuard::enter().context("Failed to initialize terminal")?;
    let mut surface = CanvasSurface::new(CrosstermBackend::new(std::io::stdout()), &config)
        .context("Failed to create terminal canvas")?;
    if !guard.reports_release() {
        warn!(
            hold_timeout_ms = HOLD_TIMEOUT.as_millis() as u64,
            "Terminal does not report key releases, falling back to key repeat"
        );
    }
    let mut keyboard = Keyboard::new(guard.reports_release());

    let clock = SystemClock::new();
    let mut session = Session::new(config, clock.now_ms());
    let result = session.run(&mut keyboard, &mut surface, &clock);

    drop(surface);
    drop(guard);

    match result {
        Ok(reason) => {
            info!(?reason, frames = session.frames(), "Exiting");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Session aborted");
            Err(e.into())
        }
    }
}
