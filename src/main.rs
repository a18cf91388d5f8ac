//! Terminal runner (default binary).

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use blockfall::app::App;
use blockfall::config::{Args, DriverConfig};
use blockfall::term::TerminalRenderer;

fn main() -> Result<()> {
    let config = DriverConfig::try_from(Args::parse())?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = App::new(&config).run(&mut term);

    // Always try to restore terminal state.
    let restored = term.exit();
    result.and(restored)
}

/// The terminal belongs to the game, so logs only go to `--log-file`.
fn init_logging(config: &DriverConfig) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(LevelFilter::from_level(config.log_level))
        .try_init()?;
    Ok(())
}
