//! Command-line configuration for the terminal driver.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use tracing::Level;

use crate::types::{FRAME_RATE, TICK_MS};

/// Highest accepted render rate.
pub const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, Parser)]
#[command(name = "blockfall", version, about = "Falling-block puzzle in the terminal")]
pub struct Args {
    /// Milliseconds per gravity tick
    #[arg(long, default_value_t = TICK_MS)]
    pub tick_ms: u32,

    /// Frames rendered per second
    #[arg(long, default_value_t = FRAME_RATE)]
    pub fps: u32,

    /// Seed for the piece sequence (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file; logging is off without it
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v = DEBUG, -vv = TRACE)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tick interval must be at least 1 ms")]
    ZeroTick,

    #[error("frame rate must be between 1 and {max}, got {0}", max = MAX_FPS)]
    FrameRate(u32),
}

/// Validated driver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub tick: Duration,
    pub frame: Duration,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(u64::from(TICK_MS)),
            frame: frame_interval(FRAME_RATE),
            seed: None,
            log_file: None,
            log_level: Level::INFO,
        }
    }
}

impl TryFrom<Args> for DriverConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if args.fps == 0 || args.fps > MAX_FPS {
            return Err(ConfigError::FrameRate(args.fps));
        }

        let log_level = match args.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        };

        Ok(Self {
            tick: Duration::from_millis(u64::from(args.tick_ms)),
            frame: frame_interval(args.fps),
            seed: args.seed,
            log_file: args.log_file,
            log_level,
        })
    }
}

fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs(1) / fps
}
