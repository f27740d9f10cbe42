//! Logging setup via `tracing` and `tracing-subscriber`.
//!
//! Pipeline progress logs at `info`, per-table detail at `debug`.
//! When no verbosity flag is given, `RUST_LOG` takes precedence over
//! the default level.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Honor `RUST_LOG` when no explicit verbosity was requested.
    pub use_env_filter: bool,
    pub format: LogFormat,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
            format: LogFormat::default(),
            with_ansi: true,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    let filter = if config.use_env_filter {
        EnvFilter::builder()
            .with_default_directive(config.level_filter.into())
            .from_env_lossy()
    } else {
        EnvFilter::builder()
            .with_default_directive(config.level_filter.into())
            .parse_lossy("")
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(config.with_ansi)
        .with_writer(std::io::stderr);
    match config.format {
        LogFormat::Pretty => builder.finish().try_init(),
        LogFormat::Compact => builder.compact().finish().try_init(),
        LogFormat::Json => builder.json().finish().try_init(),
    }
}
