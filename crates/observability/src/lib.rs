//! # Observability
//!
//! Tracing initialization for the workspace binaries.
//!
//! Wraps `tracing-subscriber` composition behind a small config so every
//! binary logs the same way: an `EnvFilter` honoring `RUST_LOG` plus a
//! format layer chosen at startup.
//!
//! ## Usage
//!
//! ```ignore
//! observability::init_with_config(ObservabilityConfig {
//!     log_format: LogFormat::Compact,
//!     default_log_level: "debug".to_string(),
//! })?;
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log output format
    pub log_format: LogFormat,
    /// Default log level when `RUST_LOG` is unset
    pub default_log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            default_log_level: "info".to_string(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default)]
pub enum LogFormat {
    /// JSON structured logs
    Json,
    /// Human-readable format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

/// Initialize tracing with the default configuration.
pub fn init() -> Result<()> {
    init_with_config(ObservabilityConfig::default())
}

/// Initialize tracing with a custom configuration.
///
/// Fails if a global subscriber is already installed.
pub fn init_with_config(config: ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_log_level));

    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true);

            registry
                .with(fmt_layer)
                .try_init()
                .context("failed to initialize tracing subscriber")?;
        }
        LogFormat::Pretty => {
            registry
                .with(fmt::layer().pretty())
                .try_init()
                .context("failed to initialize tracing subscriber")?;
        }
        LogFormat::Compact => {
            registry
                .with(fmt::layer().compact())
                .try_init()
                .context("failed to initialize tracing subscriber")?;
        }
    }

    tracing::debug!(log_format = ?config.log_format, "observability initialized");

    Ok(())
}
