//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use timeframes::TimeFrame;

/// Timeframes - calendar frame bucketing for UTC timestamps
#[derive(Parser, Debug)]
#[command(
    name = "timeframes",
    author,
    version,
    about = "Bucket UTC timestamps into fixed-length calendar frames",
    long_about = "Classifies instants into non-overlapping calendar frames \n\
                  (m1, m5, m15, m30, h1, d1) and computes frame boundaries: \n\
                  the start of the frame containing an instant, the next \n\
                  boundary strictly after it, and boundary series over a range."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "TIMEFRAMES_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "TIMEFRAMES_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether two instants fall in the same frame
    Same(SameArgs),

    /// Print the next frame boundary strictly after an instant
    Next(NextArgs),

    /// Print the start of the frame containing an instant
    Start(StartArgs),

    /// List the frame boundaries inside a range
    Series(SeriesArgs),
}

/// Arguments for the `same` command
#[derive(Parser, Debug)]
pub struct SameArgs {
    /// Frame length code (m1, m5, m15, m30, h1, d1)
    #[arg(short, long, default_value = "m30", env = "TIMEFRAMES_FRAME")]
    pub frame: TimeFrame,

    /// First instant, RFC 3339 or "YYYY-MM-DD HH:MM:SS[.frac]" (UTC)
    pub a: String,

    /// Second instant
    pub b: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `next` command
#[derive(Parser, Debug)]
pub struct NextArgs {
    /// Frame length code (m1, m5, m15, m30, h1, d1)
    #[arg(short, long, default_value = "m30", env = "TIMEFRAMES_FRAME")]
    pub frame: TimeFrame,

    /// Reference instant (defaults to now)
    pub instant: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `start` command
#[derive(Parser, Debug)]
pub struct StartArgs {
    /// Frame length code (m1, m5, m15, m30, h1, d1)
    #[arg(short, long, default_value = "m30", env = "TIMEFRAMES_FRAME")]
    pub frame: TimeFrame,

    /// Reference instant (defaults to now)
    pub instant: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `series` command
#[derive(Parser, Debug)]
pub struct SeriesArgs {
    /// Frame length code (m1, m5, m15, m30, h1, d1)
    #[arg(short, long, default_value = "m30", env = "TIMEFRAMES_FRAME")]
    pub frame: TimeFrame,

    /// Exclusive lower bound of the range
    pub from: String,

    /// Inclusive upper bound of the range
    pub to: String,

    /// Maximum number of boundaries to print (0 = unlimited)
    #[arg(long, default_value = "1000", env = "TIMEFRAMES_SERIES_LIMIT")]
    pub limit: usize,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => observability::LogFormat::Json,
            LogFormat::Pretty => observability::LogFormat::Pretty,
            LogFormat::Compact => observability::LogFormat::Compact,
        }
    }
}
