//! Error types for CLI operations.

use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Timestamp argument that could not be parsed
    #[error("invalid timestamp '{input}': expected RFC 3339 or 'YYYY-MM-DD HH:MM:SS[.frac]' (UTC)")]
    InvalidTimestamp { input: String },
}

impl CliError {
    pub fn invalid_timestamp(input: impl Into<String>) -> Self {
        Self::InvalidTimestamp {
            input: input.into(),
        }
    }
}
