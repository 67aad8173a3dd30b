//! Command implementations.

mod next;
mod same;
mod series;
mod start;

pub use next::run_next;
pub use same::run_same;
pub use series::run_series;
pub use start::run_start;

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::CliError;

/// Parse a CLI instant: RFC 3339, or a naive `YYYY-MM-DD HH:MM:SS[.frac]`
/// interpreted as UTC.
pub(crate) fn parse_instant(input: &str) -> Result<DateTime<Utc>, CliError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(input) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|_| CliError::invalid_timestamp(input))
}

/// Resolve an optional CLI instant, defaulting to the current time.
pub(crate) fn instant_or_now(input: Option<&str>) -> Result<DateTime<Utc>, CliError> {
    match input {
        Some(raw) => parse_instant(raw),
        None => Ok(Utc::now()),
    }
}
