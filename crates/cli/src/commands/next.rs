//! `next` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::NextArgs;
use crate::commands::instant_or_now;

/// Boundary result for JSON output
#[derive(Serialize)]
struct NextResult {
    frame: String,
    reference: String,
    next_boundary: String,
}

/// Execute the `next` command
pub fn run_next(args: &NextArgs) -> Result<()> {
    let reference = instant_or_now(args.instant.as_deref())?;
    let boundary = args.frame.instant_of_next_frame(reference)?;

    info!(frame = %args.frame, %reference, %boundary, "computed next boundary");

    if args.json {
        let result = NextResult {
            frame: args.frame.to_string(),
            reference: reference.to_rfc3339(),
            next_boundary: boundary.to_rfc3339(),
        };
        let json =
            serde_json::to_string_pretty(&result).context("failed to serialize boundary")?;
        println!("{}", json);
    } else {
        println!("{}", boundary.to_rfc3339());
    }

    Ok(())
}
