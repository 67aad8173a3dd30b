//! `start` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::StartArgs;
use crate::commands::instant_or_now;

/// Frame start result for JSON output
#[derive(Serialize)]
struct StartResult {
    frame: String,
    reference: String,
    frame_start: String,
    on_boundary: bool,
}

/// Execute the `start` command
pub fn run_start(args: &StartArgs) -> Result<()> {
    let reference = instant_or_now(args.instant.as_deref())?;
    let frame_start = args.frame.frame_start(reference);
    let on_boundary = args.frame.is_boundary(reference);

    info!(frame = %args.frame, %reference, %frame_start, on_boundary, "computed frame start");

    if args.json {
        let result = StartResult {
            frame: args.frame.to_string(),
            reference: reference.to_rfc3339(),
            frame_start: frame_start.to_rfc3339(),
            on_boundary,
        };
        let json =
            serde_json::to_string_pretty(&result).context("failed to serialize frame start")?;
        println!("{}", json);
    } else {
        println!("{}", frame_start.to_rfc3339());
    }

    Ok(())
}
