//! `series` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::SeriesArgs;
use crate::commands::parse_instant;

/// Boundary series for JSON output
#[derive(Serialize)]
struct SeriesResult {
    frame: String,
    from: String,
    to: String,
    truncated: bool,
    boundaries: Vec<String>,
}

/// Execute the `series` command
pub fn run_series(args: &SeriesArgs) -> Result<()> {
    let from = parse_instant(&args.from)?;
    let to = parse_instant(&args.to)?;
    if to < from {
        anyhow::bail!("series range is empty: {} is before {}", args.to, args.from);
    }

    let mut remaining = args.frame.boundaries_between(from, to);
    let boundaries: Vec<String> = if args.limit == 0 {
        remaining.by_ref().map(|b| b.to_rfc3339()).collect()
    } else {
        remaining
            .by_ref()
            .take(args.limit)
            .map(|b| b.to_rfc3339())
            .collect()
    };
    let truncated = remaining.next().is_some();
    if truncated {
        warn!(limit = args.limit, "boundary series truncated at limit");
    }

    info!(frame = %args.frame, count = boundaries.len(), "collected boundary series");

    if args.json {
        let result = SeriesResult {
            frame: args.frame.to_string(),
            from: from.to_rfc3339(),
            to: to.to_rfc3339(),
            truncated,
            boundaries,
        };
        let json = serde_json::to_string_pretty(&result)
            .context("failed to serialize boundary series")?;
        println!("{}", json);
    } else {
        for boundary in &boundaries {
            println!("{}", boundary);
        }
        if truncated {
            eprintln!("... truncated at {} boundaries", args.limit);
        }
    }

    Ok(())
}
