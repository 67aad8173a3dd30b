//! `same` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::cli::SameArgs;
use crate::commands::parse_instant;

/// Comparison result for JSON output
#[derive(Serialize)]
struct SameResult {
    frame: String,
    a: String,
    b: String,
    same_frame: bool,
    frame_start_a: String,
    frame_start_b: String,
}

/// Execute the `same` command
pub fn run_same(args: &SameArgs) -> Result<()> {
    let a = parse_instant(&args.a)?;
    let b = parse_instant(&args.b)?;
    let same_frame = args.frame.are_in_same_time_frame(a, b);

    info!(frame = %args.frame, %a, %b, same_frame, "compared instants");

    let result = SameResult {
        frame: args.frame.to_string(),
        a: a.to_rfc3339(),
        b: b.to_rfc3339(),
        same_frame,
        frame_start_a: args.frame.frame_start(a).to_rfc3339(),
        frame_start_b: args.frame.frame_start(b).to_rfc3339(),
    };

    if args.json {
        let json = serde_json::to_string_pretty(&result)
            .context("failed to serialize comparison result")?;
        println!("{}", json);
    } else if result.same_frame {
        println!(
            "same {} frame, starting {}",
            result.frame, result.frame_start_a
        );
    } else {
        println!(
            "different {} frames: {} vs {}",
            result.frame, result.frame_start_a, result.frame_start_b
        );
    }

    Ok(())
}
