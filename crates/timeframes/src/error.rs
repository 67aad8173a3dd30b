//! Error types for frame arithmetic.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::frame::TimeFrame;

/// Errors produced by frame computations.
///
/// Both frame operations are total over representable instants; the only
/// arithmetic failure is advancing past the end of the representable range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeFrameError {
    /// Advancing `reference` by one frame leaves the representable range.
    #[error("timestamp range exceeded: no {frame} boundary after {reference}")]
    TimestampRangeExceeded {
        frame: TimeFrame,
        reference: DateTime<Utc>,
    },

    /// A frame code that names no supported frame length.
    #[error("unknown time frame '{code}', expected one of m1, m5, m15, m30, h1, d1")]
    UnknownFrame { code: String },
}

impl TimeFrameError {
    /// Create an unknown-frame-code error.
    pub fn unknown_frame(code: impl Into<String>) -> Self {
        Self::UnknownFrame { code: code.into() }
    }
}
