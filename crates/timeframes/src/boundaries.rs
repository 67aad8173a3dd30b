//! Iteration over successive frame boundaries.

use chrono::{DateTime, Utc};

use crate::frame::TimeFrame;

/// Iterator over the frame boundaries inside a half-open range.
///
/// Yields every boundary `b` with `from < b <= to`, earliest first. The
/// lower bound is exclusive: an aligned `from` is not yielded, matching the
/// strictly-after contract of [`TimeFrame::instant_of_next_frame`]. Ends
/// early only when no further boundary is representable, which inside a
/// bounded range coincides with exhaustion.
#[derive(Debug, Clone)]
pub struct FrameBoundaries {
    frame: TimeFrame,
    cursor: Option<DateTime<Utc>>,
    end: DateTime<Utc>,
}

impl FrameBoundaries {
    pub(crate) fn new(frame: TimeFrame, from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        Self {
            frame,
            cursor: Some(from),
            end: to,
        }
    }
}

impl Iterator for FrameBoundaries {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<Self::Item> {
        let cursor = self.cursor?;
        match self.frame.instant_of_next_frame(cursor) {
            Ok(boundary) if boundary <= self.end => {
                self.cursor = Some(boundary);
                Some(boundary)
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }
}

impl std::iter::FusedIterator for FrameBoundaries {}
