//! The closed set of supported frame lengths and their arithmetic.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::boundaries::FrameBoundaries;
use crate::error::TimeFrameError;

/// A fixed-length, non-overlapping calendar time frame.
///
/// Minute variants are aligned to minute-of-hour multiples of their step
/// (`M30` frames start at minutes 0 and 30 of every hour), [`H1`] to the
/// top of the hour and [`D1`] to midnight. All arithmetic is over UTC
/// instants; callers normalize other zones before bucketing.
///
/// [`H1`]: TimeFrame::H1
/// [`D1`]: TimeFrame::D1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    /// One-minute frames
    M1,
    /// Five-minute frames
    M5,
    /// Fifteen-minute frames
    M15,
    /// Thirty-minute frames
    M30,
    /// One-hour frames
    H1,
    /// One-day frames
    D1,
}

impl TimeFrame {
    /// Every supported frame length, shortest first.
    pub const ALL: [TimeFrame; 6] = [
        TimeFrame::M1,
        TimeFrame::M5,
        TimeFrame::M15,
        TimeFrame::M30,
        TimeFrame::H1,
        TimeFrame::D1,
    ];

    /// Wire and CLI code of this frame length (`"m30"`, `"d1"`, ...).
    pub fn code(&self) -> &'static str {
        match self {
            TimeFrame::M1 => "m1",
            TimeFrame::M5 => "m5",
            TimeFrame::M15 => "m15",
            TimeFrame::M30 => "m30",
            TimeFrame::H1 => "h1",
            TimeFrame::D1 => "d1",
        }
    }

    /// Fixed length of one frame.
    pub fn duration(&self) -> Duration {
        match self {
            TimeFrame::M1 => Duration::minutes(1),
            TimeFrame::M5 => Duration::minutes(5),
            TimeFrame::M15 => Duration::minutes(15),
            TimeFrame::M30 => Duration::minutes(30),
            TimeFrame::H1 => Duration::hours(1),
            TimeFrame::D1 => Duration::days(1),
        }
    }

    /// Start of the frame containing `instant`.
    ///
    /// Seconds and sub-seconds are zeroed and the minute is floored to the
    /// frame's step (hour and day are floored for [`H1`]/[`D1`]). The result
    /// is the unique boundary at or before `instant`. Total: flooring a
    /// representable instant never leaves the representable range.
    ///
    /// [`H1`]: TimeFrame::H1
    /// [`D1`]: TimeFrame::D1
    pub fn frame_start(&self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let (hour, minute) = match self {
            TimeFrame::M1 => (instant.hour(), instant.minute()),
            TimeFrame::M5 => (instant.hour(), instant.minute() - instant.minute() % 5),
            TimeFrame::M15 => (instant.hour(), instant.minute() - instant.minute() % 15),
            TimeFrame::M30 => (instant.hour(), instant.minute() - instant.minute() % 30),
            TimeFrame::H1 => (instant.hour(), 0),
            TimeFrame::D1 => (0, 0),
        };
        instant
            .date_naive()
            .and_hms_opt(hour, minute, 0)
            .expect("floored time-of-day fields stay in range")
            .and_utc()
    }

    /// Whether two instants fall inside the same frame.
    ///
    /// Fields finer than the frame step are ignored, so `00:29:59.999` and
    /// `00:00:00` share an `M30` frame while `00:30:00` opens the next one.
    /// Symmetric and reflexive; total over all representable instants.
    pub fn are_in_same_time_frame(&self, a: DateTime<Utc>, b: DateTime<Utc>) -> bool {
        self.frame_start(a) == self.frame_start(b)
    }

    /// Earliest frame boundary strictly after `reference`.
    ///
    /// An already aligned `reference` advances by a full frame, never to
    /// itself. Calendar carry (hour 23 into the next day, Dec 31 into the
    /// next year, leap days) follows from the underlying calendar
    /// arithmetic. Fails fast with
    /// [`TimeFrameError::TimestampRangeExceeded`] when the boundary would
    /// leave the representable timestamp range.
    pub fn instant_of_next_frame(
        &self,
        reference: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, TimeFrameError> {
        self.frame_start(reference)
            .checked_add_signed(self.duration())
            .ok_or(TimeFrameError::TimestampRangeExceeded {
                frame: *self,
                reference,
            })
    }

    /// Whether `instant` is exactly a frame start.
    pub fn is_boundary(&self, instant: DateTime<Utc>) -> bool {
        self.frame_start(instant) == instant
    }

    /// Boundaries `b` with `from < b <= to`, earliest first.
    pub fn boundaries_between(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> FrameBoundaries {
        FrameBoundaries::new(*self, from, to)
    }
}

impl fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TimeFrame {
    type Err = TimeFrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m1" => Ok(TimeFrame::M1),
            "m5" => Ok(TimeFrame::M5),
            "m15" => Ok(TimeFrame::M15),
            "m30" => Ok(TimeFrame::M30),
            "h1" => Ok(TimeFrame::H1),
            "d1" => Ok(TimeFrame::D1),
            _ => Err(TimeFrameError::unknown_frame(s)),
        }
    }
}
