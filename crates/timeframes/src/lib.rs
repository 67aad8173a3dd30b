//! # Timeframes
//!
//! Fixed-length calendar time frames for bucketing UTC instants.
//!
//! A [`TimeFrame`] classifies instants into non-overlapping windows aligned
//! to the calendar (`M30` frames start at minutes 0 and 30 of every hour)
//! and computes the boundaries between them. Both operations are pure and
//! stateless, so a `TimeFrame` can be shared freely across threads.
//!
//! ## Example
//! ```
//! use chrono::{TimeZone, Utc};
//! use timeframes::TimeFrame;
//!
//! let frame = TimeFrame::M30;
//! let late = Utc.with_ymd_and_hms(2041, 2, 7, 0, 29, 59).unwrap();
//! let open = Utc.with_ymd_and_hms(2041, 2, 7, 0, 0, 0).unwrap();
//!
//! assert!(frame.are_in_same_time_frame(late, open));
//! assert_eq!(
//!     frame.instant_of_next_frame(late).unwrap(),
//!     Utc.with_ymd_and_hms(2041, 2, 7, 0, 30, 0).unwrap(),
//! );
//! ```

mod boundaries;
mod error;
mod frame;

pub use boundaries::FrameBoundaries;
pub use error::TimeFrameError;
pub use frame::TimeFrame;
