//! # Integration Tests
//!
//! Cross-crate tests driving the public `timeframes` API:
//! - thirty-minute scenario suite (historic and far-future dates)
//! - algebraic frame laws over every variant
//! - calendar carry across day, month, year, and leap boundaries
//! - fail-fast behavior at the edge of the representable range

#[cfg(test)]
mod support {
    use chrono::{DateTime, TimeZone, Timelike, Utc};

    pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    pub fn utc_nano(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, nano: u32) -> DateTime<Utc> {
        utc(y, mo, d, h, mi, s).with_nanosecond(nano).unwrap()
    }
}

#[cfg(test)]
mod m30_scenarios {
    use timeframes::TimeFrame;

    use crate::support::{utc, utc_nano};

    /// Instants share an m30 frame when every field above the minute matches
    /// and both minutes floor to the same multiple of 30.
    #[test]
    fn test_instants_in_the_same_half_hour_share_a_frame() {
        let m30 = TimeFrame::M30;

        assert!(m30.are_in_same_time_frame(
            utc_nano(2041, 2, 7, 0, 29, 59, 99_999),
            utc(2041, 2, 7, 0, 0, 0),
        ));
        assert!(m30.are_in_same_time_frame(
            utc_nano(1752, 11, 15, 21, 53, 59, 9_231),
            utc_nano(1752, 11, 15, 21, 35, 34, 1_234),
        ));
    }

    #[test]
    fn test_instants_in_different_buckets_do_not_share_a_frame() {
        let m30 = TimeFrame::M30;

        // the minute-30 boundary opens a new frame
        assert!(!m30.are_in_same_time_frame(utc(2041, 2, 7, 0, 0, 0), utc(2041, 2, 7, 0, 30, 0)));

        // any coarser field differing splits the frame
        assert!(!m30.are_in_same_time_frame(
            utc(2570, 11, 24, 15, 47, 0),
            utc(2570, 11, 25, 15, 47, 0),
        ));
        assert!(!m30.are_in_same_time_frame(
            utc(2501, 1, 24, 20, 29, 0),
            utc(1892, 1, 24, 20, 29, 0),
        ));
        assert!(!m30.are_in_same_time_frame(
            utc(2013, 1, 10, 9, 0, 57),
            utc(2013, 10, 10, 9, 0, 57),
        ));
    }

    /// The next frame starts at the earliest instant after the reference
    /// whose minute is a multiple of 30, seconds and sub-seconds zeroed.
    #[test]
    fn test_next_frame_is_the_next_multiple_of_thirty_minutes() {
        let m30 = TimeFrame::M30;

        let cases = [
            (utc(7821, 11, 24, 4, 59, 0), utc(7821, 11, 24, 5, 0, 0)),
            (utc(1975, 2, 10, 14, 59, 0), utc(1975, 2, 10, 15, 0, 0)),
            (utc(2047, 3, 7, 16, 29, 0), utc(2047, 3, 7, 16, 30, 0)),
            (utc(2014, 9, 16, 21, 29, 0), utc(2014, 9, 16, 21, 30, 0)),
            (utc(1257, 5, 24, 10, 37, 0), utc(1257, 5, 24, 11, 0, 0)),
            (utc(2047, 11, 24, 4, 30, 0), utc(2047, 11, 24, 5, 0, 0)),
            (utc(2104, 10, 10, 3, 29, 47), utc(2104, 10, 10, 3, 30, 0)),
            (utc_nano(2004, 2, 10, 17, 29, 0, 67_832), utc(2004, 2, 10, 17, 30, 0)),
            (utc_nano(1947, 8, 10, 13, 59, 25, 4_578), utc(1947, 8, 10, 14, 0, 0)),
        ];

        for (reference, expected) in cases {
            assert_eq!(
                m30.instant_of_next_frame(reference).unwrap(),
                expected,
                "next m30 frame after {reference}",
            );
        }
    }
}

#[cfg(test)]
mod frame_laws {
    use chrono::{DateTime, Timelike, Utc};
    use timeframes::TimeFrame;

    use crate::support::{utc, utc_nano};

    fn samples() -> Vec<DateTime<Utc>> {
        vec![
            utc(-44, 3, 15, 11, 11, 11),
            utc(1, 1, 3, 0, 0, 0),
            utc(1215, 6, 15, 9, 45, 12),
            utc_nano(1899, 12, 31, 23, 59, 59, 999_999_999),
            utc(1970, 1, 1, 0, 0, 0),
            utc_nano(1999, 12, 31, 23, 29, 59, 500_000_000),
            utc(2000, 2, 29, 12, 31, 7),
            utc_nano(2024, 2, 29, 23, 59, 0, 1),
            utc(2024, 6, 3, 14, 47, 23),
            utc(2041, 2, 7, 0, 30, 0),
            utc(9999, 1, 1, 18, 2, 44),
        ]
    }

    #[test]
    fn test_same_frame_is_reflexive_and_symmetric() {
        for frame in TimeFrame::ALL {
            for a in samples() {
                assert!(frame.are_in_same_time_frame(a, a), "{frame} reflexive at {a}");
                for b in samples() {
                    assert_eq!(
                        frame.are_in_same_time_frame(a, b),
                        frame.are_in_same_time_frame(b, a),
                        "{frame} symmetric at {a} / {b}",
                    );
                }
            }
        }
    }

    #[test]
    fn test_next_frame_is_strictly_later_and_aligned() {
        for frame in TimeFrame::ALL {
            for reference in samples() {
                let next = frame.instant_of_next_frame(reference).unwrap();

                assert!(next > reference, "{frame} boundary after {reference}");
                assert!(frame.is_boundary(next), "{frame} result aligned at {next}");
                assert_eq!(next.second(), 0);
                assert_eq!(next.nanosecond(), 0);
                match frame {
                    TimeFrame::M1 => {}
                    TimeFrame::M5 => assert_eq!(next.minute() % 5, 0),
                    TimeFrame::M15 => assert_eq!(next.minute() % 15, 0),
                    TimeFrame::M30 => assert_eq!(next.minute() % 30, 0),
                    TimeFrame::H1 => assert_eq!(next.minute(), 0),
                    TimeFrame::D1 => {
                        assert_eq!(next.hour(), 0);
                        assert_eq!(next.minute(), 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_m30_boundaries_land_on_minute_zero_or_thirty() {
        for reference in samples() {
            let next = TimeFrame::M30.instant_of_next_frame(reference).unwrap();
            assert!(next.minute() == 0 || next.minute() == 30);
        }
    }

    #[test]
    fn test_next_frame_never_stays_in_the_same_frame() {
        for frame in TimeFrame::ALL {
            for reference in samples() {
                let next = frame.instant_of_next_frame(reference).unwrap();
                assert!(
                    !frame.are_in_same_time_frame(reference, next),
                    "{frame} boundary after {reference} opens a new frame",
                );
            }
        }
    }

    #[test]
    fn test_successive_boundaries_are_exactly_one_step_apart() {
        for frame in TimeFrame::ALL {
            for reference in samples() {
                let first = frame.instant_of_next_frame(reference).unwrap();
                let second = frame.instant_of_next_frame(first).unwrap();
                assert_eq!(second - first, frame.duration(), "{frame} step from {first}");
            }
        }
    }

    #[test]
    fn test_frame_start_is_an_idempotent_floor() {
        for frame in TimeFrame::ALL {
            for instant in samples() {
                let start = frame.frame_start(instant);

                assert!(start <= instant);
                assert_eq!(frame.frame_start(start), start, "{frame} idempotent at {instant}");
                assert!(frame.are_in_same_time_frame(instant, start));
                assert!(instant - start < frame.duration());
            }
        }
    }
}

#[cfg(test)]
mod calendar_carry {
    use timeframes::TimeFrame;

    use crate::support::{utc, utc_nano};

    #[test]
    fn test_minute_frames_carry_into_the_next_day() {
        assert_eq!(
            TimeFrame::M1
                .instant_of_next_frame(utc_nano(2024, 6, 3, 23, 59, 59, 500_000_000))
                .unwrap(),
            utc(2024, 6, 4, 0, 0, 0),
        );
        assert_eq!(
            TimeFrame::M30.instant_of_next_frame(utc(2024, 12, 31, 23, 45, 0)).unwrap(),
            utc(2025, 1, 1, 0, 0, 0),
        );
    }

    #[test]
    fn test_hour_frames_respect_leap_years() {
        // 2023 is not a leap year, 2024 is
        assert_eq!(
            TimeFrame::H1.instant_of_next_frame(utc(2023, 2, 28, 23, 10, 0)).unwrap(),
            utc(2023, 3, 1, 0, 0, 0),
        );
        assert_eq!(
            TimeFrame::H1.instant_of_next_frame(utc(2024, 2, 28, 23, 10, 0)).unwrap(),
            utc(2024, 2, 29, 0, 0, 0),
        );
    }

    #[test]
    fn test_century_leap_rules() {
        // 1900 is not a leap year, 2000 is
        assert_eq!(
            TimeFrame::M30.instant_of_next_frame(utc(1900, 2, 28, 23, 40, 0)).unwrap(),
            utc(1900, 3, 1, 0, 0, 0),
        );
        assert_eq!(
            TimeFrame::M30.instant_of_next_frame(utc(2000, 2, 28, 23, 45, 0)).unwrap(),
            utc(2000, 2, 29, 0, 0, 0),
        );
    }

    #[test]
    fn test_day_frames_carry_across_month_and_year() {
        assert_eq!(
            TimeFrame::D1.instant_of_next_frame(utc(2024, 2, 29, 10, 0, 0)).unwrap(),
            utc(2024, 3, 1, 0, 0, 0),
        );
        assert_eq!(
            TimeFrame::D1.instant_of_next_frame(utc(1999, 12, 31, 0, 0, 0)).unwrap(),
            utc(2000, 1, 1, 0, 0, 0),
        );
    }
}

#[cfg(test)]
mod range_limits {
    use timeframes::{TimeFrame, TimeFrameError};

    use crate::support::utc;

    // past 23:59:30 on the last representable day, every variant's next
    // boundary falls outside the range
    fn near_max() -> chrono::DateTime<chrono::Utc> {
        chrono::NaiveDate::MAX.and_hms_opt(23, 59, 30).unwrap().and_utc()
    }

    #[test]
    fn test_advancing_past_the_range_fails_fast() {
        for frame in TimeFrame::ALL {
            let err = frame.instant_of_next_frame(near_max()).unwrap_err();
            assert!(matches!(err, TimeFrameError::TimestampRangeExceeded { .. }));
            assert!(err.to_string().starts_with("timestamp range exceeded"));
        }
    }

    #[test]
    fn test_flooring_at_the_range_edge_still_succeeds() {
        for frame in TimeFrame::ALL {
            let start = frame.frame_start(near_max());
            assert!(start <= near_max());
            assert!(frame.is_boundary(start));
        }
    }

    #[test]
    fn test_boundary_iteration_terminates_at_the_range_edge() {
        // the last representable m30 boundaries are yielded, then iteration ends
        let last_day = chrono::NaiveDate::MAX;
        let from = last_day.and_hms_opt(22, 40, 0).unwrap().and_utc();

        let boundaries: Vec<_> = TimeFrame::M30
            .boundaries_between(from, chrono::DateTime::<chrono::Utc>::MAX_UTC)
            .collect();
        assert_eq!(
            boundaries,
            vec![
                last_day.and_hms_opt(23, 0, 0).unwrap().and_utc(),
                last_day.and_hms_opt(23, 30, 0).unwrap().and_utc(),
            ],
        );
    }

    #[test]
    fn test_far_past_and_far_future_frames_agree() {
        // same wall-clock fields centuries apart never share a frame
        for frame in TimeFrame::ALL {
            assert!(!frame.are_in_same_time_frame(
                utc(2501, 1, 24, 20, 29, 0),
                utc(1892, 1, 24, 20, 29, 0),
            ));
        }
    }
}
