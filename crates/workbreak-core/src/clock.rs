//! Wall-clock helpers: stop-time parsing and the minute budget.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::config::DayWrap;
use crate::error::{PlanError, Result};

/// Format accepted for stop times.
pub const STOP_TIME_FORMAT: &str = "%H:%M";

/// Parse a 24-hour `HH:MM` stop time.
///
/// # Errors
///
/// Returns `InvalidTimeFormat` when `input` is not a valid time of day.
pub fn parse_stop_time(input: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), STOP_TIME_FORMAT).map_err(|source| {
        PlanError::InvalidTimeFormat {
            input: input.to_string(),
            source,
        }
    })
}

/// Minutes from `now` until the next occurrence of `stop`.
///
/// Counts whole seconds only; the sub-second part of `now` is dropped.
///
/// # Errors
///
/// Returns `StopTimeInPast` when `stop` is not later than `now` and `wrap`
/// is `SameDay`, and `NoTimeRemaining` when `stop` equals `now` exactly or
/// less than a second of budget is left.
pub fn minutes_until(now: NaiveDateTime, stop: NaiveTime, wrap: DayWrap) -> Result<f64> {
    let mut delta = now.date().and_time(stop) - now;
    if delta <= Duration::zero() {
        if delta == Duration::zero() {
            return Err(PlanError::NoTimeRemaining);
        }
        match wrap {
            DayWrap::NextDay => delta = delta + Duration::days(1),
            DayWrap::SameDay => {
                return Err(PlanError::StopTimeInPast {
                    stop,
                    now: now.time(),
                })
            }
        }
    }

    let seconds = delta.num_seconds();
    if seconds <= 0 {
        return Err(PlanError::NoTimeRemaining);
    }
    Ok(seconds as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parse_stop_time() {
        assert_eq!(parse_stop_time("18:00").unwrap(), time(18, 0));
        assert_eq!(parse_stop_time("7:05").unwrap(), time(7, 5));
        assert_eq!(parse_stop_time(" 23:59 ").unwrap(), time(23, 59));
    }

    #[test]
    fn test_parse_stop_time_rejects_garbage() {
        for bad in ["", "18", "25:00", "12:60", "6pm", "18:00:00"] {
            assert!(
                matches!(parse_stop_time(bad), Err(PlanError::InvalidTimeFormat { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_minutes_until_same_day() {
        let minutes = minutes_until(at(9, 0, 0), time(17, 0), DayWrap::NextDay).unwrap();
        assert_eq!(minutes, 480.0);
    }

    #[test]
    fn test_minutes_until_drops_partial_seconds() {
        let now = at(9, 0, 0) + Duration::milliseconds(500);
        let minutes = minutes_until(now, time(17, 0), DayWrap::NextDay).unwrap();
        assert_eq!(minutes, 28_799.0 / 60.0);
    }

    #[test]
    fn test_minutes_until_rolls_to_tomorrow() {
        let minutes = minutes_until(at(22, 0, 0), time(1, 30), DayWrap::NextDay).unwrap();
        assert_eq!(minutes, 210.0);
    }

    #[test]
    fn test_minutes_until_same_day_rejects_past() {
        let err = minutes_until(at(22, 0, 0), time(1, 30), DayWrap::SameDay).unwrap_err();
        assert!(matches!(err, PlanError::StopTimeInPast { .. }));
    }

    #[test]
    fn test_minutes_until_just_past_stop_wraps_full_day() {
        let now = at(17, 0, 0) + Duration::milliseconds(500);
        let minutes = minutes_until(now, time(17, 0), DayWrap::NextDay).unwrap();
        assert_eq!(minutes, 86_399.0 / 60.0);

        let err = minutes_until(now, time(17, 0), DayWrap::SameDay).unwrap_err();
        assert!(matches!(err, PlanError::StopTimeInPast { .. }));
    }

    #[test]
    fn test_minutes_until_under_a_second_is_empty() {
        let now = at(16, 59, 59) + Duration::milliseconds(700);
        let err = minutes_until(now, time(17, 0), DayWrap::NextDay).unwrap_err();
        assert!(matches!(err, PlanError::NoTimeRemaining));
    }

    #[test]
    fn test_minutes_until_now_is_empty() {
        for wrap in [DayWrap::NextDay, DayWrap::SameDay] {
            let err = minutes_until(at(17, 0, 0), time(17, 0), wrap).unwrap_err();
            assert!(matches!(err, PlanError::NoTimeRemaining));
        }
    }
}
