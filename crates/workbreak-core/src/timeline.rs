//! Wall-clock layout of a chosen candidate.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use std::fmt::Write;

use crate::planner::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Work,
    Break,
}

impl PeriodKind {
    fn label(self) -> &'static str {
        match self {
            PeriodKind::Work => "Work",
            PeriodKind::Break => "Break",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    pub kind: PeriodKind,
    /// 1-based position among periods of the same kind.
    pub index: u32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Period {
    pub fn duration_min(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Alternating work and break periods starting at `start`, beginning and
/// ending with work.
pub fn expand(candidate: &Candidate, start: NaiveDateTime) -> Vec<Period> {
    let work = Duration::minutes(i64::from(candidate.work_minutes));
    let brk = Duration::minutes(i64::from(candidate.break_minutes));

    let mut periods = Vec::with_capacity((candidate.interval_count * 2) as usize);
    let mut cursor = start;
    for index in 1..=candidate.interval_count {
        periods.push(Period {
            kind: PeriodKind::Work,
            index,
            start: cursor,
            end: cursor + work,
        });
        cursor = cursor + work;

        if index < candidate.interval_count {
            periods.push(Period {
                kind: PeriodKind::Break,
                index,
                start: cursor,
                end: cursor + brk,
            });
            cursor = cursor + brk;
        }
    }
    periods
}

/// One `HH:MM-HH:MM  Work 1` line per period.
pub fn render_timeline(periods: &[Period]) -> String {
    let mut out = String::new();
    for p in periods {
        let _ = writeln!(
            out,
            "{}-{}  {} {}",
            p.start.format("%H:%M"),
            p.end.format("%H:%M"),
            p.kind.label(),
            p.index
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn nine() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_expand_alternates() {
        let c = Candidate {
            work_minutes: 50,
            break_minutes: 10,
            interval_count: 3,
        };
        let periods = expand(&c, nine());

        let kinds: Vec<_> = periods.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PeriodKind::Work,
                PeriodKind::Break,
                PeriodKind::Work,
                PeriodKind::Break,
                PeriodKind::Work,
            ]
        );
        assert_eq!(periods[0].duration_min(), 50);
        assert_eq!(periods[1].duration_min(), 10);
        assert_eq!(periods[4].index, 3);
        assert_eq!(periods[4].end, nine() + Duration::minutes(170));

        for pair in periods.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn test_expand_single_interval() {
        let c = Candidate {
            work_minutes: 480,
            break_minutes: 96,
            interval_count: 1,
        };
        let periods = expand(&c, nine());
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].duration_min(), 480);
    }

    #[test]
    fn test_render_timeline() {
        let c = Candidate {
            work_minutes: 25,
            break_minutes: 5,
            interval_count: 2,
        };
        let text = render_timeline(&expand(&c, nine()));
        assert_eq!(
            text,
            "09:00-09:25  Work 1\n09:25-09:30  Break 1\n09:30-09:55  Work 2\n"
        );
    }
}
