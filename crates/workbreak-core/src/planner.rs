//! Interval generator.
//!
//! Splits a minute budget into N work periods and N-1 breaks whose lengths
//! follow the work-to-break ratio, for N = 1, 2, ... until the work period
//! would drop under the configured floor. Rounding can push a layout over
//! budget; the fit step then trims work twice for every break trim until
//! it fits again.

use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::{debug, info};

use crate::clock;
use crate::config::PlannerConfig;
use crate::error::{PlanError, Result};

/// One proposed partition of the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Length of each work period.
    pub work_minutes: u32,
    /// Length of each break period. Unused when `interval_count` is 1.
    pub break_minutes: u32,
    /// Number of work periods.
    pub interval_count: u32,
}

impl Candidate {
    pub fn break_count(&self) -> u32 {
        self.interval_count.saturating_sub(1)
    }

    /// Break length as shown to the user: 0 when there is no break at all.
    pub fn displayed_break(&self) -> u32 {
        if self.break_count() == 0 {
            0
        } else {
            self.break_minutes
        }
    }

    pub fn total_work(&self) -> u32 {
        self.work_minutes.saturating_mul(self.interval_count)
    }

    pub fn total_break(&self) -> u32 {
        self.break_minutes.saturating_mul(self.break_count())
    }

    pub fn total_minutes(&self) -> u32 {
        self.total_work().saturating_add(self.total_break())
    }
}

/// Candidates for one run, in increasing interval count.
#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    /// Budget after the fudge factor was applied.
    pub available_minutes: f64,
    pub ratio: u32,
    pub candidates: Vec<Candidate>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }
}

/// Raw result of fitting one interval count to the budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fit {
    pub work_minutes: i64,
    pub break_minutes: i64,
    /// Number of one-minute reductions applied.
    pub trims: u32,
}

fn layout_minutes(work: i64, brk: i64, intervals: i64) -> i64 {
    work * intervals + brk * (intervals - 1)
}

pub(crate) fn fit_interval(available: f64, intervals: u32, ratio: u32) -> Fit {
    let n = i64::from(intervals);
    let ratio = i64::from(ratio);
    let denominator = n * ratio + n - 1;

    let mut brk = (available / denominator as f64).round_ties_even() as i64;
    let mut work = brk * ratio;
    let mut trims = 0u32;

    while layout_minutes(work, brk, n) as f64 > available {
        trims += 1;
        if trims % 3 != 0 {
            work -= 1;
        } else {
            brk -= 1;
        }
    }

    Fit {
        work_minutes: work,
        break_minutes: brk,
        trims,
    }
}

/// Generate candidates for a budget of `available` minutes.
///
/// The budget is used as given; apply the fudge factor before calling, or
/// use [`plan`]. Generation stops at the first interval count whose work
/// length falls under `min_work_minutes`; later counts are never tried.
/// The result may be empty.
///
/// # Errors
///
/// Returns `InvalidRatio` for a zero ratio and `NoTimeRemaining` when
/// `available` is not a positive, finite number.
pub fn generate(available: f64, config: &PlannerConfig) -> Result<Vec<Candidate>> {
    if config.ratio == 0 {
        return Err(PlanError::InvalidRatio(config.ratio.to_string()));
    }
    if !available.is_finite() || available <= 0.0 {
        return Err(PlanError::NoTimeRemaining);
    }

    let mut candidates = Vec::new();
    for intervals in 1..=config.max_intervals {
        let fit = fit_interval(available, intervals, config.ratio);
        debug!(
            intervals,
            work = fit.work_minutes,
            brk = fit.break_minutes,
            trims = fit.trims,
            "fitted interval count"
        );

        if fit.work_minutes < i64::from(config.min_work_minutes) {
            debug!(intervals, floor = config.min_work_minutes, "work period under floor, stopping");
            break;
        }
        // A negative break cannot be handed to the timer.
        let Ok(break_minutes) = u32::try_from(fit.break_minutes) else {
            break;
        };
        let Ok(work_minutes) = u32::try_from(fit.work_minutes) else {
            break;
        };

        candidates.push(Candidate {
            work_minutes,
            break_minutes,
            interval_count: intervals,
        });
    }

    Ok(candidates)
}

/// Plan from `now` until the next `stop`, applying the config's fudge
/// factor and day-wrap policy.
///
/// # Errors
///
/// Returns config validation errors and the errors of
/// [`clock::minutes_until`] and [`generate`].
pub fn plan(now: NaiveDateTime, stop: NaiveTime, config: &PlannerConfig) -> Result<Plan> {
    config.validate()?;

    let minutes = clock::minutes_until(now, stop, config.day_wrap)?;
    let available = minutes * config.fudge_factor;
    info!(
        now = %now.format("%H:%M:%S"),
        stop = %stop.format(clock::STOP_TIME_FORMAT),
        minutes,
        available,
        ratio = config.ratio,
        "planning intervals"
    );

    let candidates = generate(available, config)?;
    Ok(Plan {
        available_minutes: available,
        ratio: config.ratio,
        candidates,
    })
}
