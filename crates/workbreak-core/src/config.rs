//! Planner and launcher settings.
//!
//! There is no configuration file: the caller builds these from CLI flags
//! and the environment, then calls `validate()` before planning.

use std::path::PathBuf;

use crate::error::{PlanError, Result};

/// Minutes of work per minute of break when none is given.
pub const DEFAULT_RATIO: u32 = 5;
/// Generation stops at the first work length under this many minutes.
pub const DEFAULT_MIN_WORK_MINUTES: u32 = 19;
/// Highest interval count tried.
pub const DEFAULT_MAX_INTERVALS: u32 = 19;

#[cfg(windows)]
const DEFAULT_TIMER_PATH: &str = r"C:\Program Files\InstantBoss\InstantBoss.exe";
#[cfg(not(windows))]
const DEFAULT_TIMER_PATH: &str = "/usr/local/bin/instantboss";

/// What to do when the stop time is not later than now today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayWrap {
    /// Treat the stop time as tomorrow's.
    #[default]
    NextDay,
    /// Fail with `StopTimeInPast`.
    SameDay,
}

/// Interval generator settings.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Minutes of work per minute of break.
    pub ratio: u32,
    /// Multiplier applied to the available minutes to leave slack.
    pub fudge_factor: f64,
    pub min_work_minutes: u32,
    pub max_intervals: u32,
    pub day_wrap: DayWrap,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_RATIO,
            fudge_factor: 1.0,
            min_work_minutes: DEFAULT_MIN_WORK_MINUTES,
            max_intervals: DEFAULT_MAX_INTERVALS,
            day_wrap: DayWrap::default(),
        }
    }
}

impl PlannerConfig {
    /// Config with the given ratio and defaults for everything else.
    pub fn with_ratio(ratio: u32) -> Self {
        Self {
            ratio,
            ..Self::default()
        }
    }

    /// Check the values the generator relies on.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRatio` for a zero ratio and `InvalidFudgeFactor` when
    /// the fudge factor is not a finite number in (0, 1].
    pub fn validate(&self) -> Result<()> {
        if self.ratio == 0 {
            return Err(PlanError::InvalidRatio(self.ratio.to_string()));
        }
        if !self.fudge_factor.is_finite() || self.fudge_factor <= 0.0 || self.fudge_factor > 1.0 {
            return Err(PlanError::InvalidFudgeFactor(self.fudge_factor));
        }
        Ok(())
    }
}

/// Parse a user-supplied ratio argument.
///
/// # Errors
///
/// Returns `InvalidRatio` unless `input` is a positive integer.
pub fn parse_ratio(input: &str) -> Result<u32> {
    match input.trim().parse::<u32>() {
        Ok(ratio) if ratio > 0 => Ok(ratio),
        _ => Err(PlanError::InvalidRatio(input.to_string())),
    }
}

/// External timer settings.
#[derive(Debug, Clone)]
pub struct LauncherConfig {
    pub timer_path: PathBuf,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            timer_path: PathBuf::from(DEFAULT_TIMER_PATH),
        }
    }
}

impl LauncherConfig {
    /// Use `path` when given, the platform default otherwise.
    pub fn with_override(path: Option<PathBuf>) -> Self {
        path.map(|timer_path| Self { timer_path })
            .unwrap_or_default()
    }
}
