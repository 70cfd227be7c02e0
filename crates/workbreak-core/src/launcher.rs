//! Handoff to an external work timer.
//!
//! The timer is optional. Callers `probe()` once; when it reports the timer
//! missing the handoff is skipped rather than treated as an error.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

use crate::config::LauncherConfig;
use crate::error::{PlanError, Result};
use crate::planner::Candidate;
use crate::selection;

/// Something that can run a chosen schedule.
pub trait TimerLauncher {
    /// Whether the timer is installed.
    fn probe(&self) -> bool;

    /// Start the timer with the candidate's three numbers.
    fn launch(&self, candidate: &Candidate) -> Result<()>;
}

/// Timer executable invoked as `<path> <work> <break> <count>`.
#[derive(Debug, Clone)]
pub struct ExternalTimer {
    path: PathBuf,
}

impl ExternalTimer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &LauncherConfig) -> Self {
        Self::new(config.timer_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Positional arguments passed to the timer.
    pub fn args(candidate: &Candidate) -> [String; 3] {
        [
            candidate.work_minutes.to_string(),
            candidate.break_minutes.to_string(),
            candidate.interval_count.to_string(),
        ]
    }
}

impl TimerLauncher for ExternalTimer {
    fn probe(&self) -> bool {
        let found = self.path.is_file();
        if !found {
            info!(path = %self.path.display(), "timer not installed, skipping handoff");
        }
        found
    }

    fn launch(&self, candidate: &Candidate) -> Result<()> {
        let args = Self::args(candidate);
        info!(path = %self.path.display(), ?args, "starting timer");

        let status = Command::new(&self.path).args(&args).status()?;
        if !status.success() {
            return Err(PlanError::LaunchFailed {
                path: self.path.clone(),
                status,
            });
        }
        Ok(())
    }
}

/// Resolve `choice` and start the timer with it.
///
/// The choice is validated before anything is launched, so an out-of-range
/// number never reaches the timer. Callers skip this when `probe()` failed.
///
/// # Errors
///
/// Returns the errors of [`selection::select`] and [`TimerLauncher::launch`].
pub fn handoff<L: TimerLauncher + ?Sized>(
    launcher: &L,
    candidates: &[Candidate],
    choice: usize,
    min_work: u32,
) -> Result<Candidate> {
    let candidate = *selection::select(candidates, choice, min_work)?;
    launcher.launch(&candidate)?;
    Ok(candidate)
}
