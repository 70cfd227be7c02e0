//! Core error types for workbreak-core.
//!
//! Every failure is terminal for a single run, so the hierarchy is flat:
//! one enum covering input validation, selection and the timer handoff.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for workbreak-core.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Time did not parse as a 24-hour `HH:MM` value
    #[error("Invalid time '{input}': expected HH:MM in 24-hour format")]
    InvalidTimeFormat {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Ratio was zero, negative or not a number
    #[error("Invalid work-to-break ratio '{0}': must be a positive integer")]
    InvalidRatio(String),

    /// Fudge factor outside (0, 1]
    #[error("Invalid fudge factor {0}: must be greater than 0 and at most 1")]
    InvalidFudgeFactor(f64),

    /// The available time budget is empty
    #[error("No time remaining before the stop time")]
    NoTimeRemaining,

    /// Stop time already passed and rolling over to tomorrow is disabled
    #[error("Stop time {stop} has already passed (now {now})")]
    StopTimeInPast {
        stop: chrono::NaiveTime,
        now: chrono::NaiveTime,
    },

    /// The generator produced no candidate at all
    #[error("No schedule fits: even a single work period would be shorter than {min_work} minutes")]
    NoValidSchedule { min_work: u32 },

    /// Selection input was not a number
    #[error("Invalid choice '{0}': expected a number")]
    InvalidSelection(String),

    /// Selection number outside the candidate list
    #[error("Choice {choice} out of range: pick a number between 1 and {len}")]
    SelectionOutOfRange { choice: usize, len: usize },

    /// External timer ran but reported failure
    #[error("Timer at {path} exited with {status}")]
    LaunchFailed {
        path: PathBuf,
        status: std::process::ExitStatus,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for PlanError
pub type Result<T, E = PlanError> = std::result::Result<T, E>;
