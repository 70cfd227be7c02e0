//! # workbreak Core Library
//!
//! Computes candidate work/break interval schedules between now and a stop
//! time, then optionally hands the chosen one to an external timer program.
//! The `workbreak` CLI binary is a thin layer over this crate.
//!
//! ## Architecture
//!
//! - **Planner**: bounded search over interval counts that fits work and
//!   break lengths to a ratio and trims rounding overshoot
//! - **Clock**: stop-time parsing and the available minute budget
//! - **Presenter**: tab-separated table and JSON views of a plan
//! - **Selection**: validated, injectable choice of one candidate
//! - **Launcher**: capability-checked handoff to an external timer
//! - **Timeline**: wall-clock expansion of a candidate
//!
//! ## Key Components
//!
//! - [`plan`] / [`generate`]: the interval generator
//! - [`Candidate`]: one proposed schedule
//! - [`PlannerConfig`]: ratio, fudge factor and limits
//! - [`TimerLauncher`]: trait for the external timer

pub mod clock;
pub mod config;
pub mod error;
pub mod launcher;
pub mod planner;
pub mod presenter;
pub mod selection;
pub mod timeline;

pub use clock::{minutes_until, parse_stop_time};
pub use config::{parse_ratio, DayWrap, LauncherConfig, PlannerConfig};
pub use error::{PlanError, Result};
pub use launcher::{handoff, ExternalTimer, TimerLauncher};
pub use planner::{generate, plan, Candidate, Plan};
pub use presenter::{render_json, render_table, Chosen};
pub use selection::{parse_choice, prompt_choice, select};
pub use timeline::{expand, render_timeline, Period, PeriodKind};
