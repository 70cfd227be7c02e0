//! Text and JSON rendering of a candidate list.

use serde::Serialize;
use std::fmt::Write;

use crate::error::Result;
use crate::planner::{Candidate, Plan};
use crate::timeline::Period;

pub const TABLE_HEADER: &str = "CHOICE\tWORK\tBREAK\tPERIODS\tT.WORK\tT.BREAK\tTOTAL TIME";

/// Tab-separated table, one row per candidate, numbered from 1.
pub fn render_table(candidates: &[Candidate]) -> String {
    let mut out = String::with_capacity(TABLE_HEADER.len() + 1 + candidates.len() * 32);
    out.push_str(TABLE_HEADER);
    out.push('\n');

    for (idx, c) in candidates.iter().enumerate() {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            idx + 1,
            c.work_minutes,
            c.displayed_break(),
            c.interval_count,
            c.total_work(),
            c.total_break(),
            c.total_minutes()
        );
    }
    out
}

#[derive(Serialize)]
struct CandidateRow {
    choice: usize,
    work_minutes: u32,
    break_minutes: u32,
    interval_count: u32,
    total_work: u32,
    total_break: u32,
    total_minutes: u32,
}

#[derive(Serialize)]
struct PlanView<'a> {
    available_minutes: f64,
    ratio: u32,
    candidates: Vec<CandidateRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop_time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    choice: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    timeline: Option<&'a [Period]>,
}

/// A chosen candidate and its wall-clock layout.
#[derive(Debug, Clone, Copy)]
pub struct Chosen<'a> {
    pub choice: usize,
    pub timeline: &'a [Period],
}

/// Pretty JSON with the same columns as the table, plus the chosen
/// candidate's timeline when there is one. Always a single document.
///
/// # Errors
///
/// Returns `Json` if serialization fails.
pub fn render_json(
    plan: &Plan,
    stop_time: Option<&str>,
    chosen: Option<Chosen<'_>>,
) -> Result<String> {
    let view = PlanView {
        available_minutes: plan.available_minutes,
        ratio: plan.ratio,
        candidates: plan
            .candidates
            .iter()
            .enumerate()
            .map(|(idx, c)| CandidateRow {
                choice: idx + 1,
                work_minutes: c.work_minutes,
                break_minutes: c.displayed_break(),
                interval_count: c.interval_count,
                total_work: c.total_work(),
                total_break: c.total_break(),
                total_minutes: c.total_minutes(),
            })
            .collect(),
        stop_time,
        choice: chosen.map(|c| c.choice),
        timeline: chosen.map(|c| c.timeline),
    };
    Ok(serde_json::to_string_pretty(&view)?)
}
