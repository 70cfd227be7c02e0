//! Picking one candidate by its 1-based table number.

use std::io::{BufRead, Write};

use crate::error::{PlanError, Result};
use crate::planner::Candidate;

pub const PROMPT: &str = "CHOOSE: ";

/// Parse a typed choice number.
///
/// # Errors
///
/// Returns `InvalidSelection` when `input` is not a non-negative integer.
pub fn parse_choice(input: &str) -> Result<usize> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| PlanError::InvalidSelection(trimmed.to_string()))
}

/// Resolve a 1-based choice against the candidate list.
///
/// # Errors
///
/// Returns `NoValidSchedule` for an empty list and `SelectionOutOfRange`
/// when `choice` is 0 or past the end.
pub fn select(candidates: &[Candidate], choice: usize, min_work: u32) -> Result<&Candidate> {
    if candidates.is_empty() {
        return Err(PlanError::NoValidSchedule { min_work });
    }
    choice
        .checked_sub(1)
        .and_then(|idx| candidates.get(idx))
        .ok_or(PlanError::SelectionOutOfRange {
            choice,
            len: candidates.len(),
        })
}

/// Write the prompt and read one choice number.
///
/// # Errors
///
/// Returns `Io` on read/write failure, `InvalidSelection` on end of input
/// or a non-numeric line.
pub fn prompt_choice<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<usize> {
    writer.write_all(PROMPT.as_bytes())?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(PlanError::InvalidSelection(String::new()));
    }
    parse_choice(&line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn list() -> Vec<Candidate> {
        vec![
            Candidate {
                work_minutes: 60,
                break_minutes: 12,
                interval_count: 1,
            },
            Candidate {
                work_minutes: 25,
                break_minutes: 5,
                interval_count: 2,
            },
        ]
    }

    #[test]
    fn test_select_in_range() {
        let candidates = list();
        assert_eq!(select(&candidates, 1, 19).unwrap().interval_count, 1);
        assert_eq!(select(&candidates, 2, 19).unwrap().work_minutes, 25);
    }

    #[test]
    fn test_select_out_of_range() {
        let candidates = list();
        for choice in [0, 3, 99] {
            let err = select(&candidates, choice, 19).unwrap_err();
            assert!(
                matches!(err, PlanError::SelectionOutOfRange { len: 2, .. }),
                "choice {choice} should be out of range"
            );
        }
    }

    #[test]
    fn test_select_from_empty_list() {
        let err = select(&[], 1, 19).unwrap_err();
        assert!(matches!(err, PlanError::NoValidSchedule { min_work: 19 }));
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("2\n").unwrap(), 2);
        assert_eq!(parse_choice("  10 ").unwrap(), 10);
        assert!(matches!(parse_choice("two"), Err(PlanError::InvalidSelection(_))));
        assert!(matches!(parse_choice("-1"), Err(PlanError::InvalidSelection(_))));
    }

    #[test]
    fn test_prompt_choice_writes_prompt() {
        let mut out = Vec::new();
        let choice = prompt_choice(Cursor::new("3\n"), &mut out).unwrap();
        assert_eq!(choice, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "CHOOSE: ");
    }

    #[test]
    fn test_prompt_choice_end_of_input() {
        let err = prompt_choice(Cursor::new(""), Vec::new()).unwrap_err();
        assert!(matches!(err, PlanError::InvalidSelection(_)));
    }
}
