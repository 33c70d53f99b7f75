/*!
 * Process Loader
 * Parse whitespace-delimited process records into a store
 *
 * Record format, one per line:
 *
 * ```text
 * # id arrival burst switch_cost
 * 1    0       5     0.5
 * 2    1       3     0.5
 * ```
 */

use super::descriptor::ProcessDescriptor;
use super::store::{ProcessStore, RecordValidator};
use crate::core::errors::InputError;
use crate::core::types::{Pid, SwitchCost, Ticks};
use std::path::Path;
use std::str::{FromStr, SplitWhitespace};
use tracing::info;

/// Parse process records from text
pub fn parse_processes(input: &str) -> Result<Vec<ProcessDescriptor>, InputError> {
    let mut processes = Vec::new();
    let mut validator = RecordValidator::default();

    for (index, raw) in input.lines().enumerate() {
        let line = index + 1;
        let record = raw.trim();
        if record.is_empty() || record.starts_with('#') {
            continue;
        }

        let mut fields = record.split_whitespace();
        let pid: Pid = next_field(&mut fields, line, "id")?;
        let arrival: Ticks = next_field(&mut fields, line, "arrival")?;
        let burst: Ticks = next_field(&mut fields, line, "burst")?;
        let cost: SwitchCost = next_field(&mut fields, line, "switch_cost")?;

        if let Some(extra) = fields.next() {
            return Err(InputError::TrailingField {
                line,
                value: extra.to_string(),
            });
        }
        let process = ProcessDescriptor::new(pid, arrival, burst, cost);
        validator.check(line, &process)?;
        processes.push(process);
    }

    Ok(processes)
}

/// Read and parse a process file into a fresh store
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ProcessStore, InputError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| InputError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let processes = parse_processes(&contents)?;
    info!(path = %path.display(), processes = processes.len(), "Loaded process records");
    ProcessStore::new(processes)
}

fn next_field<T: FromStr>(
    fields: &mut SplitWhitespace<'_>,
    line: usize,
    field: &'static str,
) -> Result<T, InputError> {
    let raw = fields.next().ok_or_else(|| InputError::MissingField {
        line,
        field: field.to_string(),
    })?;
    raw.parse().map_err(|_| InputError::InvalidField {
        line,
        field: field.to_string(),
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_records() {
        let processes = parse_processes("1 0 5 0\n2 1 3 0.5\n").unwrap();
        assert_eq!(processes.len(), 2);
        assert_eq!(processes[1], ProcessDescriptor::new(2, 1, 3, 0.5));
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let processes = parse_processes("# header\n\n  1 0 5 0  \n").unwrap();
        assert_eq!(processes, vec![ProcessDescriptor::new(1, 0, 5, 0.0)]);
    }

    #[test]
    fn test_missing_field() {
        let err = parse_processes("1 0 5\n").unwrap_err();
        assert_eq!(
            err,
            InputError::MissingField {
                line: 1,
                field: "switch_cost".to_string()
            }
        );
    }

    #[test]
    fn test_negative_arrival_is_invalid() {
        let err = parse_processes("1 -2 5 0\n").unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidField {
                line: 1,
                field: "arrival".to_string(),
                value: "-2".to_string()
            }
        );
    }

    #[test]
    fn test_trailing_field() {
        let err = parse_processes("1 0 5 0 extra\n").unwrap_err();
        assert!(matches!(err, InputError::TrailingField { line: 1, .. }));
    }

    #[test]
    fn test_duplicate_pid_reports_second_line() {
        let err = parse_processes("1 0 5 0\n# dup\n1 2 3 0\n").unwrap_err();
        assert_eq!(err, InputError::DuplicatePid { line: 3, pid: 1 });
    }

    #[test]
    fn test_finish_time_past_tick_range_is_rejected() {
        let err = parse_processes("1 18446744073709551615 1 0\n").unwrap_err();
        assert_eq!(
            err,
            InputError::ClockOverflow {
                line: 1,
                pid: 1,
                max: u64::MAX
            }
        );
        assert!(parse_processes("1 18446744073709551614 1 0\n").is_ok());
    }

    #[test]
    fn test_non_finite_cost_is_invalid() {
        let err = parse_processes("1 0 2 NaN\n").unwrap_err();
        assert!(matches!(err, InputError::InvalidField { line: 1, .. }));
    }

    #[test]
    fn test_zero_burst_and_negative_cost() {
        assert_eq!(
            parse_processes("4 0 0 0\n").unwrap_err(),
            InputError::ZeroBurst { line: 1, pid: 4 }
        );
        assert_eq!(
            parse_processes("4 0 2 -1\n").unwrap_err(),
            InputError::NegativeCost { line: 1, pid: 4 }
        );
    }
}
