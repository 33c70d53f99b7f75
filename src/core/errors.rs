/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::{Pid, Ticks};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scheduler operation result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Process record loading errors
///
/// Line numbers are 1-based and refer to the raw input, comments included.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum InputError {
    #[error("Failed to read process file {path}: {reason}")]
    #[diagnostic(
        code(input::io),
        help("Check that the file exists and is readable. Set SCHED_INPUT to override the path.")
    )]
    Io { path: String, reason: String },

    #[error("Line {line}: missing field '{field}'")]
    #[diagnostic(
        code(input::missing_field),
        help("Each record needs four whitespace-separated fields: id arrival burst switch_cost")
    )]
    MissingField { line: usize, field: String },

    #[error("Line {line}: invalid {field} '{value}'")]
    #[diagnostic(
        code(input::invalid_field),
        help("id, arrival and burst must be non-negative integers; switch_cost is a number")
    )]
    InvalidField {
        line: usize,
        field: String,
        value: String,
    },

    #[error("Line {line}: unexpected trailing field '{value}'")]
    #[diagnostic(code(input::trailing_field))]
    TrailingField { line: usize, value: String },

    #[error("Line {line}: process {pid} has a zero burst time")]
    #[diagnostic(
        code(input::zero_burst),
        help("Every process must require at least one tick of CPU time.")
    )]
    ZeroBurst { line: usize, pid: Pid },

    #[error("Line {line}: process {pid} has a negative switch cost")]
    #[diagnostic(code(input::negative_cost))]
    NegativeCost { line: usize, pid: Pid },

    #[error("Line {line}: duplicate process id {pid}")]
    #[diagnostic(
        code(input::duplicate_pid),
        help("Process ids must be unique across the input.")
    )]
    DuplicatePid { line: usize, pid: Pid },

    #[error("Line {line}: process {pid} pushes simulated time past {max} ticks")]
    #[diagnostic(
        code(input::clock_overflow),
        help("The latest arrival plus the sum of all bursts, times the process count, must fit in 64-bit ticks.")
    )]
    ClockOverflow { line: usize, pid: Pid, max: Ticks },
}

/// Scheduler-related errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid time quantum: {0} (must be a positive integer)")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Round-robin needs a quantum of at least one tick.")
    )]
    InvalidQuantum(i64),

    #[error("Round-robin scheduling requires a time quantum")]
    #[diagnostic(code(scheduler::missing_quantum))]
    MissingQuantum,

    #[error("Invalid scheduling policy: {0}")]
    #[diagnostic(
        code(scheduler::invalid_policy),
        help("Use fcfs, srt, or rr (round_robin).")
    )]
    InvalidPolicy(String),

    #[error("Invalid switch cost policy: {0}")]
    #[diagnostic(
        code(scheduler::invalid_switch_cost),
        help("Use last, mean, incoming, or a non-negative number.")
    )]
    InvalidSwitchCost(String),

    #[error("Cannot simulate an empty process set")]
    #[diagnostic(
        code(scheduler::empty_process_set),
        help("Averages are undefined without processes. Load at least one record.")
    )]
    EmptyProcessSet,

    #[error("Scheduler invariant violated for process {pid}: {reason}")]
    #[diagnostic(
        code(scheduler::invariant_violation),
        help("This is an engine bug, not an input problem. Please report it.")
    )]
    InvariantViolation { pid: Pid, reason: String },

    #[error("Timeline ends at {timeline_end} but last process finished at {last_finish}")]
    #[diagnostic(code(scheduler::timeline_mismatch))]
    TimelineMismatch { timeline_end: Ticks, last_finish: Ticks },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimulatorError {
    #[error("Input error: {0}")]
    #[diagnostic(transparent)]
    Input(#[from] InputError),

    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(simulator::configuration_error),
        help("Review the SCHED_* environment variables.")
    )]
    Configuration(String),

    #[error("I/O error: {0}")]
    #[diagnostic(code(simulator::io_error))]
    Io(String),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(simulator::serialization_error))]
    Serialization(String),
}

impl From<std::io::Error> for SimulatorError {
    fn from(err: std::io::Error) -> Self {
        SimulatorError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SimulatorError {
    fn from(err: serde_json::Error) -> Self {
        SimulatorError::Serialization(err.to_string())
    }
}
