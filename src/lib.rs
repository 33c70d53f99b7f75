/*!
 * CPU Scheduling Simulator Library
 * Deterministic single-CPU replay of FCFS, SRT, and Round-Robin dispatch
 */

pub mod core;
pub mod metrics;
pub mod monitoring;
pub mod output;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::{
    InputError, Pid, SchedulerError, SchedulerResult, SimulatorConfig, SimulatorError, Ticks,
};
pub use metrics::{MetricsCalculator, SimulationReport, SwitchCostPolicy};
pub use monitoring::init_tracing;
pub use process::{load_from_path, parse_processes, ProcessDescriptor, ProcessStore};
pub use scheduler::{
    SchedulingPolicy, SimulationOutcome, Simulator, Slice, TimeQuantum, Timeline,
};
