/*!
 * Process Store
 * Arena of process descriptors shared by every simulation run
 */

use super::descriptor::ProcessDescriptor;
use crate::core::errors::InputError;
use crate::core::types::{Pid, Ticks};
use ahash::AHashSet;
use tracing::debug;

/// Canonical process list
///
/// Schedulers address descriptors by their index in the store, which stays
/// stable for the lifetime of the store since nothing is added or removed
/// after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessStore {
    processes: Vec<ProcessDescriptor>,
}

impl ProcessStore {
    /// Build a store, rejecting records no run could complete
    ///
    /// Line numbers in errors are 1-based positions in `processes`.
    pub fn new(processes: Vec<ProcessDescriptor>) -> Result<Self, InputError> {
        let mut validator = RecordValidator::with_capacity(processes.len());
        for (i, process) in processes.iter().enumerate() {
            validator.check(i + 1, process)?;
        }

        let mut store = Self { processes };
        store.reset();
        Ok(store)
    }

    /// Restore every descriptor to its pre-run state
    pub fn reset(&mut self) {
        for process in &mut self.processes {
            process.reset();
        }
        debug!(processes = self.processes.len(), "Process store reset");
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProcessDescriptor> {
        self.processes.iter()
    }

    pub fn as_slice(&self) -> &[ProcessDescriptor] {
        &self.processes
    }

    pub fn by_pid(&self, pid: Pid) -> Option<&ProcessDescriptor> {
        self.processes.iter().find(|p| p.pid == pid)
    }

    #[inline]
    pub(crate) fn process(&self, index: usize) -> &ProcessDescriptor {
        &self.processes[index]
    }

    #[inline]
    pub(crate) fn process_mut(&mut self, index: usize) -> &mut ProcessDescriptor {
        &mut self.processes[index]
    }

    /// Store indices sorted by arrival time, ties kept in store order
    pub fn arrival_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.processes.len()).collect();
        // sort_by_key is stable
        order.sort_by_key(|&i| self.processes[i].arrival_time);
        order
    }

    pub fn total_burst_time(&self) -> Ticks {
        self.processes.iter().map(|p| p.burst_time).sum()
    }

    /// Finish time of the last process to complete
    pub fn makespan(&self) -> Ticks {
        self.processes
            .iter()
            .map(|p| p.finish_time)
            .max()
            .unwrap_or(0)
    }
}

/// Per-record checks shared by the loader and [`ProcessStore::new`]
///
/// Every tick a run can reach is bounded by the latest arrival plus the sum of
/// all bursts. Keeping that horizon, times the process count, representable
/// keeps both the clock and the per-run totals from overflowing.
#[derive(Debug, Default)]
pub(crate) struct RecordValidator {
    seen: AHashSet<Pid>,
    latest_arrival: Ticks,
    total_burst: Ticks,
}

impl RecordValidator {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: AHashSet::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub(crate) fn check(
        &mut self,
        line: usize,
        process: &ProcessDescriptor,
    ) -> Result<(), InputError> {
        let pid = process.pid;
        if process.burst_time == 0 {
            return Err(InputError::ZeroBurst { line, pid });
        }
        let cost = process.context_switch_cost;
        if !cost.is_finite() {
            return Err(InputError::InvalidField {
                line,
                field: "switch_cost".to_string(),
                value: cost.to_string(),
            });
        }
        if cost < 0.0 {
            return Err(InputError::NegativeCost { line, pid });
        }
        if !self.seen.insert(pid) {
            return Err(InputError::DuplicatePid { line, pid });
        }

        let latest_arrival = self.latest_arrival.max(process.arrival_time);
        let total_burst = self
            .total_burst
            .checked_add(process.burst_time)
            .filter(|&total| {
                latest_arrival
                    .checked_add(total)
                    .and_then(|horizon| horizon.checked_mul(self.seen.len() as Ticks))
                    .is_some()
            })
            .ok_or(InputError::ClockOverflow {
                line,
                pid,
                max: Ticks::MAX,
            })?;

        self.latest_arrival = latest_arrival;
        self.total_burst = total_burst;
        Ok(())
    }
}
