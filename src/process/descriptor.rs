/*!
 * Process Descriptor
 * Static process parameters plus the per-run state mutated by schedulers
 */

use crate::core::serde::is_none;
use crate::core::types::{Pid, SwitchCost, Ticks};
use serde::{Deserialize, Serialize};

/// One simulated process
///
/// `pid`, `arrival_time`, `burst_time` and `context_switch_cost` come from the
/// input record and never change. The remaining fields are per-run state:
/// restored by [`ProcessDescriptor::reset`] and written only by the active
/// scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessDescriptor {
    pub pid: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub context_switch_cost: SwitchCost,
    pub remaining_time: Ticks,
    #[serde(skip_serializing_if = "is_none")]
    pub start_time: Option<Ticks>,
    pub finish_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

impl ProcessDescriptor {
    pub fn new(
        pid: Pid,
        arrival_time: Ticks,
        burst_time: Ticks,
        context_switch_cost: SwitchCost,
    ) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            context_switch_cost,
            remaining_time: burst_time,
            start_time: None,
            finish_time: 0,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Restore per-run state to its pre-simulation values
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.start_time = None;
        self.finish_time = 0;
        self.waiting_time = 0;
        self.turnaround_time = 0;
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining_time == 0
    }

    /// Record the first dispatch; later dispatches leave `start_time` alone
    #[inline]
    pub(crate) fn dispatch(&mut self, now: Ticks) {
        debug_assert!(
            now >= self.arrival_time,
            "process {} dispatched at {} before arrival {}",
            self.pid,
            now,
            self.arrival_time
        );
        self.start_time.get_or_insert(now);
    }

    /// Consume up to `ticks` of CPU time, returning how much was actually used
    #[inline]
    pub(crate) fn consume(&mut self, ticks: Ticks) -> Ticks {
        let used = ticks.min(self.remaining_time);
        self.remaining_time -= used;
        used
    }

    /// Finalize completion statistics once `remaining_time` reaches zero
    pub(crate) fn complete(&mut self, now: Ticks) {
        debug_assert!(self.is_complete(), "process {} completed early", self.pid);
        self.finish_time = now;
        self.turnaround_time = now.saturating_sub(self.arrival_time);
        self.waiting_time = self.turnaround_time.saturating_sub(self.burst_time);
    }

    /// Time from arrival to first dispatch, once dispatched
    pub fn response_time(&self) -> Option<Ticks> {
        self.start_time
            .map(|start| start.saturating_sub(self.arrival_time))
    }
}
