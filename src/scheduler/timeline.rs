/*!
 * Execution Timeline
 * Append-only record of execution slices, idle time, and context switches
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// One contiguous stretch of CPU time given to a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub pid: Pid,
    pub start: Ticks,
    pub duration: Ticks,
}

impl Slice {
    #[inline]
    pub const fn end(&self) -> Ticks {
        self.start + self.duration
    }
}

/// Timeline of a single simulation run
///
/// The timeline owns the simulated clock. Every tick between zero and
/// [`Timeline::now`] is accounted for exactly once, either inside a slice or
/// as idle time, so `busy_time() + idle_time() == now()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    slices: Vec<Slice>,
    idle_time: Ticks,
    context_switches: u64,
    now: Ticks,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulated time
    #[inline(always)]
    pub fn now(&self) -> Ticks {
        self.now
    }

    /// Jump the clock forward to `time`, charging the gap as idle time
    ///
    /// Returns the idle ticks added. Times at or before `now` are a no-op.
    pub fn advance_idle_to(&mut self, time: Ticks) -> Ticks {
        let gap = time.saturating_sub(self.now);
        self.idle_time += gap;
        self.now += gap;
        gap
    }

    /// Run `pid` for `duration` ticks starting at the current clock
    ///
    /// A context switch is counted when the previous slice belonged to a
    /// different process. Returns the clock after the slice.
    pub fn record(&mut self, pid: Pid, duration: Ticks) -> Ticks {
        debug_assert!(duration > 0, "zero-length slice for process {pid}");
        if matches!(self.slices.last(), Some(last) if last.pid != pid) {
            self.context_switches += 1;
        }
        self.slices.push(Slice {
            pid,
            start: self.now,
            duration,
        });
        self.now += duration;
        self.now
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn idle_time(&self) -> Ticks {
        self.idle_time
    }

    pub fn context_switches(&self) -> u64 {
        self.context_switches
    }

    /// Sum of all slice durations
    pub fn busy_time(&self) -> Ticks {
        self.slices.iter().map(|s| s.duration).sum()
    }

    /// Total CPU time dispatched to `pid` across all its slices
    pub fn dispatched_time(&self, pid: Pid) -> Ticks {
        self.slices
            .iter()
            .filter(|s| s.pid == pid)
            .map(|s| s.duration)
            .sum()
    }

    /// Pids that the CPU switched to, one entry per counted context switch
    pub fn switch_targets(&self) -> impl Iterator<Item = Pid> + '_ {
        self.slices
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .map(|w| w[1].pid)
    }

    /// Copy of the slices with back-to-back runs of the same process merged
    pub fn coalesced(&self) -> Vec<Slice> {
        let mut merged: Vec<Slice> = Vec::with_capacity(self.slices.len());
        for slice in &self.slices {
            match merged.last_mut() {
                Some(last) if last.pid == slice.pid && last.end() == slice.start => {
                    last.duration += slice.duration;
                }
                _ => merged.push(*slice),
            }
        }
        merged
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_advances_clock_and_counts_switches() {
        let mut timeline = Timeline::new();
        assert_eq!(timeline.record(1, 3), 3);
        assert_eq!(timeline.record(1, 2), 5);
        assert_eq!(timeline.context_switches(), 0);
        assert_eq!(timeline.record(2, 1), 6);
        assert_eq!(timeline.context_switches(), 1);
        assert_eq!(timeline.slices()[2].start, 5);
    }

    #[test]
    fn test_idle_accounting() {
        let mut timeline = Timeline::new();
        assert_eq!(timeline.advance_idle_to(4), 4);
        timeline.record(1, 2);
        assert_eq!(timeline.advance_idle_to(3), 0);
        assert_eq!(timeline.advance_idle_to(10), 4);
        assert_eq!(timeline.idle_time(), 8);
        assert_eq!(timeline.busy_time() + timeline.idle_time(), timeline.now());
    }

    #[test]
    fn test_coalesced_merges_adjacent_runs_only() {
        let mut timeline = Timeline::new();
        timeline.record(1, 1);
        timeline.record(1, 1);
        timeline.advance_idle_to(5);
        timeline.record(1, 1);
        timeline.record(2, 2);

        let merged = timeline.coalesced();
        assert_eq!(
            merged,
            vec![
                Slice { pid: 1, start: 0, duration: 2 },
                Slice { pid: 1, start: 5, duration: 1 },
                Slice { pid: 2, start: 6, duration: 2 },
            ]
        );
        assert_eq!(timeline.dispatched_time(1), 3);
        assert_eq!(timeline.switch_targets().collect::<Vec<_>>(), vec![2]);
    }
}
