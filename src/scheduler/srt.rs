/*!
 * Shortest Remaining Time
 * Preemptive shortest-job-next, re-evaluated at every tick
 */

use super::timeline::Timeline;
use super::traits::Scheduler;
use super::types::SchedulingPolicy;
use crate::core::types::Ticks;
use crate::process::ProcessStore;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// Ready-set entry, ordered as a min-heap on remaining time
///
/// `rank` is the process's position in arrival order and breaks ties, so
/// equal remaining times favour the earlier arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ReadyEntry {
    remaining: Ticks,
    rank: usize,
    index: usize,
}

impl Ord for ReadyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so reverse both keys
        other
            .remaining
            .cmp(&self.remaining)
            .then_with(|| other.rank.cmp(&self.rank))
    }
}

impl PartialOrd for ReadyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Preemptive SRT scheduler
///
/// Time advances one tick per step and every step picks the admitted process
/// with the least remaining time, so a shorter arrival preempts the running
/// process at the next tick boundary. Each step is recorded as its own
/// one-tick slice.
#[derive(Debug, Clone, Copy, Default)]
pub struct SrtScheduler;

impl Scheduler for SrtScheduler {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::ShortestRemainingTime
    }

    fn run(&self, store: &mut ProcessStore, timeline: &mut Timeline) {
        let order = store.arrival_order();
        let mut ready = BinaryHeap::with_capacity(order.len());
        let mut next = 0;
        let mut completed = 0;

        while completed < order.len() {
            while let Some(&index) = order.get(next) {
                if store.process(index).arrival_time > timeline.now() {
                    break;
                }
                ready.push(ReadyEntry {
                    remaining: store.process(index).remaining_time,
                    rank: next,
                    index,
                });
                next += 1;
            }

            let Some(entry) = ready.pop() else {
                // Nothing runnable: jump straight to the next arrival
                let Some(&upcoming) = order.get(next) else {
                    break;
                };
                let arrival = store.process(upcoming).arrival_time;
                let idle = timeline.advance_idle_to(arrival);
                debug!(idle, clock = arrival, "CPU idle until next arrival");
                continue;
            };

            let process = store.process_mut(entry.index);
            let clock = timeline.now();
            if process.start_time.is_none() {
                debug!(pid = process.pid, clock, "First dispatch");
            }
            process.dispatch(clock);
            process.consume(1);
            let now = timeline.record(process.pid, 1);
            trace!(
                pid = process.pid,
                clock,
                remaining = process.remaining_time,
                "Ran one tick"
            );

            if process.is_complete() {
                process.complete(now);
                completed += 1;
                debug!(pid = process.pid, finish = now, "Process completed");
            } else {
                ready.push(ReadyEntry {
                    remaining: process.remaining_time,
                    ..entry
                });
            }
        }
    }
}
