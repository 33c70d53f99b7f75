/*!
 * Round-Robin
 * FIFO ready queue with a fixed time quantum
 */

use super::timeline::Timeline;
use super::traits::Scheduler;
use super::types::{SchedulingPolicy, TimeQuantum};
use crate::process::ProcessStore;
use std::collections::VecDeque;
use tracing::debug;

/// Round-robin scheduler
///
/// Each dispatch runs the head of the queue for `min(quantum, remaining)`.
/// Processes that arrived during the slice are queued before the preempted
/// process goes to the back, so a newcomer never waits behind a process that
/// was already running when it arrived.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobinScheduler {
    quantum: TimeQuantum,
}

impl RoundRobinScheduler {
    pub fn new(quantum: TimeQuantum) -> Self {
        Self { quantum }
    }
}

impl Scheduler for RoundRobinScheduler {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::RoundRobin
    }

    fn run(&self, store: &mut ProcessStore, timeline: &mut Timeline) {
        let order = store.arrival_order();
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(order.len());
        let mut next = 0;

        loop {
            // Admit everything that has arrived by now, in arrival order
            while let Some(&index) = order.get(next) {
                if store.process(index).arrival_time > timeline.now() {
                    break;
                }
                queue.push_back(index);
                next += 1;
            }

            let Some(index) = queue.pop_front() else {
                let Some(&upcoming) = order.get(next) else {
                    break;
                };
                let arrival = store.process(upcoming).arrival_time;
                let idle = timeline.advance_idle_to(arrival);
                debug!(idle, clock = arrival, "Ready queue empty, idling");
                continue;
            };

            let process = store.process_mut(index);
            process.dispatch(timeline.now());
            let slice = process.consume(self.quantum.ticks());
            let now = timeline.record(process.pid, slice);
            debug!(
                pid = process.pid,
                slice,
                remaining = process.remaining_time,
                clock = now,
                "Quantum elapsed"
            );

            if process.is_complete() {
                process.complete(now);
                debug!(pid = process.pid, finish = now, "Process completed");
                continue;
            }

            // Newcomers from this slice go ahead of the preempted process
            while let Some(&arrived) = order.get(next) {
                if store.process(arrived).arrival_time > now {
                    break;
                }
                queue.push_back(arrived);
                next += 1;
            }
            queue.push_back(index);
        }
    }
}
