/*!
 * First-Come First-Served
 * Non-preemptive dispatch in arrival order
 */

use super::timeline::Timeline;
use super::traits::Scheduler;
use super::types::SchedulingPolicy;
use crate::process::ProcessStore;
use tracing::debug;

/// Runs each process to completion in arrival order
#[derive(Debug, Clone, Copy, Default)]
pub struct FcfsScheduler;

impl Scheduler for FcfsScheduler {
    fn policy(&self) -> SchedulingPolicy {
        SchedulingPolicy::Fcfs
    }

    fn run(&self, store: &mut ProcessStore, timeline: &mut Timeline) {
        for index in store.arrival_order() {
            let process = store.process_mut(index);

            let idle = timeline.advance_idle_to(process.arrival_time);
            if idle > 0 {
                debug!(pid = process.pid, idle, clock = timeline.now(), "CPU idle until arrival");
            }

            process.dispatch(timeline.now());
            let burst = process.consume(process.burst_time);
            let now = timeline.record(process.pid, burst);
            process.complete(now);

            debug!(
                pid = process.pid,
                start = now - burst,
                finish = now,
                "Process ran to completion"
            );
        }
    }
}
