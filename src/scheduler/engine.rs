/*!
 * Simulation Engine
 * Reset, dispatch, verify, and measure a single scheduling run
 */

use super::fcfs::FcfsScheduler;
use super::round_robin::RoundRobinScheduler;
use super::srt::SrtScheduler;
use super::timeline::Timeline;
use super::traits::Scheduler;
use super::types::{SchedulingPolicy, TimeQuantum};
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::metrics::{MetricsCalculator, SimulationReport, SwitchCostPolicy};
use crate::monitoring::generate_run_id;
use crate::process::{ProcessDescriptor, ProcessStore};
use serde::Serialize;
use tracing::{info, info_span};

/// Everything a presenter needs from one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutcome {
    pub policy: SchedulingPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantum: Option<TimeQuantum>,
    pub processes: Vec<ProcessDescriptor>,
    pub timeline: Timeline,
    pub report: SimulationReport,
}

/// Resolve a policy selection into a runnable scheduler
///
/// All configuration errors surface here, before any process state is touched.
pub fn build_scheduler(
    policy: SchedulingPolicy,
    quantum: Option<TimeQuantum>,
) -> SchedulerResult<Box<dyn Scheduler>> {
    Ok(match policy {
        SchedulingPolicy::Fcfs => Box::new(FcfsScheduler),
        SchedulingPolicy::ShortestRemainingTime => Box::new(SrtScheduler),
        SchedulingPolicy::RoundRobin => {
            let quantum = quantum.ok_or(SchedulerError::MissingQuantum)?;
            Box::new(RoundRobinScheduler::new(quantum))
        }
    })
}

/// Owns a process store and runs policies against it
///
/// Runs take `&mut self`, so a store can never be shared by two live runs.
#[derive(Debug, Clone)]
pub struct Simulator {
    store: ProcessStore,
    metrics: MetricsCalculator,
}

impl Simulator {
    pub fn new(store: ProcessStore) -> Self {
        Self {
            store,
            metrics: MetricsCalculator::default(),
        }
    }

    pub fn with_switch_cost(mut self, switch_cost: SwitchCostPolicy) -> Self {
        self.metrics = MetricsCalculator::new(switch_cost);
        self
    }

    pub fn store(&self) -> &ProcessStore {
        &self.store
    }

    /// Run `policy` to completion on a freshly reset store
    pub fn run(
        &mut self,
        policy: SchedulingPolicy,
        quantum: Option<TimeQuantum>,
    ) -> SchedulerResult<SimulationOutcome> {
        if self.store.is_empty() {
            return Err(SchedulerError::EmptyProcessSet);
        }
        let scheduler = build_scheduler(policy, quantum)?;
        let quantum = quantum.filter(|_| policy.needs_quantum());

        let run_id = generate_run_id();
        let span = info_span!("simulation", %run_id, policy = %policy);
        let _guard = span.enter();

        self.store.reset();
        let mut timeline = Timeline::new();
        scheduler.run(&mut self.store, &mut timeline);

        verify(&self.store, &timeline)?;
        let report = self.metrics.compute(&self.store, &timeline)?;

        info!(
            processes = self.store.len(),
            slices = timeline.slices().len(),
            idle = timeline.idle_time(),
            context_switches = timeline.context_switches(),
            makespan = report.makespan,
            "Simulation complete"
        );

        Ok(SimulationOutcome {
            policy: scheduler.policy(),
            quantum,
            processes: self.store.as_slice().to_vec(),
            timeline,
            report,
        })
    }
}

/// Check the post-conditions every scheduler must establish
pub fn verify(store: &ProcessStore, timeline: &Timeline) -> SchedulerResult<()> {
    for p in store.iter() {
        let violation = |reason: String| SchedulerError::InvariantViolation { pid: p.pid, reason };

        if p.remaining_time != 0 {
            return Err(violation(format!(
                "finished with {} ticks remaining",
                p.remaining_time
            )));
        }
        let start = p
            .start_time
            .ok_or_else(|| violation("never dispatched".to_string()))?;
        if start < p.arrival_time {
            return Err(violation(format!(
                "started at {start} before arrival at {}",
                p.arrival_time
            )));
        }
        if p.finish_time.checked_sub(p.arrival_time) != Some(p.turnaround_time)
            || p.turnaround_time.checked_sub(p.burst_time) != Some(p.waiting_time)
        {
            return Err(violation(format!(
                "inconsistent statistics: finish {}, turnaround {}, waiting {}",
                p.finish_time, p.turnaround_time, p.waiting_time
            )));
        }
        let dispatched = timeline.dispatched_time(p.pid);
        if dispatched != p.burst_time {
            return Err(violation(format!(
                "dispatched for {dispatched} ticks, burst is {}",
                p.burst_time
            )));
        }
    }

    let last_finish = store.makespan();
    if timeline.now() != last_finish {
        return Err(SchedulerError::TimelineMismatch {
            timeline_end: timeline.now(),
            last_finish,
        });
    }
    Ok(())
}
