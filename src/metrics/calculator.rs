/*!
 * Metrics Calculator
 * Reduce a completed run into aggregate statistics
 */

use super::switch_cost::SwitchCostPolicy;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::serde::is_zero_u64;
use crate::core::types::{SwitchCost, Ticks};
use crate::process::ProcessStore;
use crate::scheduler::Timeline;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Aggregate statistics for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulationReport {
    pub total_waiting_time: Ticks,
    pub average_waiting_time: f64,
    pub total_turnaround_time: Ticks,
    pub average_turnaround_time: f64,
    pub cpu_utilization_percent: f64,
    pub average_response_time: f64,
    pub total_burst_time: Ticks,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub idle_time: Ticks,
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub context_switches: u64,
    pub switch_overhead: SwitchCost,
    pub makespan: Ticks,
}

/// Computes [`SimulationReport`]s under a chosen switch cost policy
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsCalculator {
    switch_cost: SwitchCostPolicy,
}

impl MetricsCalculator {
    pub fn new(switch_cost: SwitchCostPolicy) -> Self {
        Self { switch_cost }
    }

    /// Compute the report for a store whose processes have all completed
    ///
    /// Fails with [`SchedulerError::EmptyProcessSet`] when there is nothing to
    /// average over.
    pub fn compute(
        &self,
        store: &ProcessStore,
        timeline: &Timeline,
    ) -> SchedulerResult<SimulationReport> {
        if store.is_empty() {
            return Err(SchedulerError::EmptyProcessSet);
        }
        let count = store.len() as f64;

        let total_waiting_time: Ticks = store.iter().map(|p| p.waiting_time).sum();
        let total_turnaround_time: Ticks = store.iter().map(|p| p.turnaround_time).sum();
        let total_response: Ticks = store.iter().filter_map(|p| p.response_time()).sum();
        let total_burst_time = store.total_burst_time();

        let switch_overhead = self.switch_cost.overhead(store, timeline);
        let denominator =
            total_burst_time as f64 + switch_overhead + timeline.idle_time() as f64;
        let cpu_utilization_percent = 100.0 * total_burst_time as f64 / denominator;

        let report = SimulationReport {
            total_waiting_time,
            average_waiting_time: total_waiting_time as f64 / count,
            total_turnaround_time,
            average_turnaround_time: total_turnaround_time as f64 / count,
            cpu_utilization_percent,
            average_response_time: total_response as f64 / count,
            total_burst_time,
            idle_time: timeline.idle_time(),
            context_switches: timeline.context_switches(),
            switch_overhead,
            makespan: store.makespan(),
        };

        debug!(
            utilization = report.cpu_utilization_percent,
            avg_waiting = report.average_waiting_time,
            avg_turnaround = report.average_turnaround_time,
            switch_cost = %self.switch_cost,
            "Metrics computed"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessDescriptor;
    use crate::scheduler::{FcfsScheduler, Scheduler};

    fn fcfs(processes: Vec<ProcessDescriptor>) -> (ProcessStore, Timeline) {
        let mut store = ProcessStore::new(processes).unwrap();
        let mut timeline = Timeline::new();
        FcfsScheduler.run(&mut store, &mut timeline);
        (store, timeline)
    }

    #[test]
    fn test_empty_store_is_an_error() {
        let store = ProcessStore::default();
        let result = MetricsCalculator::default().compute(&store, &Timeline::new());
        assert_eq!(result, Err(SchedulerError::EmptyProcessSet));
    }

    #[test]
    fn test_utilization_charges_idle_and_switches() {
        let (store, timeline) = fcfs(vec![
            ProcessDescriptor::new(1, 0, 2, 1.0),
            ProcessDescriptor::new(2, 5, 3, 1.0),
        ]);
        let report = MetricsCalculator::default().compute(&store, &timeline).unwrap();

        assert_eq!(report.idle_time, 3);
        assert_eq!(report.context_switches, 1);
        assert_eq!(report.switch_overhead, 1.0);
        assert!((report.cpu_utilization_percent - 500.0 / 9.0).abs() < 1e-9);
        assert_eq!(report.makespan, 8);
    }

    #[test]
    fn test_full_utilization_without_gaps_or_cost() {
        let (store, timeline) = fcfs(vec![
            ProcessDescriptor::new(1, 0, 2, 0.0),
            ProcessDescriptor::new(2, 0, 2, 0.0),
        ]);
        let report = MetricsCalculator::default().compute(&store, &timeline).unwrap();
        assert_eq!(report.cpu_utilization_percent, 100.0);
        assert_eq!(report.average_waiting_time, 1.0);
        assert_eq!(report.average_response_time, 1.0);
    }
}
