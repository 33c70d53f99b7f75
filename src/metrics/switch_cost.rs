/*!
 * Switch Cost Policy
 * How context-switch overhead is charged when computing CPU utilization
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::SwitchCost;
use crate::process::ProcessStore;
use crate::scheduler::Timeline;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects the per-switch cost used in the utilization denominator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "cost", rename_all = "snake_case")]
pub enum SwitchCostPolicy {
    /// Cost of the process that arrives last, ties going to the later record
    ///
    /// This is the last process FCFS dispatches, whatever order the records
    /// were supplied in.
    #[default]
    LastArrival,
    /// One system-wide cost for every switch
    Fixed(SwitchCost),
    /// Mean of all per-process costs
    Mean,
    /// Each switch costs whatever the incoming process declares
    Incoming,
}

impl SwitchCostPolicy {
    /// Parse `last`, `mean`, `incoming`, or a non-negative number
    pub fn from_str(s: &str) -> SchedulerResult<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "last" | "last_arrival" => Ok(Self::LastArrival),
            "mean" | "average" => Ok(Self::Mean),
            "incoming" | "per_switch" => Ok(Self::Incoming),
            _ => match trimmed.parse::<SwitchCost>() {
                Ok(cost) if cost.is_finite() && cost >= 0.0 => Ok(Self::Fixed(cost)),
                _ => Err(SchedulerError::InvalidSwitchCost(s.to_string())),
            },
        }
    }

    /// Total time charged to context switching for one run
    pub fn overhead(&self, store: &ProcessStore, timeline: &Timeline) -> SwitchCost {
        let switches = timeline.context_switches() as SwitchCost;
        match self {
            Self::LastArrival => {
                let cost = store
                    .arrival_order()
                    .last()
                    .map_or(0.0, |&index| store.process(index).context_switch_cost);
                switches * cost
            }
            Self::Fixed(cost) => switches * cost,
            Self::Mean => {
                if store.is_empty() {
                    return 0.0;
                }
                let total: SwitchCost = store.iter().map(|p| p.context_switch_cost).sum();
                switches * (total / store.len() as SwitchCost)
            }
            Self::Incoming => timeline
                .switch_targets()
                .filter_map(|pid| store.by_pid(pid))
                .map(|p| p.context_switch_cost)
                .sum(),
        }
    }
}

impl fmt::Display for SwitchCostPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LastArrival => f.write_str("last"),
            Self::Fixed(cost) => write!(f, "{cost}"),
            Self::Mean => f.write_str("mean"),
            Self::Incoming => f.write_str("incoming"),
        }
    }
}
