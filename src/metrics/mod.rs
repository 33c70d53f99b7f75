/*!
 * Metrics Module
 * Aggregate statistics over completed simulation runs
 */

pub mod calculator;
pub mod switch_cost;

pub use calculator::{MetricsCalculator, SimulationReport};
pub use switch_cost::SwitchCostPolicy;
