/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type
pub type Pid = u32;

/// Simulated time, in abstract ticks
pub type Ticks = u64;

/// Per-switch cost as read from process records
pub type SwitchCost = f64;
