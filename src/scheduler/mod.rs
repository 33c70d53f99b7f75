/*!
 * Scheduler Module
 * Dispatching disciplines, the execution timeline, and the simulation engine
 */

pub mod engine;
pub mod fcfs;
pub mod round_robin;
pub mod srt;
pub mod timeline;
pub mod traits;
pub mod types;

// Re-export public API
pub use engine::{build_scheduler, verify, SimulationOutcome, Simulator};
pub use fcfs::FcfsScheduler;
pub use round_robin::RoundRobinScheduler;
pub use srt::SrtScheduler;
pub use timeline::{Slice, Timeline};
pub use traits::Scheduler;
pub use types::{SchedulingPolicy, TimeQuantum};
