/*!
 * Scheduler Traits
 * Interface shared by the dispatching disciplines
 */

use super::timeline::Timeline;
use super::types::SchedulingPolicy;
use crate::process::ProcessStore;

/// A dispatching discipline
///
/// Implementations receive a freshly reset store and an empty timeline, run
/// every process to completion, and finalize each descriptor's completion
/// fields. They must not add or remove descriptors.
pub trait Scheduler {
    /// Which policy this scheduler implements
    fn policy(&self) -> SchedulingPolicy;

    /// Run the whole simulation
    fn run(&self, store: &mut ProcessStore, timeline: &mut Timeline);
}
