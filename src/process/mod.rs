/*!
 * Process Module
 * Process descriptors, the shared store, and record loading
 */

pub mod descriptor;
pub mod loader;
pub mod store;

// Re-export for convenience
pub use descriptor::ProcessDescriptor;
pub use loader::{load_from_path, parse_processes};
pub use store::ProcessStore;
