//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod graph;
pub mod utils;

// Re-export main command functions
pub use graph::{execute_graph, validate_args, GraphArgs, GraphKind};
pub use utils::{display_properties, display_version, validate_dataset_file};
