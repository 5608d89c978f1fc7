//! Pipeline stages: walk, hash pool, grouper, pair enumerator, compare pool.

pub mod cancel;
pub mod compare;
pub mod group;
pub mod hashers;
pub mod orchestrator;
pub mod pairs;
pub mod walk;

pub use cancel::CancelToken;
pub use compare::compare_pair;
pub use group::group_by_directory;
pub use orchestrator::{PipelineOutput, run_pipeline};

/// Handoff channel capacity. Rendezvous channels give strict backpressure:
/// a fast producer blocks until a consumer is ready, so at most one item per
/// worker is in flight and the tree is never materialized in memory.
pub const HANDOFF_CAP: usize = 0;
