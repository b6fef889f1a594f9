//! Record structs for Mission Control.
//!
//! `Task` and `Project` mirror the two remote JSON documents and decode
//! leniently (see [`crate::lenient`]). `EnrichedTask` and `Snapshot` are
//! derived, immutable values. All structs derive `Serialize`, `Deserialize`,
//! and `JsonSchema`.

mod enriched;
mod project;
mod snapshot;
mod task;

pub use enriched::{EnrichedTask, NO_PROJECT};
pub use project::Project;
pub use snapshot::Snapshot;
pub use task::Task;
