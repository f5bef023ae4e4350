//! Domain model for board tasks.

mod change;
mod content;
mod error;
mod ids;
mod priority;
mod task;

pub use change::TaskChange;
pub use content::{AiScore, ContentAnalysis, ContentDocument};
pub use error::TaskDomainError;
pub use ids::{RecordVersion, TaskId};
pub use priority::TaskPriority;
pub use task::{PersistedTaskData, Task, TaskDraft, TaskPatch};
