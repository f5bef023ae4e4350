//! Application services for board tasks.

mod lifecycle;
mod store;

pub use lifecycle::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
pub use store::{SyncHandle, TaskStore};
