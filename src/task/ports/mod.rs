//! Port contracts for task persistence and realtime change delivery.

pub mod feed;
pub mod repository;

pub use feed::{TaskChangeFeed, TaskSubscription};
#[cfg(test)]
pub use repository::MockTaskRepository;
pub use repository::{TaskRepository, TaskRepositoryError, TaskRepositoryResult};
