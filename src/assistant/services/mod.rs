//! Orchestration services for the AI collaborator.

mod assistant;

pub use assistant::{AssistantService, AssistantServiceError, AssistantServiceResult};
