//! Port contracts for the AI collaborator.

pub mod assistant;

#[cfg(test)]
pub use assistant::MockContentAssistant;
pub use assistant::{AssistantError, AssistantResult, ContentAssistant};
