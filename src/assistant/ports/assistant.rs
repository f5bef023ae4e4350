//! AI collaborator port.

use crate::assistant::domain::{
    AnalyzeContentRequest, AutoPlanRequest, GenerateContentRequest, PlannedTask,
};
use crate::task::domain::ContentAnalysis;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for collaborator calls.
pub type AssistantResult<T> = Result<T, AssistantError>;

/// External content collaborator. Calls are never retried.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentAssistant: Send + Sync {
    /// Drafts content for a task.
    async fn generate(&self, request: &GenerateContentRequest) -> AssistantResult<String>;

    /// Scores content and returns feedback.
    async fn analyze(&self, request: &AnalyzeContentRequest) -> AssistantResult<ContentAnalysis>;

    /// Expands a brief into proposed tasks.
    async fn auto_plan(&self, request: &AutoPlanRequest) -> AssistantResult<Vec<PlannedTask>>;
}

/// Errors returned by collaborator adapters.
#[derive(Debug, Clone, Error)]
pub enum AssistantError {
    /// No collaborator URL is configured.
    #[error("AGENCYDESK_ASSISTANT_URL is not set")]
    NotConfigured,

    /// The endpoint answered with a non-success status.
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        /// Endpoint path.
        endpoint: &'static str,
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body did not have the expected shape.
    #[error("{endpoint} returned an invalid response: {reason}")]
    InvalidResponse {
        /// Endpoint path.
        endpoint: &'static str,
        /// What was wrong.
        reason: String,
    },

    /// The request could not be sent or the body could not be read.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl AssistantError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
