//! Request and result payloads for the AI endpoints.

use crate::agency::domain::{PersonaId, ProjectId};
use crate::task::domain::TaskPriority;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for drafting content for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Task title.
    pub title: String,
    /// Free-form instructions, with persona details appended when given.
    pub context: String,
    /// Target persona.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona_id: Option<PersonaId>,
}

/// Input for scoring drafted content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeContentRequest {
    /// Task title.
    pub title: String,
    /// Content as plain text.
    pub content: String,
}

/// Input for expanding a project brief into tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoPlanRequest {
    /// Project brief.
    pub brief: String,
    /// Project the tasks belong to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<ProjectId>,
}

impl AutoPlanRequest {
    /// Creates a plan request for a brief.
    #[must_use]
    pub fn new(brief: impl Into<String>) -> Self {
        Self {
            brief: brief.into(),
            project_id: None,
        }
    }

    /// Links the planned tasks to a project.
    #[must_use]
    pub const fn with_project(mut self, project_id: ProjectId) -> Self {
        self.project_id = Some(project_id);
        self
    }
}

/// One task proposed by the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedTask {
    /// Proposed title.
    pub title: String,
    /// Proposed priority.
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    /// Proposed due date.
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl PlannedTask {
    /// Creates a planned task with only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            priority: None,
            due_date: None,
        }
    }
}
