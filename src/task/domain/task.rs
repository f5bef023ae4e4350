//! Task aggregate root.

use super::{
    AiScore, ContentAnalysis, ContentDocument, RecordVersion, TaskDomainError, TaskId,
    TaskPriority,
};
use crate::agency::domain::ProjectId;
use crate::property::domain::{PropertyDefinition, PropertyValue, TaskProperties};
use crate::status::domain::StatusSlug;
use crate::workspace::domain::{UserId, WorkspaceId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// `status` is a free slug; nothing guarantees a matching registry entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    workspace_id: WorkspaceId,
    title: String,
    status: StatusSlug,
    priority: Option<TaskPriority>,
    assignee: Option<UserId>,
    project_id: Option<ProjectId>,
    due_date: Option<DateTime<Utc>>,
    properties: TaskProperties,
    content: ContentDocument,
    ai_score: Option<AiScore>,
    ai_feedback: Option<String>,
    version: RecordVersion,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning workspace.
    pub workspace_id: WorkspaceId,
    /// Persisted title.
    pub title: String,
    /// Persisted status slug.
    pub status: StatusSlug,
    /// Persisted priority.
    pub priority: Option<TaskPriority>,
    /// Persisted assignee.
    pub assignee: Option<UserId>,
    /// Persisted project reference.
    pub project_id: Option<ProjectId>,
    /// Persisted due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Persisted custom property values.
    pub properties: TaskProperties,
    /// Persisted content blocks.
    pub content: ContentDocument,
    /// Persisted AI score.
    pub ai_score: Option<AiScore>,
    /// Persisted AI feedback.
    pub ai_feedback: Option<String>,
    /// Persisted record version.
    pub version: RecordVersion,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Validated input for a new task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    /// Title.
    pub title: String,
    /// Initial status slug.
    pub status: StatusSlug,
    /// Initial priority.
    pub priority: Option<TaskPriority>,
    /// Initial assignee.
    pub assignee: Option<UserId>,
    /// Owning project.
    pub project_id: Option<ProjectId>,
    /// Initial due date.
    pub due_date: Option<DateTime<Utc>>,
    /// Initial content.
    pub content: ContentDocument,
}

impl TaskDraft {
    /// Creates a draft with only the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, status: StatusSlug) -> Self {
        Self {
            title: title.into(),
            status,
            priority: None,
            assignee: None,
            project_id: None,
            due_date: None,
            content: ContentDocument::default(),
        }
    }
}

/// Partial update of a task.
///
/// Outer `None` leaves a field unchanged; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    /// New title.
    pub title: Option<String>,
    /// New status slug.
    pub status: Option<StatusSlug>,
    /// New or cleared priority.
    pub priority: Option<Option<TaskPriority>>,
    /// New or cleared assignee.
    pub assignee: Option<Option<UserId>>,
    /// New or cleared project.
    pub project_id: Option<Option<ProjectId>>,
    /// New or cleared due date.
    pub due_date: Option<Option<DateTime<Utc>>>,
    /// Replacement content.
    pub content: Option<ContentDocument>,
}

impl TaskPatch {
    /// Returns `true` when the patch changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Task {
    /// Creates a new task at [`RecordVersion::INITIAL`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is blank.
    pub fn new(
        workspace_id: WorkspaceId,
        draft: TaskDraft,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            workspace_id,
            title: normalize_title(&draft.title)?,
            status: draft.status,
            priority: draft.priority,
            assignee: draft.assignee,
            project_id: draft.project_id,
            due_date: draft.due_date,
            properties: TaskProperties::new(),
            content: draft.content,
            ai_score: None,
            ai_feedback: None,
            version: RecordVersion::INITIAL,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            workspace_id: data.workspace_id,
            title: data.title,
            status: data.status,
            priority: data.priority,
            assignee: data.assignee,
            project_id: data.project_id,
            due_date: data.due_date,
            properties: data.properties,
            content: data.content,
            ai_score: data.ai_score,
            ai_feedback: data.ai_feedback,
            version: data.version,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning workspace.
    #[must_use]
    pub const fn workspace_id(&self) -> WorkspaceId {
        self.workspace_id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the status slug.
    #[must_use]
    pub const fn status(&self) -> &StatusSlug {
        &self.status
    }

    /// Returns the priority, if set.
    #[must_use]
    pub const fn priority(&self) -> Option<&TaskPriority> {
        self.priority.as_ref()
    }

    /// Returns the assignee, if set.
    #[must_use]
    pub const fn assignee(&self) -> Option<UserId> {
        self.assignee
    }

    /// Returns the owning project, if set.
    #[must_use]
    pub const fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns the due date, if set.
    #[must_use]
    pub const fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }

    /// Returns the custom property values.
    #[must_use]
    pub const fn properties(&self) -> &TaskProperties {
        &self.properties
    }

    /// Returns the content blocks.
    #[must_use]
    pub const fn content(&self) -> &ContentDocument {
        &self.content
    }

    /// Returns the AI score, if reviewed.
    #[must_use]
    pub const fn ai_score(&self) -> Option<AiScore> {
        self.ai_score
    }

    /// Returns the AI feedback, if reviewed.
    #[must_use]
    pub fn ai_feedback(&self) -> Option<&str> {
        self.ai_feedback.as_deref()
    }

    /// Returns the record version.
    #[must_use]
    pub const fn version(&self) -> RecordVersion {
        self.version
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Last-writer-wins ordering: compares `(version, updated_at)`.
    #[must_use]
    pub fn is_newer_than(&self, other: &Self) -> bool {
        (self.version, self.updated_at) > (other.version, other.updated_at)
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the patched title is
    /// blank; the task is unchanged in that case.
    pub fn apply_patch(&mut self, patch: TaskPatch, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let normalized_title = patch.title.as_deref().map(normalize_title).transpose()?;

        if let Some(value) = normalized_title {
            self.title = value;
        }
        if let Some(value) = patch.status {
            self.status = value;
        }
        if let Some(value) = patch.priority {
            self.priority = value;
        }
        if let Some(value) = patch.assignee {
            self.assignee = value;
        }
        if let Some(value) = patch.project_id {
            self.project_id = value;
        }
        if let Some(value) = patch.due_date {
            self.due_date = value;
        }
        if let Some(value) = patch.content {
            self.content = value;
        }
        self.touch(clock);
        Ok(())
    }

    /// Moves the task to another status column.
    pub fn set_status(&mut self, status: StatusSlug, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    /// Sets or clears the due date.
    pub fn set_due_date(&mut self, due_date: Option<DateTime<Utc>>, clock: &impl Clock) {
        self.due_date = due_date;
        self.touch(clock);
    }

    /// Replaces the content blocks.
    pub fn set_content(&mut self, content: ContentDocument, clock: &impl Clock) {
        self.content = content;
        self.touch(clock);
    }

    /// Stores an AI review result.
    pub fn record_analysis(&mut self, analysis: ContentAnalysis, clock: &impl Clock) {
        self.ai_score = Some(analysis.score);
        self.ai_feedback = Some(analysis.feedback);
        self.touch(clock);
    }

    /// Writes or clears a custom property value after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::Property`] when `value` does not fit
    /// `definition`; the task is unchanged in that case.
    pub fn set_property(
        &mut self,
        definition: &PropertyDefinition,
        value: Option<PropertyValue>,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        if let Some(value) = &value {
            definition.validate(value)?;
        }
        self.properties.put(definition.id(), value);
        self.touch(clock);
        Ok(())
    }

    fn touch(&mut self, clock: &impl Clock) {
        self.version = self.version.next();
        self.updated_at = clock.utc();
    }
}

fn normalize_title(title: &str) -> Result<String, TaskDomainError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    Ok(trimmed.to_owned())
}
