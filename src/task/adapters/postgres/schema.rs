//! Diesel schema for task persistence.

diesel::table! {
    /// Board tasks.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning workspace.
        workspace_id -> Uuid,
        /// Title.
        #[max_length = 500]
        title -> Varchar,
        /// Status slug; not a foreign key.
        #[max_length = 100]
        status -> Varchar,
        /// Uppercase priority label.
        #[max_length = 20]
        priority -> Nullable<Varchar>,
        /// Assigned member.
        assignee_id -> Nullable<Uuid>,
        /// Owning project.
        project_id -> Nullable<Uuid>,
        /// Due date.
        due_date -> Nullable<Timestamptz>,
        /// Custom property values keyed by definition id.
        properties -> Jsonb,
        /// Rich content blocks.
        content_blocks -> Jsonb,
        /// AI review score.
        ai_score -> Nullable<Int2>,
        /// AI review feedback.
        ai_feedback -> Nullable<Text>,
        /// Monotonic record version.
        version -> Int8,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
