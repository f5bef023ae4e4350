//! Diesel schema for status registry persistence.

diesel::table! {
    /// Per-workspace pipeline stages.
    task_statuses (id) {
        /// Entry identifier.
        id -> Uuid,
        /// Owning workspace.
        workspace_id -> Uuid,
        /// Display name.
        #[max_length = 100]
        name -> Varchar,
        /// Stable slug referenced by tasks.
        #[max_length = 100]
        slug -> Varchar,
        /// `#rrggbb` colour.
        #[max_length = 7]
        color -> Varchar,
        /// Column position.
        position -> Int4,
        /// Optional icon name.
        #[max_length = 50]
        icon -> Nullable<Varchar>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
