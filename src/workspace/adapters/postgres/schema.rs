//! Diesel schema for workspace persistence.

diesel::table! {
    /// Workspace (tenant) records.
    workspaces (id) {
        /// Workspace identifier.
        id -> Uuid,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Ordered array of task property definitions.
        task_property_definitions -> Jsonb,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
