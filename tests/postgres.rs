//! `PostgreSQL` integration tests for the Diesel adapters.
//!
//! Each test creates a throwaway database next to the one named by
//! `AGENCYDESK_DATABASE_URL`, applies the migrations, and drops it again.
//! Without that variable the tests return immediately.
//!
//! Tests are organized into modules by functionality:
//! - `workspace_tests`: Workspace rows and the property schema blob
//! - `status_tests`: Registry seeding and reordering
//! - `task_tests`: Task CRUD, versions and JSONB columns

mod postgres {
    pub mod helpers;

    mod status_tests;
    mod task_tests;
    mod workspace_tests;
}
