//! Shared test helpers for `PostgreSQL` integration tests.

use agencydesk::config::Config;
use agencydesk::persistence::{PgPool, build_pool};
use agencydesk::workspace::{
    adapters::postgres::PostgresWorkspaceRepository,
    domain::{UserId, Workspace, WorkspaceSession},
    ports::WorkspaceRepository,
};
use diesel::connection::SimpleConnection;
use diesel::{Connection, PgConnection};
use mockable::DefaultClock;
use uuid::Uuid;

/// Migrations in the order they are applied.
pub const MIGRATIONS: [&str; 3] = [
    include_str!("../../migrations/2026-03-01-000001_create_workspaces/up.sql"),
    include_str!("../../migrations/2026-03-01-000002_create_task_statuses/up.sql"),
    include_str!("../../migrations/2026-03-01-000003_create_tasks/up.sql"),
];

/// A migrated database that is dropped with the value.
pub struct TestDatabase {
    admin_url: String,
    name: String,
    /// Pool connected to the test database.
    pub pool: PgPool,
}

impl TestDatabase {
    /// Creates and migrates a fresh database.
    ///
    /// Returns `Ok(None)` when `AGENCYDESK_DATABASE_URL` is not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be created or migrated.
    pub fn create() -> eyre::Result<Option<Self>> {
        let Some(admin_url) = Config::from_env()?.database_url().map(str::to_owned) else {
            return Ok(None);
        };
        let name = format!("agencydesk_test_{}", Uuid::new_v4().simple());
        let mut admin = PgConnection::establish(&admin_url)?;
        admin.batch_execute(&format!("CREATE DATABASE {name}"))?;

        let url = sibling_url(&admin_url, &name)?;
        let mut connection = PgConnection::establish(&url)?;
        for migration in MIGRATIONS {
            connection.batch_execute(migration)?;
        }
        let pool = build_pool(&Config::default().with_database_url(url))?;
        Ok(Some(Self {
            admin_url,
            name,
            pool,
        }))
    }
}

impl Drop for TestDatabase {
    fn drop(&mut self) {
        if let Ok(mut admin) = PgConnection::establish(&self.admin_url) {
            admin
                .batch_execute(&format!(
                    "DROP DATABASE IF EXISTS {} WITH (FORCE)",
                    self.name
                ))
                .ok();
        }
    }
}

/// Swaps the database name in a connection URL, keeping any query string.
///
/// # Errors
///
/// Returns an error when the URL has no database path.
pub fn sibling_url(url: &str, database: &str) -> eyre::Result<String> {
    let (base, query) = match url.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (url, None),
    };
    let (prefix, _) = base
        .rsplit_once('/')
        .filter(|(head, _)| !head.ends_with('/'))
        .ok_or_else(|| eyre::eyre!("database URL has no database path"))?;
    Ok(match query {
        Some(params) => format!("{prefix}/{database}?{params}"),
        None => format!("{prefix}/{database}"),
    })
}

/// Inserts a workspace row and returns a session for it.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn seed_workspace(
    database: &TestDatabase,
) -> eyre::Result<(PostgresWorkspaceRepository, WorkspaceSession)> {
    let repository = PostgresWorkspaceRepository::new(database.pool.clone());
    let workspace = Workspace::new("Northwind Studio", &DefaultClock)?;
    repository.store(&workspace).await?;
    Ok((repository, WorkspaceSession::new(workspace.id(), UserId::new())))
}

#[cfg(test)]
mod tests {
    use super::sibling_url;
    use rstest::rstest;

    #[rstest]
    #[case("postgres://app@localhost/agency", "postgres://app@localhost/scratch")]
    #[case(
        "postgres://app@localhost:5433/agency?sslmode=disable",
        "postgres://app@localhost:5433/scratch?sslmode=disable"
    )]
    fn sibling_url_swaps_the_database(#[case] url: &str, #[case] expected: &str) {
        assert_eq!(sibling_url(url, "scratch").expect("url has a path"), expected);
    }

    #[rstest]
    fn sibling_url_requires_a_path() {
        assert!(sibling_url("postgres://localhost", "scratch").is_err());
    }
}
