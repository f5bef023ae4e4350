//! Shared `PostgreSQL` wiring for the Diesel adapters.

use crate::config::Config;
use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool type shared by all adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Errors returned while building the connection pool.
#[derive(Debug, Error)]
pub enum PoolBuildError {
    /// No database URL is configured.
    #[error("AGENCYDESK_DATABASE_URL is not set")]
    MissingDatabaseUrl,

    /// The pool could not open its initial connections.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Failure raised by the blocking bridge itself rather than by a query.
#[derive(Debug, Error)]
pub enum BlockingError {
    /// No connection could be checked out of the pool.
    #[error("connection checkout failed: {0}")]
    Checkout(#[from] PoolError),

    /// The blocking task panicked or was cancelled.
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builds a connection pool from configuration.
///
/// # Errors
///
/// Returns [`PoolBuildError::MissingDatabaseUrl`] when no URL is configured,
/// or [`PoolBuildError::Pool`] when the pool cannot connect.
pub fn build_pool(config: &Config) -> Result<PgPool, PoolBuildError> {
    let url = config
        .database_url()
        .ok_or(PoolBuildError::MissingDatabaseUrl)?;
    let manager = ConnectionManager::<PgConnection>::new(url);
    let pool = Pool::builder()
        .max_size(config.pool_size())
        .build(manager)?;
    tracing::info!(pool_size = config.pool_size(), "postgres pool ready");
    Ok(pool)
}

/// Runs a Diesel closure on the blocking thread pool with a pooled
/// connection.
///
/// `wrap` maps bridge failures into the caller's repository error type.
pub(crate) async fn run_blocking<F, T, E>(
    pool: &PgPool,
    wrap: fn(BlockingError) -> E,
    f: F,
) -> Result<T, E>
where
    F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(|err| wrap(err.into()))?;
        f(&mut connection)
    })
    .await
    .map_err(|err| wrap(err.into()))?
}
