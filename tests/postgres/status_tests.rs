//! Status registry persistence.

use std::sync::Arc;

use super::helpers::{TestDatabase, seed_workspace};
use agencydesk::status::{
    adapters::postgres::PostgresStatusRepository, services::StatusRegistryService,
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn seeded_registry_survives_a_reorder() -> eyre::Result<()> {
    let Some(database) = TestDatabase::create()? else {
        return Ok(());
    };
    let (_, session) = seed_workspace(&database).await?;
    let service = StatusRegistryService::new(
        Arc::new(PostgresStatusRepository::new(database.pool.clone())),
        Arc::new(DefaultClock),
    );

    let seeded = service.list_statuses(&session).await?;
    eyre::ensure!(seeded.len() == 8, "expected 8 defaults, found {}", seeded.len());
    let last = seeded
        .last()
        .ok_or_else(|| eyre::eyre!("registry is empty"))?;
    service.move_status(&session, last.id(), 0).await?;

    let reloaded = service.list_statuses(&session).await?;
    let slugs: Vec<&str> = reloaded.iter().map(|entry| entry.slug().as_str()).collect();
    eyre::ensure!(
        slugs.first() == Some(&"ads_handoff") && slugs.get(1) == Some(&"drafting"),
        "unexpected order {slugs:?}"
    );
    let positions: Vec<u32> = reloaded.iter().map(|entry| entry.position()).collect();
    eyre::ensure!(
        positions == (0..8).collect::<Vec<u32>>(),
        "positions were not rewritten: {positions:?}"
    );
    Ok(())
}
