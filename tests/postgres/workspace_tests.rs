//! Workspace and property schema persistence.

use super::helpers::{TestDatabase, seed_workspace};
use agencydesk::property::{
    domain::{NewPropertyDefinition, PropertyDefinition, PropertyKind},
    ports::PropertySchemaRepository,
};
use agencydesk::workspace::ports::WorkspaceRepository;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn property_schema_round_trips_through_the_workspace_row() -> eyre::Result<()> {
    let Some(database) = TestDatabase::create()? else {
        return Ok(());
    };
    let (repository, session) = seed_workspace(&database).await?;
    let definitions = vec![
        PropertyDefinition::create(
            NewPropertyDefinition::new("Channel", PropertyKind::Select)
                .with_options(vec!["Instagram".to_owned(), "TikTok".to_owned()]),
        )?,
        PropertyDefinition::create(NewPropertyDefinition::new("Budget", PropertyKind::Number))?,
    ];

    repository.save(session.workspace_id(), &definitions).await?;

    let loaded = repository.load(session.workspace_id()).await?;
    eyre::ensure!(loaded == definitions, "schema changed in storage: {loaded:?}");
    let workspace = repository
        .find_by_id(session.workspace_id())
        .await?
        .ok_or_else(|| eyre::eyre!("workspace row disappeared"))?;
    eyre::ensure!(
        workspace.property_definitions() == definitions.as_slice(),
        "workspace did not expose the saved schema"
    );
    Ok(())
}
