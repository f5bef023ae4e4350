//! In-memory integration tests for custom task properties.

use std::sync::Arc;

use agencydesk::property::{
    domain::{NewPropertyDefinition, PropertyDefinitionPatch, PropertyKind, PropertyValue},
    services::PropertySchemaService,
};
use agencydesk::task::{
    adapters::memory::InMemoryTaskRepository,
    services::{CreateTaskRequest, TaskService},
};
use agencydesk::workspace::{
    adapters::memory::InMemoryWorkspaceRepository,
    domain::{UserId, WorkspaceSession},
    services::WorkspaceService,
};
use mockable::DefaultClock;
use rstest::rstest;

type Schema = PropertySchemaService<InMemoryWorkspaceRepository, InMemoryTaskRepository, DefaultClock>;

struct Setup {
    session: WorkspaceSession,
    schema: Schema,
    tasks: TaskService<InMemoryTaskRepository, DefaultClock>,
}

async fn wire() -> Setup {
    let clock = Arc::new(DefaultClock);
    let workspaces = Arc::new(InMemoryWorkspaceRepository::new());
    let task_repository = Arc::new(InMemoryTaskRepository::new());
    let workspace = WorkspaceService::new(Arc::clone(&workspaces), Arc::clone(&clock))
        .create_workspace("Northwind Studio")
        .await
        .expect("workspace should be created");

    Setup {
        session: WorkspaceSession::new(workspace.id(), UserId::new()),
        schema: PropertySchemaService::new(
            workspaces,
            Arc::clone(&task_repository),
            Arc::clone(&clock),
        ),
        tasks: TaskService::new(task_repository, clock),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_option_lands_in_schema_and_task() {
    let setup = wire().await;
    let channel = setup
        .schema
        .add_definition(
            &setup.session,
            NewPropertyDefinition::new("Channel", PropertyKind::Select)
                .with_options(vec!["Instagram".to_owned()]),
        )
        .await
        .expect("definition should be added");
    let task = setup
        .tasks
        .create_task(&setup.session, CreateTaskRequest::new("Teaser", "drafting"))
        .await
        .expect("task should be created");

    let updated = setup
        .schema
        .create_option_and_assign(&setup.session, task.id(), channel.id(), "TikTok")
        .await
        .expect("option should be created and assigned");

    let definitions = setup
        .schema
        .list_definitions(&setup.session)
        .await
        .expect("schema should load");
    let stored = definitions
        .iter()
        .find(|definition| definition.id() == channel.id())
        .expect("definition still exists");
    assert_eq!(stored.options(), ["Instagram", "TikTok"]);
    assert_eq!(
        updated.properties().get(channel.id()),
        Some(&PropertyValue::Select("TikTok".to_owned()))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn changing_the_kind_keeps_values_but_stops_typed_reads() {
    let setup = wire().await;
    let budget = setup
        .schema
        .add_definition(
            &setup.session,
            NewPropertyDefinition::new("Budget", PropertyKind::Number),
        )
        .await
        .expect("definition should be added");
    let task = setup
        .tasks
        .create_task(&setup.session, CreateTaskRequest::new("Paid push", "drafting"))
        .await
        .expect("task should be created");
    setup
        .schema
        .set_task_value(
            &setup.session,
            task.id(),
            budget.id(),
            Some(PropertyValue::Number(1500.0)),
        )
        .await
        .expect("value should be stored");

    let retyped = setup
        .schema
        .update_definition(
            &setup.session,
            budget.id(),
            PropertyDefinitionPatch {
                kind: Some(PropertyKind::Text),
                ..PropertyDefinitionPatch::default()
            },
        )
        .await
        .expect("definition should update");

    let reloaded = setup
        .tasks
        .find_task(&setup.session, task.id())
        .await
        .expect("task should load");
    assert_eq!(
        reloaded.properties().get(budget.id()),
        Some(&PropertyValue::Number(1500.0))
    );
    assert!(reloaded.properties().typed_value(&retyped).is_none());
}
