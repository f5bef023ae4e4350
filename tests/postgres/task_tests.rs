//! Task persistence.

use std::sync::Arc;

use super::helpers::{TestDatabase, seed_workspace};
use agencydesk::status::domain::StatusSlug;
use agencydesk::task::{
    adapters::postgres::PostgresTaskRepository,
    domain::{AiScore, ContentAnalysis, ContentDocument, TaskId, TaskPriority},
    ports::{TaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, TaskService},
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_columns_round_trip_and_versions_advance() -> eyre::Result<()> {
    let Some(database) = TestDatabase::create()? else {
        return Ok(());
    };
    let (_, session) = seed_workspace(&database).await?;
    let service = TaskService::new(
        Arc::new(PostgresTaskRepository::new(database.pool.clone())),
        Arc::new(DefaultClock),
    );

    let created = service
        .create_task(
            &session,
            CreateTaskRequest::new("Spring reel", "drafting")
                .with_priority(TaskPriority::Urgent)
                .with_content(ContentDocument::from_plain_text("Hook\nCall to action")),
        )
        .await?;
    let moved = service
        .update_status(&session, created.id(), StatusSlug::new("approved")?)
        .await?;
    let reviewed = service
        .record_analysis(
            &session,
            created.id(),
            ContentAnalysis {
                score: AiScore::new(91)?,
                feedback: "Ready".to_owned(),
            },
        )
        .await?;

    let stored = service.find_task(&session, created.id()).await?;
    eyre::ensure!(stored == reviewed, "stored row differs: {stored:?}");
    eyre::ensure!(moved.version().value() == 2, "status change did not bump version");
    eyre::ensure!(stored.version().value() == 3, "review did not bump version");
    eyre::ensure!(stored.priority() == Some(&TaskPriority::Urgent), "priority lost");
    eyre::ensure!(
        stored.content().plain_text() == "Hook\nCall to action",
        "content blocks lost"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_is_newest_first_and_delete_returns_the_row() -> eyre::Result<()> {
    let Some(database) = TestDatabase::create()? else {
        return Ok(());
    };
    let (_, session) = seed_workspace(&database).await?;
    let repository = Arc::new(PostgresTaskRepository::new(database.pool.clone()));
    let service = TaskService::new(Arc::clone(&repository), Arc::new(DefaultClock));

    let first = service
        .create_task(&session, CreateTaskRequest::new("First", "drafting"))
        .await?;
    let second = service
        .create_task(&session, CreateTaskRequest::new("Second", "drafting"))
        .await?;

    let listed = service.fetch_tasks(&session).await?;
    let ids: Vec<TaskId> = listed.iter().map(|task| task.id()).collect();
    eyre::ensure!(ids == vec![second.id(), first.id()], "unexpected order {ids:?}");

    let removed = service.delete_task(&session, first.id()).await?;
    eyre::ensure!(removed.id() == first.id(), "delete returned another row");
    let missing = repository.update(&removed).await;
    eyre::ensure!(
        matches!(missing, Err(TaskRepositoryError::NotFound(id)) if id == first.id()),
        "updating a deleted task should report not found, got {missing:?}"
    );
    Ok(())
}
