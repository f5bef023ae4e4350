//! Service orchestration tests for task mutations.

use std::sync::Arc;
use std::time::Duration;

use crate::status::domain::StatusSlug;
use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{RecordVersion, TaskDomainError, TaskPatch, TaskPriority},
    ports::{MockTaskRepository, TaskRepositoryError},
    services::{CreateTaskRequest, TaskService, TaskServiceError},
};
use crate::workspace::domain::{UserId, WorkspaceId, WorkspaceSession};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskService<InMemoryTaskRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    TaskService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(DefaultClock),
    )
}

#[fixture]
fn session() -> WorkspaceSession {
    WorkspaceSession::new(WorkspaceId::new(), UserId::new())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fetch_returns_newest_first_and_only_own_workspace(
    service: TestService,
    session: WorkspaceSession,
) {
    let older = service
        .create_task(&session, CreateTaskRequest::new("Older", "drafting"))
        .await
        .expect("create should succeed");
    std::thread::sleep(Duration::from_millis(2));
    let newer = service
        .create_task(&session, CreateTaskRequest::new("Newer", "drafting"))
        .await
        .expect("create should succeed");
    let other = WorkspaceSession::new(WorkspaceId::new(), session.user_id());
    service
        .create_task(&other, CreateTaskRequest::new("Elsewhere", "drafting"))
        .await
        .expect("create should succeed");

    let fetched = service
        .fetch_tasks(&session)
        .await
        .expect("fetch should succeed");
    let ids: Vec<_> = fetched.iter().map(|task| task.id()).collect();
    assert_eq!(ids, vec![newer.id(), older.id()]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_applies_optional_fields(service: TestService, session: WorkspaceSession) {
    let due = Utc
        .with_ymd_and_hms(2026, 3, 14, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    let task = service
        .create_task(
            &session,
            CreateTaskRequest::new("Reel", "in_progress")
                .with_priority(TaskPriority::High)
                .with_assignee(session.user_id())
                .with_due_date(due),
        )
        .await
        .expect("create should succeed");

    assert_eq!(task.version(), RecordVersion::INITIAL);
    assert_eq!(task.priority(), Some(&TaskPriority::High));
    assert_eq!(task.assignee(), Some(session.user_id()));
    assert_eq!(task.due_date(), Some(due));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_blank_status(service: TestService, session: WorkspaceSession) {
    let result = service
        .create_task(&session, CreateTaskRequest::new("Reel", "   "))
        .await;
    assert!(matches!(
        result,
        Err(TaskServiceError::Domain(TaskDomainError::Status(_)))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_keeps_free_text_status_verbatim(service: TestService, session: WorkspaceSession) {
    let task = service
        .create_task(&session, CreateTaskRequest::new("Reel", " In Review "))
        .await
        .expect("create should succeed");
    assert_eq!(task.status().as_str(), "In Review");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updates_bump_version_and_persist(service: TestService, session: WorkspaceSession) {
    let task = service
        .create_task(&session, CreateTaskRequest::new("Carousel", "drafting"))
        .await
        .expect("create should succeed");

    service
        .update_status(
            &session,
            task.id(),
            StatusSlug::new("ai_check").expect("valid slug"),
        )
        .await
        .expect("status update should succeed");
    let patched = service
        .update_task(
            &session,
            task.id(),
            TaskPatch {
                title: Some("Carousel v2".to_owned()),
                ..TaskPatch::default()
            },
        )
        .await
        .expect("patch should succeed");

    assert_eq!(patched.version(), RecordVersion::new(3));
    let stored = service
        .find_task(&session, task.id())
        .await
        .expect("task should exist");
    assert_eq!(stored, patched);
    assert_eq!(stored.status().as_str(), "ai_check");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_in_other_workspaces_are_not_found(service: TestService, session: WorkspaceSession) {
    let task = service
        .create_task(&session, CreateTaskRequest::new("Private", "drafting"))
        .await
        .expect("create should succeed");
    let intruder = WorkspaceSession::new(WorkspaceId::new(), UserId::new());

    let update = service.update_due_date(&intruder, task.id(), None).await;
    let delete = service.delete_task(&intruder, task.id()).await;

    for result in [update.map(|_| ()), delete.map(|_| ())] {
        assert!(matches!(
            result,
            Err(TaskServiceError::Repository(TaskRepositoryError::NotFound(id))) if id == task.id()
        ));
    }
    assert!(service.find_task(&session, task.id()).await.is_ok());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_the_row(service: TestService, session: WorkspaceSession) {
    let task = service
        .create_task(&session, CreateTaskRequest::new("Throwaway", "drafting"))
        .await
        .expect("create should succeed");

    let removed = service
        .delete_task(&session, task.id())
        .await
        .expect("delete should succeed");

    assert_eq!(removed.id(), task.id());
    assert!(
        service
            .fetch_tasks(&session)
            .await
            .expect("fetch should succeed")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_a_repository_that_is_not_clone(session: WorkspaceSession) {
    let mut repository = MockTaskRepository::new();
    repository
        .expect_list_for_workspace()
        .times(2)
        .returning(|_| Ok(Vec::new()));
    let original = TaskService::new(Arc::new(repository), Arc::new(DefaultClock));
    let copy = original.clone();

    original
        .fetch_tasks(&session)
        .await
        .expect("fetch should succeed");
    let fetched = copy
        .fetch_tasks(&session)
        .await
        .expect("fetch should succeed");
    assert!(fetched.is_empty());
}
