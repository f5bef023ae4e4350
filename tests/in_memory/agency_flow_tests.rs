//! In-memory integration tests for client onboarding and AI planning.

use std::sync::Arc;

use agencydesk::agency::{
    adapters::memory::InMemoryRecordRepository,
    domain::{AgencyRecord, Client, Persona, Project, Strategy},
    services::{ClientProvisioning, ClientProvisioningService, RecordService},
};
use agencydesk::assistant::{
    adapters::canned::CannedContentAssistant,
    domain::{AutoPlanRequest, PlannedTask},
    services::AssistantService,
};
use agencydesk::status::domain::StatusSlug;
use agencydesk::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{AiScore, ContentAnalysis, TaskPriority},
    services::{CreateTaskRequest, TaskService},
};
use agencydesk::workspace::domain::{UserId, WorkspaceId, WorkspaceSession};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn session() -> WorkspaceSession {
    WorkspaceSession::new(WorkspaceId::new(), UserId::new())
}

fn assistant(plan: Vec<PlannedTask>) -> CannedContentAssistant {
    let analysis = ContentAnalysis {
        score: AiScore::new(88).expect("score should be valid"),
        feedback: "Strong hook".to_owned(),
    };
    CannedContentAssistant::new("Meet the summer range.\nShop now.", analysis, plan)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn provisioned_project_is_planned_into_tasks(session: WorkspaceSession) {
    let clients = Arc::new(InMemoryRecordRepository::<Client>::new());
    let strategies = Arc::new(InMemoryRecordRepository::<Strategy>::new());
    let projects = Arc::new(InMemoryRecordRepository::<Project>::new());
    let provisioning = ClientProvisioningService::new(
        Arc::clone(&clients),
        Arc::clone(&strategies),
        Arc::clone(&projects),
        Arc::new(DefaultClock),
    );

    let provisioned = provisioning
        .provision(
            &session,
            ClientProvisioning::new("Harbour Coffee")
                .with_industry("Hospitality")
                .with_strategy("Summer 2026", vec!["Grow Instagram reach".to_owned()])
                .with_project("Summer launch", Some("Three-week social push".to_owned())),
        )
        .await
        .expect("provisioning should succeed");
    let project = provisioned.project.expect("project was requested");
    assert_eq!(project.client_id(), Some(provisioned.client.id()));

    let tasks = TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(DefaultClock));
    let planner = Arc::new(assistant(vec![
        PlannedTask {
            priority: Some(TaskPriority::High),
            ..PlannedTask::titled("Shoot product stills")
        },
        PlannedTask::titled("Write launch captions"),
    ]));
    let service = AssistantService::new(Arc::clone(&planner), tasks.clone());
    let drafting = StatusSlug::new("drafting").expect("valid slug");

    let created = service
        .auto_plan(
            &session,
            &AutoPlanRequest::new(project.brief().unwrap_or_default()).with_project(project.id()),
            &drafting,
        )
        .await
        .expect("plan should apply");

    assert_eq!(created, 2);
    let planned = tasks.fetch_tasks(&session).await.expect("fetch should succeed");
    assert!(planned.iter().all(|task| task.project_id() == Some(project.id())));
    let requests = planner.plan_requests();
    assert_eq!(
        requests.first().map(|request| request.brief.as_str()),
        Some("Three-week social push")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn persona_shapes_the_draft_and_review_scores_it(session: WorkspaceSession) {
    let personas = RecordService::new(Arc::new(InMemoryRecordRepository::<Persona>::new()));
    let persona = Persona::new(session.workspace_id(), "Weekend barista", &DefaultClock)
        .expect("persona should be valid")
        .with_description("Runs a small cafe")
        .with_pain_point("No time for social media");
    personas
        .upsert(&session, &persona)
        .await
        .expect("persona should save");
    let stored = personas
        .find(&session, persona.id())
        .await
        .expect("persona should load");

    let tasks = TaskService::new(Arc::new(InMemoryTaskRepository::new()), Arc::new(DefaultClock));
    let task = tasks
        .create_task(&session, CreateTaskRequest::new("Launch post", "drafting"))
        .await
        .expect("task should be created");
    let canned = Arc::new(assistant(Vec::new()));
    let service = AssistantService::new(Arc::clone(&canned), tasks);

    service
        .draft_content(&session, task.id(), "Friendly tone", Some(&stored))
        .await
        .expect("draft should succeed");
    let reviewed = service
        .review_content(&session, task.id())
        .await
        .expect("review should succeed");

    assert_eq!(reviewed.ai_score().map(AiScore::value), Some(88));
    assert_eq!(reviewed.ai_feedback(), Some("Strong hook"));
    let analyzed = canned.analyze_requests();
    assert_eq!(
        analyzed.first().map(|request| request.content.as_str()),
        Some("Meet the summer range.\nShop now.")
    );
    let generated = canned.generate_requests();
    assert!(
        generated
            .first()
            .is_some_and(|request| request.context.contains("Pain points: No time for social media"))
    );
}
