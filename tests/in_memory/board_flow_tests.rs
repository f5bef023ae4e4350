//! In-memory integration tests for the content board.

use super::helpers::{Harness, eventually, harness, slug};
use agencydesk::board::domain::{BoardLayout, DropTarget, SortField, SortSpec, ViewKind};
use agencydesk::task::services::CreateTaskRequest;
use agencydesk::workspace::domain::{UserId, WorkspaceSession};
use chrono::{TimeZone, Utc};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn drop_on_one_client_reaches_another(harness: Harness) {
    let mine = harness.store();
    let colleague = harness.store_for(WorkspaceSession::new(
        harness.session.workspace_id(),
        UserId::new(),
    ));
    let _mine_sync = mine.subscribe(&*harness.repository);
    let _colleague_sync = colleague.subscribe(&*harness.repository);

    let created = colleague
        .create(CreateTaskRequest::new("Spring reel", "drafting"))
        .await
        .expect("create should succeed");
    assert!(eventually(|| mine.get(created.id()).is_some()).await);

    let moved = harness
        .board
        .drop_card(&mine, created.id(), &DropTarget::Column(slug("client_review")))
        .await
        .expect("drop should succeed")
        .expect("a cross-column drop updates the task");

    assert_eq!(moved.version().value(), 2);
    assert!(
        eventually(|| {
            colleague
                .get(created.id())
                .is_some_and(|task| task.status() == &slug("client_review"))
        })
        .await
    );
    assert!(harness.notifier.notices().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_status_leaves_its_tasks_unmatched(harness: Harness) {
    let store = harness.store();
    let parked = store
        .create(CreateTaskRequest::new("Launch post", "ads_handoff"))
        .await
        .expect("create should succeed");
    let entries = harness
        .statuses
        .list_statuses(&harness.session)
        .await
        .expect("statuses should seed");
    let handoff = entries
        .iter()
        .find(|entry| entry.slug() == &slug("ads_handoff"))
        .expect("default registry has ads_handoff");

    harness
        .statuses
        .delete_status(&harness.session, handoff.id())
        .await
        .expect("delete should succeed");
    let snapshot = harness
        .board
        .open_board(&store)
        .await
        .expect("board should open");

    let BoardLayout::Kanban(kanban) = snapshot.layout else {
        panic!("expected the default kanban layout");
    };
    assert_eq!(kanban.columns.len(), 7);
    assert_eq!(
        kanban.unmatched.iter().map(|task| task.id()).collect::<Vec<_>>(),
        vec![parked.id()]
    );
    let stored = store.get(parked.id()).expect("task is still loaded");
    assert_eq!(stored.status(), &slug("ads_handoff"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_a_status_reorders_the_columns(harness: Harness) {
    let store = harness.store();
    let entries = harness
        .statuses
        .list_statuses(&harness.session)
        .await
        .expect("statuses should seed");
    let last = entries.last().expect("registry is seeded");

    harness
        .statuses
        .move_status(&harness.session, last.id(), 0)
        .await
        .expect("move should succeed");
    let snapshot = harness
        .board
        .open_board(&store)
        .await
        .expect("board should open");

    let BoardLayout::Kanban(kanban) = snapshot.layout else {
        panic!("expected the default kanban layout");
    };
    let order: Vec<&str> = kanban
        .columns
        .iter()
        .map(|column| column.status.slug().as_str())
        .collect();
    assert_eq!(order.first(), Some(&"ads_handoff"));
    assert_eq!(order.get(1), Some(&"drafting"));
    assert_eq!(order.len(), 8);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn calendar_view_groups_sorted_tasks_by_day(harness: Harness) {
    let store = harness.store();
    let day = |d: u32| {
        Utc.with_ymd_and_hms(2026, 5, d, 15, 0, 0)
            .single()
            .expect("valid timestamp")
    };
    for (title, due) in [("Post B", Some(day(4))), ("Post A", Some(day(4))), ("Backlog", None)] {
        let mut request = CreateTaskRequest::new(title, "drafting");
        if let Some(due_date) = due {
            request = request.with_due_date(due_date);
        }
        store.create(request).await.expect("create should succeed");
    }
    harness
        .board
        .set_view(&harness.session, ViewKind::Calendar)
        .await
        .expect("view should save");
    harness
        .board
        .set_sort(&harness.session, Some(SortSpec::ascending(SortField::Title)))
        .await
        .expect("sort should save");

    let snapshot = harness
        .board
        .open_board(&store)
        .await
        .expect("board should open");

    let BoardLayout::Schedule {
        kind,
        days,
        unscheduled,
    } = snapshot.layout
    else {
        panic!("expected a schedule layout");
    };
    assert_eq!(kind, ViewKind::Calendar);
    assert_eq!(days.len(), 1);
    let titles: Vec<&str> = days
        .first()
        .map(|bucket| bucket.tasks.iter().map(|task| task.title()).collect())
        .unwrap_or_default();
    assert_eq!(titles, vec!["Post A", "Post B"]);
    assert_eq!(unscheduled.len(), 1);
}
