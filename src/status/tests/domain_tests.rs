//! Domain-focused tests for status slugs, entries and palettes.

use crate::status::domain::{
    DEFAULT_STATUSES, StatusDomainError, StatusEntry, StatusPalette, StatusPatch, StatusSlug,
};
use crate::workspace::domain::{HexColor, WorkspaceId};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn workspace_id() -> WorkspaceId {
    WorkspaceId::new()
}

#[rstest]
#[case("In Progress", "in_progress")]
#[case("  AI   Check! ", "ai_check")]
#[case("Q3/Q4 Launch", "q3_q4_launch")]
fn slug_from_name_collapses_separators(#[case] name: &str, #[case] expected: &str) {
    let slug = StatusSlug::from_name(name).expect("valid name");
    assert_eq!(slug.as_str(), expected);
}

#[rstest]
fn slug_from_name_rejects_symbol_only_names() {
    assert_eq!(
        StatusSlug::from_name("!!!"),
        Err(StatusDomainError::InvalidSlug("!!!".to_owned()))
    );
}

#[rstest]
#[case("Client Review")]
#[case("")]
#[case("done✓")]
fn slug_new_rejects_invalid_characters(#[case] raw: &str) {
    assert!(StatusSlug::new(raw).is_err());
}

#[rstest]
fn defaults_are_eight_distinct_valid_statuses(workspace_id: WorkspaceId) {
    let entries: Vec<StatusEntry> = (0_u32..)
        .zip(DEFAULT_STATUSES.iter())
        .map(|(position, default)| {
            StatusEntry::from_default(workspace_id, default, position, &DefaultClock)
                .expect("default should build")
        })
        .collect();

    assert_eq!(entries.len(), 8);
    let names: Vec<&str> = entries.iter().map(StatusEntry::name).collect();
    assert_eq!(
        names,
        vec![
            "Drafting",
            "In Progress",
            "AI Check",
            "Internal Review",
            "Client Review",
            "Approved",
            "Published",
            "Ads Handoff",
        ]
    );
    for default in &DEFAULT_STATUSES {
        assert_eq!(
            StatusSlug::from_name(default.name).expect("valid").as_str(),
            default.slug
        );
    }
}

#[rstest]
fn patch_changes_name_and_color_but_not_slug(workspace_id: WorkspaceId) {
    let default = DEFAULT_STATUSES.first().expect("first default");
    let mut entry =
        StatusEntry::from_default(workspace_id, default, 0, &DefaultClock).expect("valid entry");

    entry
        .apply_patch(
            StatusPatch {
                name: Some("Briefing".to_owned()),
                color: Some(HexColor::new("#000").expect("valid colour")),
                icon: Some(None),
            },
            &DefaultClock,
        )
        .expect("patch should apply");

    assert_eq!(entry.name(), "Briefing");
    assert_eq!(entry.color().as_str(), "#000000");
    assert_eq!(entry.slug().as_str(), "drafting");
    assert!(entry.icon().is_none());
}

#[rstest]
fn patch_with_blank_name_leaves_entry_unchanged(workspace_id: WorkspaceId) {
    let default = DEFAULT_STATUSES.first().expect("first default");
    let mut entry =
        StatusEntry::from_default(workspace_id, default, 0, &DefaultClock).expect("valid entry");
    let before = entry.clone();

    let result = entry.apply_patch(
        StatusPatch {
            name: Some("  ".to_owned()),
            ..StatusPatch::default()
        },
        &DefaultClock,
    );

    assert_eq!(result, Err(StatusDomainError::EmptyName));
    assert_eq!(entry, before);
}

#[rstest]
fn palette_orders_by_position_and_resolves_slugs(workspace_id: WorkspaceId) {
    let drafting = StatusEntry::from_default(
        workspace_id,
        DEFAULT_STATUSES.first().expect("drafting"),
        1,
        &DefaultClock,
    )
    .expect("valid entry");
    let approved = StatusEntry::from_default(
        workspace_id,
        DEFAULT_STATUSES.get(5).expect("approved"),
        0,
        &DefaultClock,
    )
    .expect("valid entry");

    let palette = StatusPalette::new(vec![drafting.clone(), approved.clone()]);

    assert_eq!(palette.entries(), &[approved.clone(), drafting.clone()]);
    assert_eq!(palette.first_slug(), Some(approved.slug()));
    assert_eq!(palette.resolve(drafting.slug()), Some(&drafting));
    let orphan = StatusSlug::new("archived").expect("valid slug");
    assert!(palette.resolve(&orphan).is_none());
}
