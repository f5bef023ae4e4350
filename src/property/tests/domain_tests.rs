//! Unit tests for property definitions and values.

use std::cmp::Ordering;

use crate::property::domain::{
    NewPropertyDefinition, PropertyDefinition, PropertyDefinitionPatch, PropertyDomainError,
    PropertyKind, PropertyValue, TaskProperties,
};
use chrono::NaiveDate;
use eyre::ensure;
use rstest::{fixture, rstest};
use serde_json::json;

fn options(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_owned()).collect()
}

#[fixture]
fn channel() -> PropertyDefinition {
    PropertyDefinition::create(
        NewPropertyDefinition::new("Channel", PropertyKind::Select)
            .with_options(options(&["Instagram", "TikTok"])),
    )
    .expect("valid definition")
}

#[rstest]
#[case("text", PropertyKind::Text)]
#[case("multi_select", PropertyKind::MultiSelect)]
#[case("Multi-Select", PropertyKind::MultiSelect)]
#[case(" checkbox ", PropertyKind::Checkbox)]
fn kinds_parse_from_storage_labels(#[case] raw: &str, #[case] expected: PropertyKind) {
    assert_eq!(PropertyKind::try_from(raw), Ok(expected));
}

#[rstest]
fn unknown_kind_is_rejected() {
    assert!(PropertyKind::try_from("rating").is_err());
}

#[rstest]
#[case(NewPropertyDefinition::new("  ", PropertyKind::Text), PropertyDomainError::EmptyName)]
#[case(
    NewPropertyDefinition::new("Budget", PropertyKind::Number).with_options(options(&["a"])),
    PropertyDomainError::OptionsNotSupported(PropertyKind::Number)
)]
#[case(
    NewPropertyDefinition::new("Tags", PropertyKind::MultiSelect).with_options(options(&["a", " a "])),
    PropertyDomainError::DuplicateOption("a".to_owned())
)]
#[case(
    NewPropertyDefinition::new("Tags", PropertyKind::MultiSelect).with_options(options(&[" "])),
    PropertyDomainError::EmptyOption
)]
fn invalid_definitions_are_rejected(
    #[case] request: NewPropertyDefinition,
    #[case] expected: PropertyDomainError,
) {
    assert_eq!(PropertyDefinition::create(request), Err(expected));
}

#[rstest]
fn switching_to_a_plain_kind_drops_options(mut channel: PropertyDefinition) -> eyre::Result<()> {
    channel.apply_patch(PropertyDefinitionPatch {
        kind: Some(PropertyKind::Text),
        ..PropertyDefinitionPatch::default()
    })?;
    ensure!(channel.kind() == PropertyKind::Text);
    ensure!(channel.options().is_empty());
    ensure!(channel.name() == "Channel");
    Ok(())
}

#[rstest]
fn add_option_is_idempotent(mut channel: PropertyDefinition) {
    assert_eq!(channel.add_option(" YouTube "), Ok(true));
    assert_eq!(channel.add_option("YouTube"), Ok(false));
    assert_eq!(channel.options(), options(&["Instagram", "TikTok", "YouTube"]).as_slice());
}

#[rstest]
fn add_option_requires_an_options_kind() {
    let mut notes = PropertyDefinition::create(NewPropertyDefinition::new("Notes", PropertyKind::Text))
        .expect("valid definition");
    assert_eq!(
        notes.add_option("x"),
        Err(PropertyDomainError::OptionsNotSupported(PropertyKind::Text))
    );
}

#[rstest]
#[case(PropertyKind::Url, PropertyValue::Url("https://acme.test/launch".to_owned()), true)]
#[case(PropertyKind::Url, PropertyValue::Url("acme.test".to_owned()), false)]
#[case(PropertyKind::Url, PropertyValue::Url("https:// spaced.test".to_owned()), false)]
#[case(PropertyKind::Email, PropertyValue::Email("ops@acme.test".to_owned()), true)]
#[case(PropertyKind::Email, PropertyValue::Email("ops@acme".to_owned()), false)]
#[case(PropertyKind::Email, PropertyValue::Email("first.last+q3@mail.acme.test".to_owned()), true)]
#[case(PropertyKind::Number, PropertyValue::Number(12.5), true)]
#[case(PropertyKind::Number, PropertyValue::Number(f64::NAN), false)]
#[case(PropertyKind::Checkbox, PropertyValue::Checkbox(true), true)]
#[case(PropertyKind::Checkbox, PropertyValue::Text("yes".to_owned()), false)]
fn values_are_checked_against_their_kind(
    #[case] kind: PropertyKind,
    #[case] value: PropertyValue,
    #[case] valid: bool,
) {
    let definition = PropertyDefinition::create(NewPropertyDefinition::new("Field", kind))
        .expect("valid definition");
    assert_eq!(definition.validate(&value).is_ok(), valid);
}

#[rstest]
#[case("http://:@")]
#[case("https://[")]
#[case("ftp://files.acme.test/brief.pdf")]
#[case("mailto:ops@acme.test")]
#[case("https://")]
fn malformed_urls_are_rejected(#[case] raw: &str) {
    let definition = PropertyDefinition::create(NewPropertyDefinition::new("Link", PropertyKind::Url))
        .expect("valid definition");
    assert_eq!(
        definition.validate(&PropertyValue::Url(raw.to_owned())),
        Err(PropertyDomainError::InvalidUrl(raw.to_owned()))
    );
}

#[rstest]
#[case("a@b..")]
#[case("<>@x.y")]
#[case("ops@.acme.test")]
#[case("ops@acme-.test")]
#[case("ops..team@acme.test")]
#[case("@acme.test")]
#[case("ops@team@acme.test")]
fn malformed_emails_are_rejected(#[case] raw: &str) {
    let definition =
        PropertyDefinition::create(NewPropertyDefinition::new("Contact", PropertyKind::Email))
            .expect("valid definition");
    assert_eq!(
        definition.validate(&PropertyValue::Email(raw.to_owned())),
        Err(PropertyDomainError::InvalidEmail(raw.to_owned()))
    );
}

#[rstest]
fn multi_select_rejects_unknown_and_repeated_labels() {
    let tags = PropertyDefinition::create(
        NewPropertyDefinition::new("Tags", PropertyKind::MultiSelect)
            .with_options(options(&["Paid", "Organic"])),
    )
    .expect("valid definition");

    assert_eq!(
        tags.validate(&PropertyValue::MultiSelect(options(&["Paid", "Boosted"]))),
        Err(PropertyDomainError::UnknownOption("Boosted".to_owned()))
    );
    assert_eq!(
        tags.validate(&PropertyValue::MultiSelect(options(&["Paid", "Paid"]))),
        Err(PropertyDomainError::DuplicateOption("Paid".to_owned()))
    );
    assert!(tags.validate(&PropertyValue::MultiSelect(options(&["Organic"]))).is_ok());
}

#[rstest]
fn values_serialize_as_tagged_variants() -> eyre::Result<()> {
    let date = NaiveDate::from_ymd_opt(2026, 5, 1).ok_or_else(|| eyre::eyre!("bad date"))?;
    let value = serde_json::to_value(PropertyValue::Date(date))?;
    ensure!(value == json!({ "type": "date", "value": "2026-05-01" }));

    let parsed: PropertyValue =
        serde_json::from_value(json!({ "type": "multi_select", "value": ["a", "b"] }))?;
    ensure!(parsed == PropertyValue::MultiSelect(options(&["a", "b"])));
    Ok(())
}

#[rstest]
fn typed_value_hides_entries_left_behind_by_a_kind_change(mut channel: PropertyDefinition) {
    let mut properties = TaskProperties::new();
    properties.put(channel.id(), Some(PropertyValue::Select("TikTok".to_owned())));

    channel
        .apply_patch(PropertyDefinitionPatch {
            kind: Some(PropertyKind::Checkbox),
            ..PropertyDefinitionPatch::default()
        })
        .expect("patch should apply");

    assert!(properties.get(channel.id()).is_some());
    assert!(properties.typed_value(&channel).is_none());
}

#[rstest]
#[case(PropertyValue::Number(2.0), PropertyValue::Number(10.0), Ordering::Less)]
#[case(PropertyValue::Text("b".to_owned()), PropertyValue::Text("B".to_owned()), Ordering::Greater)]
#[case(PropertyValue::Checkbox(false), PropertyValue::Checkbox(true), Ordering::Less)]
#[case(PropertyValue::Text("z".to_owned()), PropertyValue::Number(0.0), Ordering::Less)]
fn raw_value_ordering(#[case] left: PropertyValue, #[case] right: PropertyValue, #[case] expected: Ordering) {
    assert_eq!(left.compare(&right), expected);
}
