//! Shared field normalization for agency records.

use super::AgencyDomainError;

pub(super) fn normalize_name(kind: &'static str, name: &str) -> Result<String, AgencyDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AgencyDomainError::EmptyName(kind));
    }
    Ok(trimmed.to_owned())
}

pub(super) fn non_blank(value: impl Into<String>) -> Option<String> {
    let raw: String = value.into();
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
