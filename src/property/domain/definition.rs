//! Property definitions: the per-workspace custom field schema.

use super::{ParsePropertyKindError, PropertyDefinitionId, PropertyDomainError, PropertyValue};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// The eight primitive kinds a custom property can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    /// Free text.
    Text,
    /// Finite floating-point number.
    Number,
    /// One label out of the definition's options.
    Select,
    /// Any subset of the definition's options.
    MultiSelect,
    /// Calendar date.
    Date,
    /// Boolean flag.
    Checkbox,
    /// Absolute http(s) URL.
    Url,
    /// Email address.
    Email,
}

impl PropertyKind {
    /// All kinds, in the order editors list them.
    pub const ALL: [Self; 8] = [
        Self::Text,
        Self::Number,
        Self::Select,
        Self::MultiSelect,
        Self::Date,
        Self::Checkbox,
        Self::Url,
        Self::Email,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Select => "select",
            Self::MultiSelect => "multi_select",
            Self::Date => "date",
            Self::Checkbox => "checkbox",
            Self::Url => "url",
            Self::Email => "email",
        }
    }

    /// Returns `true` for the kinds that carry an options list.
    #[must_use]
    pub const fn has_options(self) -> bool {
        matches!(self, Self::Select | Self::MultiSelect)
    }
}

impl TryFrom<&str> for PropertyKind {
    type Error = ParsePropertyKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParsePropertyKindError(value.to_owned()))
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a workspace's task property schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    id: PropertyDefinitionId,
    name: String,
    #[serde(rename = "type")]
    kind: PropertyKind,
    #[serde(default)]
    options: Vec<String>,
}

/// Input for appending a definition to a workspace schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPropertyDefinition {
    name: String,
    kind: PropertyKind,
    options: Vec<String>,
}

impl NewPropertyDefinition {
    /// Creates a definition request without options.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            options: Vec::new(),
        }
    }

    /// Sets the initial options (select and multi-select only).
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = String>) -> Self {
        self.options = options.into_iter().collect();
        self
    }
}

/// Partial update of an existing definition.
///
/// Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyDefinitionPatch {
    /// New display name.
    pub name: Option<String>,
    /// New kind. Stored values are not converted.
    pub kind: Option<PropertyKind>,
    /// Replacement options list.
    pub options: Option<Vec<String>>,
}

impl PropertyDefinition {
    /// Builds a validated definition with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDomainError`] when the name is blank, options are
    /// given for a kind without options, or an option is blank or repeated.
    pub fn create(request: NewPropertyDefinition) -> Result<Self, PropertyDomainError> {
        let NewPropertyDefinition {
            name,
            kind,
            options,
        } = request;
        Ok(Self {
            id: PropertyDefinitionId::new(),
            name: normalize_name(&name)?,
            kind,
            options: normalize_options(kind, options)?,
        })
    }

    /// Returns the definition identifier.
    #[must_use]
    pub const fn id(&self) -> PropertyDefinitionId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the property kind.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Returns the option labels, in display order.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Applies a patch in place.
    ///
    /// Switching to a kind without options drops the options list.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDomainError`] when the patched name or options are
    /// invalid; the definition is unchanged in that case.
    pub fn apply_patch(&mut self, patch: PropertyDefinitionPatch) -> Result<(), PropertyDomainError> {
        let name = match patch.name {
            Some(name) => normalize_name(&name)?,
            None => self.name.clone(),
        };
        let kind = patch.kind.unwrap_or(self.kind);
        let options = match patch.options {
            Some(options) => normalize_options(kind, options)?,
            None if kind.has_options() => self.options.clone(),
            None => Vec::new(),
        };

        self.name = name;
        self.kind = kind;
        self.options = options;
        Ok(())
    }

    /// Appends an option label.
    ///
    /// Returns `false` without changing anything when the label already
    /// exists.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDomainError::OptionsNotSupported`] for kinds without
    /// options and [`PropertyDomainError::EmptyOption`] for blank labels.
    pub fn add_option(&mut self, label: &str) -> Result<bool, PropertyDomainError> {
        if !self.kind.has_options() {
            return Err(PropertyDomainError::OptionsNotSupported(self.kind));
        }
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(PropertyDomainError::EmptyOption);
        }
        if self.options.iter().any(|option| option == trimmed) {
            return Ok(false);
        }
        self.options.push(trimmed.to_owned());
        Ok(true)
    }

    /// Checks that `value` may be stored under this definition.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyDomainError`] describing the first violation.
    pub fn validate(&self, value: &PropertyValue) -> Result<(), PropertyDomainError> {
        if value.kind() != self.kind {
            return Err(PropertyDomainError::KindMismatch {
                definition: self.kind,
                value: value.kind(),
            });
        }

        match value {
            PropertyValue::Number(number) if !number.is_finite() => {
                Err(PropertyDomainError::NonFiniteNumber)
            }
            PropertyValue::Select(label) => self.ensure_option(label),
            PropertyValue::MultiSelect(labels) => {
                let mut seen = HashSet::new();
                for label in labels {
                    self.ensure_option(label)?;
                    if !seen.insert(label.as_str()) {
                        return Err(PropertyDomainError::DuplicateOption(label.clone()));
                    }
                }
                Ok(())
            }
            PropertyValue::Url(url) if !is_http_url(url) => {
                Err(PropertyDomainError::InvalidUrl(url.clone()))
            }
            PropertyValue::Email(email) if !is_email(email) => {
                Err(PropertyDomainError::InvalidEmail(email.clone()))
            }
            _ => Ok(()),
        }
    }

    fn ensure_option(&self, label: &str) -> Result<(), PropertyDomainError> {
        if self.options.iter().any(|option| option == label) {
            Ok(())
        } else {
            Err(PropertyDomainError::UnknownOption(label.to_owned()))
        }
    }
}

fn normalize_name(name: &str) -> Result<String, PropertyDomainError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PropertyDomainError::EmptyName);
    }
    Ok(trimmed.to_owned())
}

fn normalize_options(
    kind: PropertyKind,
    options: Vec<String>,
) -> Result<Vec<String>, PropertyDomainError> {
    if !kind.has_options() {
        if options.is_empty() {
            return Ok(options);
        }
        return Err(PropertyDomainError::OptionsNotSupported(kind));
    }

    let mut normalized: Vec<String> = Vec::with_capacity(options.len());
    for option in options {
        let trimmed = option.trim();
        if trimmed.is_empty() {
            return Err(PropertyDomainError::EmptyOption);
        }
        if normalized.iter().any(|existing| existing == trimmed) {
            return Err(PropertyDomainError::DuplicateOption(trimmed.to_owned()));
        }
        normalized.push(trimmed.to_owned());
    }
    Ok(normalized)
}

fn is_http_url(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    Url::parse(value).is_ok_and(|parsed| {
        matches!(parsed.scheme(), "http" | "https")
            && parsed.host_str().is_some_and(|host| !host.is_empty())
    })
}

const LOCAL_PART_SYMBOLS: &str = "!#$%&'*+/=?^_`{|}~-";

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    is_local_part(local) && is_domain(domain)
}

fn is_local_part(local: &str) -> bool {
    !local.is_empty()
        && local.split('.').all(|atom| {
            !atom.is_empty()
                && atom
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c))
        })
}

fn is_domain(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}
