//! View kinds and per-user view preferences.

use super::{ParseViewKindError, SortSpec, TaskFilter};
use crate::workspace::domain::{UserId, WorkspaceId, WorkspaceSession};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Renderer selected for the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Status columns.
    #[default]
    Kanban,
    /// Spreadsheet rows.
    Table,
    /// Due-date calendar.
    Calendar,
    /// Compact rows.
    List,
    /// Due-date timeline.
    Timeline,
    /// Social-feed preview cards.
    Feed,
    /// Thumbnail grid.
    Gallery,
    /// Status counts.
    Chart,
}

impl ViewKind {
    /// All kinds, in menu order.
    pub const ALL: [Self; 8] = [
        Self::Kanban,
        Self::Table,
        Self::Calendar,
        Self::List,
        Self::Timeline,
        Self::Feed,
        Self::Gallery,
        Self::Chart,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kanban => "kanban",
            Self::Table => "table",
            Self::Calendar => "calendar",
            Self::List => "list",
            Self::Timeline => "timeline",
            Self::Feed => "feed",
            Self::Gallery => "gallery",
            Self::Chart => "chart",
        }
    }
}

impl TryFrom<&str> for ViewKind {
    type Error = ParseViewKindError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ParseViewKindError(value.to_owned()))
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A member's saved board settings in one workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPreference {
    /// Workspace the preference applies to.
    pub workspace_id: WorkspaceId,
    /// Member who saved it.
    pub user_id: UserId,
    /// Selected renderer.
    pub kind: ViewKind,
    /// Saved sort, if any.
    #[serde(default)]
    pub sort: Option<SortSpec>,
    /// Saved filter, if any.
    #[serde(default)]
    pub filter: Option<TaskFilter>,
}

impl ViewPreference {
    /// Default preference for a session: kanban, unsorted, unfiltered.
    #[must_use]
    pub fn default_for(session: &WorkspaceSession) -> Self {
        Self {
            workspace_id: session.workspace_id(),
            user_id: session.user_id(),
            kind: ViewKind::default(),
            sort: None,
            filter: None,
        }
    }
}
