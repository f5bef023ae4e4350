//! Domain model for board views.

mod error;
mod filter;
mod kanban;
mod layout;
mod sort;
mod view;

pub use error::{ParseSortFieldError, ParseViewKindError};
pub use filter::TaskFilter;
pub use kanban::{DropTarget, KanbanBoard, KanbanColumn, resolve_drop};
pub use layout::{BoardLayout, DayBucket, StatusCount, render_view};
pub use sort::{SortDirection, SortField, SortSpec, sort_tasks};
pub use view::{ViewKind, ViewPreference};
