//! User-facing notices raised when a call fails.
//!
//! Screens render notices as transient toasts. The [`Notifier`] port keeps
//! the services free of any UI type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Confirmation of a completed action.
    Success,
    /// Partial failure the user should know about.
    Warning,
    /// Failed action.
    Error,
}

/// One message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Human-readable text.
    pub message: String,
}

impl Notice {
    /// Builds a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Builds a warning notice.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// Builds an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Sink for user-facing notices.
pub trait Notifier: Send + Sync {
    /// Shows `notice` to the user.
    fn notify(&self, notice: Notice);
}

/// Notifier that records every notice, for tests and polling UIs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    notices: Arc<RwLock<Vec<Notice>>>,
}

impl InMemoryNotifier {
    /// Creates an empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notice recorded so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns the recorded notices.
    #[must_use]
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.write().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, notice: Notice) {
        self.notices
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }
}

/// Notifier that only writes notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => tracing::info!(text = %notice.message, "user notice"),
            NoticeLevel::Warning => tracing::warn!(text = %notice.message, "user notice"),
            NoticeLevel::Error => tracing::error!(text = %notice.message, "user notice"),
        }
    }
}
