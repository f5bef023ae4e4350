//! Rich content blocks and AI review results attached to a task.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Structured rich-text document, stored as an array of blocks.
///
/// The block layout belongs to the editor; this crate only builds paragraph
/// blocks from plain text and extracts text back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentDocument(Value);

impl Default for ContentDocument {
    fn default() -> Self {
        Self(Value::Array(Vec::new()))
    }
}

impl ContentDocument {
    /// Wraps an editor document as-is.
    #[must_use]
    pub const fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// Builds one paragraph block per non-blank line of `text`.
    #[must_use]
    pub fn from_plain_text(text: &str) -> Self {
        let blocks = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                json!({
                    "type": "paragraph",
                    "content": [{ "type": "text", "text": line }],
                })
            })
            .collect();
        Self(Value::Array(blocks))
    }

    /// Returns the raw document.
    #[must_use]
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Returns `true` when the document holds no blocks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            Value::Array(blocks) => blocks.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// Concatenates every `text` leaf, one line per top-level block.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match &self.0 {
            Value::Array(blocks) => blocks
                .iter()
                .map(|block| {
                    let mut line = String::new();
                    collect_text(block, &mut line);
                    line
                })
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
            other => {
                let mut text = String::new();
                collect_text(other, &mut text);
                text
            }
        }
    }
}

fn collect_text(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(text)) = map.get("text") {
                out.push_str(text);
            }
            for (key, child) in map {
                if key != "text" {
                    collect_text(child, out);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_text(item, out);
            }
        }
        _ => {}
    }
}

/// AI quality score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct AiScore(u8);

impl AiScore {
    /// Creates a validated score.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::AiScoreOutOfRange`] above 100.
    pub fn new(value: u16) -> Result<Self, TaskDomainError> {
        u8::try_from(value)
            .ok()
            .filter(|score| *score <= 100)
            .map(Self)
            .ok_or(TaskDomainError::AiScoreOutOfRange(value))
    }

    /// Returns the score.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u16> for AiScore {
    type Error = TaskDomainError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AiScore> for u16 {
    fn from(value: AiScore) -> Self {
        Self::from(value.0)
    }
}

/// Result of an AI content review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    /// Quality score.
    pub score: AiScore,
    /// Reviewer feedback shown next to the score.
    pub feedback: String,
}
