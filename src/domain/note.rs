//! Note entity

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format used for `created_at` (ISO-8601, second precision, local time).
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single user-authored note as it is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

/// User input for a note that does not exist yet.
#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tags: Option<String>,
    pub due_date: Option<String>,
}

impl Note {
    /// Build a fresh, unarchived note from user input.
    ///
    /// Title and content are trimmed, `tags` is parsed with [`parse_tags`] and
    /// the due date is kept verbatim.
    pub fn new(id: u64, input: NewNote, created_at: NaiveDateTime) -> Self {
        Note {
            id,
            title: input.title.trim().to_string(),
            content: input.content.trim().to_string(),
            tags: input.tags.as_deref().map(parse_tags).unwrap_or_default(),
            created_at: created_at.format(CREATED_AT_FORMAT).to_string(),
            due_date: input.due_date,
            archived: false,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Case-insensitive substring match against title or content.
    pub fn mentions(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.content.to_lowercase().contains(&term)
    }
}

/// Split a comma-separated tag list.
///
/// Segments are trimmed and empty ones dropped; order and duplicates are kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
