//! Listing filters

use crate::domain::Note;

/// Conjunctive filter applied by `list`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Exact tag a note must carry.
    pub tag: Option<String>,
    /// Case-insensitive substring of title or content.
    pub search: Option<String>,
    /// Select archived notes instead of active ones.
    pub archived: bool,
}

impl NoteFilter {
    pub fn new(tag: Option<String>, search: Option<String>) -> Self {
        NoteFilter {
            tag,
            search,
            archived: false,
        }
    }

    pub fn archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Whether `note` passes every supplied criterion.
    ///
    /// Empty strings count as "no filter".
    pub fn matches(&self, note: &Note) -> bool {
        if note.archived != self.archived {
            return false;
        }

        if let Some(tag) = self.tag.as_deref().filter(|t| !t.is_empty()) {
            if !note.has_tag(tag) {
                return false;
            }
        }

        if let Some(term) = self.search.as_deref().filter(|s| !s.is_empty()) {
            if !note.mentions(term) {
                return false;
            }
        }

        true
    }

    /// Keep matching notes, preserving collection order.
    pub fn apply(&self, notes: Vec<Note>) -> Vec<Note> {
        notes.into_iter().filter(|n| self.matches(n)).collect()
    }
}
