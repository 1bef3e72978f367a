//! Application layer - Use cases and orchestration

pub mod add_note;
pub mod archive_note;
pub mod list_notes;

pub use add_note::{add_note, add_note_at};
pub use archive_note::{archive_note, ArchiveOutcome};
pub use list_notes::list_notes;
