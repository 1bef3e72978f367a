//! Output formatting utilities

use crate::application::ArchiveOutcome;
use crate::domain::Note;

/// Format a list of notes for display
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes to show.".to_string();
    }

    notes
        .iter()
        .map(format_note)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single note as a header line and an indented body.
pub fn format_note(note: &Note) -> String {
    let mut header = format!("#{} {}", note.id, note.title);
    if !note.tags.is_empty() {
        header.push_str(&format!(" [tags: {}]", note.tags.join(", ")));
    }
    if let Some(due) = &note.due_date {
        header.push_str(&format!(" (due: {})", due));
    }

    format!("{}\n  {}\n", header, note.content)
}

pub fn format_created(note: &Note) -> String {
    format!("Created note with ID {}.", note.id)
}

pub fn format_archive_outcome(outcome: ArchiveOutcome) -> String {
    match outcome {
        ArchiveOutcome::Archived(id) => format!("Archived note #{}.", id),
        ArchiveOutcome::NotFound(id) => format!("No note found with ID {}.", id),
    }
}
