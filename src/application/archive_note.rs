//! Archive note use case

use crate::error::Result;
use crate::infrastructure::NoteRepository;
use log::info;

/// Result of an archive request. Not finding the note is a normal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveOutcome {
    Archived(u64),
    NotFound(u64),
}

/// Mark the note with `id` as archived.
///
/// The collection is only saved when the note exists. Archiving an already
/// archived note succeeds and saves again.
pub fn archive_note<R: NoteRepository>(repository: &R, id: u64) -> Result<ArchiveOutcome> {
    let mut notes = repository.load()?;

    let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
        info!("note #{} not found, store untouched", id);
        return Ok(ArchiveOutcome::NotFound(id));
    };
    note.archived = true;

    repository.save(&notes)?;
    info!("archived note #{}", id);
    Ok(ArchiveOutcome::Archived(id))
}
