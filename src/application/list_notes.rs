//! List notes use case

use crate::domain::{Note, NoteFilter};
use crate::error::Result;
use crate::infrastructure::NoteRepository;
use log::debug;

/// Load the collection and keep the notes matching `filter`, in collection order.
pub fn list_notes<R: NoteRepository>(repository: &R, filter: &NoteFilter) -> Result<Vec<Note>> {
    let notes = repository.load()?;
    let total = notes.len();

    let selected = filter.apply(notes);
    debug!("{} of {} notes match {:?}", selected.len(), total, filter);
    Ok(selected)
}
