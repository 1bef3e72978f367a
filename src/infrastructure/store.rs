//! JSON file note store

use crate::domain::Note;
use crate::error::{NotekeepError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the collection inside the data directory.
pub const NOTES_FILE: &str = "notes.json";

/// Abstract store for the note collection
pub trait NoteRepository {
    /// Where the collection is persisted
    fn location(&self) -> &Path;

    /// Load the whole collection (empty if nothing was saved yet)
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the persisted collection with `notes`
    fn save(&self, notes: &[Note]) -> Result<()>;
}

/// File system implementation of NoteRepository
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    /// Create a store for `notes.json` inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Self {
        JsonFileStore::new(data_dir.join(NOTES_FILE))
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| NOTES_FILE.to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }
}

impl NoteRepository for JsonFileStore {
    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            debug!("no note file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let contents = fs::read(&self.path)?;
        let notes: Vec<Note> =
            serde_json::from_slice(&contents).map_err(|source| NotekeepError::CorruptData {
                path: self.path.clone(),
                source,
            })?;

        debug!("loaded {} notes from {}", notes.len(), self.path.display());
        Ok(notes)
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(notes).map_err(NotekeepError::Serialization)?;

        // Write beside the target and rename so readers never see a partial file
        let tmp = self.temp_path();
        if let Err(e) = fs::write(&tmp, contents) {
            let _ = fs::remove_file(&tmp);
            return Err(NotekeepError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(NotekeepError::Io(e));
        }

        debug!("saved {} notes to {}", notes.len(), self.path.display());
        Ok(())
    }
}

/// Next identifier for a collection: one past the largest id, or 1 when empty.
///
/// Fails once the largest id is `u64::MAX`; ids are never wrapped or reused.
pub fn next_id(notes: &[Note]) -> Result<u64> {
    match notes.iter().map(|n| n.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or(NotekeepError::IdsExhausted(max)),
    }
}
