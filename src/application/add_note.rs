//! Add note use case

use crate::domain::{NewNote, Note};
use crate::error::Result;
use crate::infrastructure::{next_id, NoteRepository};
use chrono::{Local, NaiveDateTime};
use log::info;

/// Append a new note to the collection and persist it.
pub fn add_note<R: NoteRepository>(repository: &R, input: NewNote) -> Result<Note> {
    add_note_at(repository, input, Local::now().naive_local())
}

/// Same as [`add_note`] with an explicit creation time.
pub fn add_note_at<R: NoteRepository>(
    repository: &R,
    input: NewNote,
    created_at: NaiveDateTime,
) -> Result<Note> {
    let mut notes = repository.load()?;

    let note = Note::new(next_id(&notes)?, input, created_at);
    notes.push(note.clone());
    repository.save(&notes)?;

    info!("created note #{}", note.id);
    Ok(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotekeepError;
    use crate::infrastructure::JsonFileStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn input(title: &str, content: &str) -> NewNote {
        NewNote {
            title: title.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_first_note_gets_id_one() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp.path());

        let note = add_note(&store, input("Buy milk", "2% please")).unwrap();

        assert_eq!(note.id, 1);
        assert_eq!(store.load().unwrap(), vec![note]);
    }

    #[test]
    fn test_ids_increase_across_stores() {
        let temp = TempDir::new().unwrap();

        // A fresh store value per call mimics separate invocations
        for expected in 1..=4 {
            let store = JsonFileStore::in_dir(temp.path());
            let note = add_note(&store, input("n", "c")).unwrap();
            assert_eq!(note.id, expected);
        }

        let ids: Vec<u64> = JsonFileStore::in_dir(temp.path())
            .load()
            .unwrap()
            .iter()
            .map(|n| n.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_ids_not_reused_after_archive() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp.path());

        add_note(&store, input("a", "a")).unwrap();
        let mut notes = store.load().unwrap();
        notes[0].archived = true;
        store.save(&notes).unwrap();

        let note = add_note(&store, input("b", "b")).unwrap();
        assert_eq!(note.id, 2);
    }

    #[test]
    fn test_add_fails_when_ids_exhausted() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp.path());

        add_note(&store, input("last", "one")).unwrap();
        let mut notes = store.load().unwrap();
        notes[0].id = u64::MAX;
        store.save(&notes).unwrap();
        let before = std::fs::read(store.location()).unwrap();

        let result = add_note(&store, input("overflow", "never stored"));

        assert!(matches!(result, Err(NotekeepError::IdsExhausted(u64::MAX))));
        assert_eq!(std::fs::read(store.location()).unwrap(), before);
    }

    #[test]
    fn test_add_with_tags_and_due_date() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::in_dir(temp.path());
        let created = NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();

        let note = add_note_at(
            &store,
            NewNote {
                title: "Call Bob".to_string(),
                content: "re: contract".to_string(),
                tags: Some("work,urgent".to_string()),
                due_date: Some("2025-03-10".to_string()),
            },
            created,
        )
        .unwrap();

        assert_eq!(note.tags, vec!["work", "urgent"]);
        assert_eq!(note.due_date.as_deref(), Some("2025-03-10"));
        assert_eq!(note.created_at, "2025-03-01T08:00:00");
    }
}
