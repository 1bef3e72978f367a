//! Domain layer - Note model and filtering rules

pub mod filter;
pub mod note;

pub use filter::NoteFilter;
pub use note::{parse_tags, NewNote, Note, CREATED_AT_FORMAT};
