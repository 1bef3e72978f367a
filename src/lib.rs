//! notekeep - Personal note-keeping from the terminal
//!
//! Notes are kept in a single JSON file under the user's data directory.
//! Every command loads the whole collection, works on it in memory and, when
//! it changed something, writes the whole collection back.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NotekeepError;
