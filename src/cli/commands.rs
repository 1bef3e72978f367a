//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notekeep")]
#[command(about = "Keep short personal notes from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding notes.json (overrides NOTEKEEP_DIR and the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    Add {
        /// Short title of the note
        #[arg(value_parser = non_blank)]
        title: String,

        /// Details or reminder text
        content: String,

        /// Comma-separated tags (e.g. work,urgent)
        #[arg(long)]
        tags: Option<String>,

        /// Due date, stored as given (e.g. 2025-01-31)
        #[arg(long)]
        due: Option<String>,
    },

    /// List notes
    List {
        /// Only notes carrying this exact tag
        #[arg(long)]
        tag: Option<String>,

        /// Only notes whose title or content contains this text (case-insensitive)
        #[arg(long)]
        search: Option<String>,

        /// Show archived notes instead of active ones
        #[arg(long)]
        archived: bool,
    },

    /// Archive a note by ID
    Archive {
        /// ID of the note
        id: u64,
    },

    /// Print the location of the notes file
    Path,
}

fn non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        Err("must not be empty".to_string())
    } else {
        Ok(value.to_string())
    }
}
