//! Error types for notekeep

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notekeep application
#[derive(Debug, Error)]
pub enum NotekeepError {
    #[error("Corrupt note data in {}: {source}", .path.display())]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(serde_json::Error),

    #[error("Note ids exhausted: largest id is already {0}")]
    IdsExhausted(u64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl NotekeepError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotekeepError::Config(_) | NotekeepError::TomlDeserialize(_) => 3,
            NotekeepError::CorruptData { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotekeepError::CorruptData { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Fix the JSON by hand or move {} aside\n\
                    • Notes are never repaired automatically\n\
                    • Use --data-dir to work with a different collection",
                    self,
                    path.display()
                )
            }
            NotekeepError::Config(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Pass --data-dir <DIR> to choose where notes are kept\n\
                    • Set NOTEKEEP_DIR environment variable to your notes directory\n\
                    • Set data_dir in the config file (NOTEKEEP_CONFIG)",
                    msg
                )
            }
            NotekeepError::TomlDeserialize(_) => {
                format!(
                    "{}\n\n\
                    Expected format:\n\
                    data_dir = \"/path/to/notes\"",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotekeepError
pub type Result<T> = std::result::Result<T, NotekeepError>;
