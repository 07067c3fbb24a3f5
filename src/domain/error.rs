use std::io;

use thiserror::Error;

/// Library-wide error type for skelly operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure while reading, writing, or deleting files.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// An external command exited with a non-zero status.
    #[error("Command '{command}' failed: {details}")]
    Process { command: String, details: String },

    /// A template file could not be fetched from the remote repository.
    #[error("Failed to fetch '{url}': {details}")]
    Fetch { url: String, details: String },

    /// The composer manifest is missing, unreadable, or not valid JSON.
    #[error("Failed to parse composer.json: {0}")]
    ManifestParse(String),

    /// Prompt input rejected or terminal interaction failed.
    #[error("{0}")]
    Validation(String),

    /// An embedded document template failed to render.
    #[error("Template rendering failed: {0}")]
    Template(String),
}

impl AppError {
    pub(crate) fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }
}
