use rusqlite::ffi;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A value fell outside the declared shape of a movie document.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A write collided with a unique index (one title per movie).
    #[error("conflict: {0}")]
    Conflict(String),

    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` when the input was rejected before or at the storage
    /// boundary because it broke the movie schema.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns `true` when the storage layer itself failed.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Serialization(_))
    }
}

// Schema constraint failures map to validation and conflict errors.
impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        let Some(code) = err.sqlite_error().map(|e| e.extended_code) else {
            return Self::Database(err);
        };
        let message = err.to_string();
        match code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                Self::Conflict(message)
            }
            ffi::SQLITE_CONSTRAINT_CHECK
            | ffi::SQLITE_CONSTRAINT_TRIGGER
            | ffi::SQLITE_CONSTRAINT_NOTNULL => Self::Validation(message),
            _ => Self::Database(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
