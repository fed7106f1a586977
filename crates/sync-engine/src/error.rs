// crates/sync-engine/src/error.rs
//! Error types for sync operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type for sync operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while syncing the song list into the database
#[derive(Debug, Error)]
pub enum SyncError {
    /// Song list could not be opened or a record could not be decoded
    #[error("Failed to read song list at {path}: {source}")]
    SongList { path: PathBuf, source: csv::Error },

    /// Database file exists but could not be read
    #[error("Failed to read database at {path}: {source}")]
    DatabaseRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Database file exists but is not valid JSON
    #[error("Malformed database at {path}: {source}")]
    MalformedDatabase {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Database is valid JSON but not shaped like a song database
    #[error("Unexpected database layout at {path}: {reason}")]
    UnexpectedLayout { path: PathBuf, reason: String },

    /// Failed to write the database file
    #[error("Failed to write database at {path}: {source}")]
    DatabaseWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Sample media file to duplicate does not exist
    #[error("Sample media file not found: {path}")]
    MediaSourceMissing { path: PathBuf },

    /// Copying a sample media file failed
    #[error("Failed to copy {sample} to {dest}: {source}")]
    CopyFailure {
        sample: PathBuf,
        dest: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create a directory
    #[error("Failed to create directory at {path}: {source}")]
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_source_missing_display() {
        let err = SyncError::MediaSourceMissing {
            path: PathBuf::from("Files/sampleMP3ToDefault.mp3"),
        };
        assert!(err.to_string().contains("sampleMP3ToDefault.mp3"));
    }

    #[test]
    fn test_unexpected_layout_display() {
        let err = SyncError::UnexpectedLayout {
            path: PathBuf::from("music_database.json"),
            reason: "`musicas` is not an array".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("music_database.json"));
        assert!(message.contains("not an array"));
    }

    #[test]
    fn test_malformed_database_keeps_source() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SyncError::MalformedDatabase {
            path: PathBuf::from("db.json"),
            source: parse_err,
        };
        assert!(std::error::Error::source(&err).is_some());
    }
}
