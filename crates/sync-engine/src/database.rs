// crates/sync-engine/src/database.rs
//! JSON song database persistence
//!
//! The database is owned by the game's asset pipeline, so this module only
//! ever appends to the `musicas` array. Every other key, and the order keys
//! appear in, is written back exactly as it was read.

use crate::error::{SyncError, SyncResult};
use crate::types::DatabaseEntry;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Key holding the ordered song list
pub const SONGS_KEY: &str = "musicas";

/// Key holding the audio file name inside each song
pub const AUDIO_FILE_KEY: &str = "arquivoMusica";

/// An in-memory copy of the JSON song database
#[derive(Debug, Clone)]
pub struct MusicDatabase {
    path: PathBuf,
    document: Map<String, Value>,
}

impl MusicDatabase {
    /// Loads the database from `path`
    ///
    /// A missing file yields an empty document. A file that is not valid JSON,
    /// or whose layout is not a song database, is an error.
    pub fn load(path: impl Into<PathBuf>) -> SyncResult<Self> {
        let path = path.into();

        if !path.exists() {
            log::info!(
                "Database not found at {}, starting from an empty document",
                path.display()
            );
            return Ok(Self {
                path,
                document: Map::new(),
            });
        }

        let contents = fs::read_to_string(&path).map_err(|e| SyncError::DatabaseRead {
            path: path.clone(),
            source: e,
        })?;

        let value: Value =
            serde_json::from_str(&contents).map_err(|e| SyncError::MalformedDatabase {
                path: path.clone(),
                source: e,
            })?;

        let document = match value {
            Value::Object(document) => document,
            other => {
                return Err(SyncError::UnexpectedLayout {
                    path,
                    reason: format!("top level is {}, expected an object", kind_of(&other)),
                })
            }
        };

        Self::check_songs(&path, &document)?;

        let database = Self { path, document };
        log::info!(
            "Loaded {} songs from {}",
            database.songs().len(),
            database.path.display()
        );
        Ok(database)
    }

    fn check_songs(path: &Path, document: &Map<String, Value>) -> SyncResult<()> {
        let songs = match document.get(SONGS_KEY) {
            None => return Ok(()),
            Some(Value::Array(songs)) => songs,
            Some(other) => {
                return Err(SyncError::UnexpectedLayout {
                    path: path.to_path_buf(),
                    reason: format!("`{}` is {}, expected an array", SONGS_KEY, kind_of(other)),
                })
            }
        };

        if let Some(index) = songs.iter().position(|song| !song.is_object()) {
            return Err(SyncError::UnexpectedLayout {
                path: path.to_path_buf(),
                reason: format!("`{}[{}]` is not an object", SONGS_KEY, index),
            });
        }

        Ok(())
    }

    /// Returns the database file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the songs currently in the database
    pub fn songs(&self) -> &[Value] {
        match self.document.get(SONGS_KEY) {
            Some(Value::Array(songs)) => songs,
            _ => &[],
        }
    }

    /// Returns the set of audio file names already referenced by songs
    pub fn track_files(&self) -> HashSet<String> {
        self.songs()
            .iter()
            .filter_map(|song| song.get(AUDIO_FILE_KEY))
            .filter_map(Value::as_str)
            .filter(|file| !file.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Appends an entry to the song list, creating the list if needed
    pub fn push(&mut self, entry: &DatabaseEntry) -> SyncResult<()> {
        let value = serde_json::to_value(entry)?;
        let songs = self
            .document
            .entry(SONGS_KEY)
            .or_insert_with(|| Value::Array(Vec::new()));

        match songs {
            Value::Array(songs) => {
                songs.push(value);
                Ok(())
            }
            other => Err(SyncError::UnexpectedLayout {
                path: self.path.clone(),
                reason: format!("`{}` is {}, expected an array", SONGS_KEY, kind_of(other)),
            }),
        }
    }

    /// Renders the document the way it is stored on disk
    ///
    /// Two-space indentation, non-ASCII text left unescaped, trailing newline.
    pub fn to_pretty_string(&self) -> SyncResult<String> {
        let mut rendered = serde_json::to_string_pretty(&self.document)?;
        rendered.push('\n');
        Ok(rendered)
    }

    /// Writes the database back to its file atomically
    ///
    /// The document is written to a temporary file next to the target and
    /// renamed over it, so readers never observe a half-written database.
    pub fn save(&self) -> SyncResult<()> {
        let rendered = self.to_pretty_string()?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| SyncError::Filesystem {
                path: dir.clone(),
                source: e,
            })?;
            log::info!("Created database directory: {}", dir.display());
        }

        let mut temp_file = NamedTempFile::new_in(&dir).map_err(|e| SyncError::DatabaseWrite {
            path: self.path.clone(),
            source: e,
        })?;

        temp_file
            .write_all(rendered.as_bytes())
            .and_then(|_| temp_file.flush())
            .map_err(|e| SyncError::DatabaseWrite {
                path: self.path.clone(),
                source: e,
            })?;

        temp_file
            .persist(&self.path)
            .map_err(|e| SyncError::DatabaseWrite {
                path: self.path.clone(),
                source: e.error,
            })?;

        log::info!("Database saved to {}", self.path.display());
        Ok(())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
