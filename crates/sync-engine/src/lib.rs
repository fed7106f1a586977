// crates/sync-engine/src/lib.rs
//! Song list to game database synchronization
//!
//! This crate keeps the game's JSON song database in step with the CSV song list:
//! - Tolerant parsing of the header-less song list
//! - Append-only updates that preserve every other key in the database
//! - Placeholder MP3/PNG staging for newly discovered tracks
//! - Atomic database writes, skipped entirely when nothing changed
//!
//! # Example
//!
//! ```rust,no_run
//! use emojihits_sync_engine::{SyncConfig, SyncEngine};
//!
//! let files = std::path::Path::new("Assets/StreamingAssets/Files");
//! let config = SyncConfig {
//!     csv_path: "Assets/StreamingAssets/musicas.csv".into(),
//!     database_path: files.join("Data/music_database.json"),
//!     sample_mp3: files.join("sampleMP3ToDefault.mp3"),
//!     sample_png: files.join("samplePNGToDefault.png"),
//!     audio_dir: files.join("Audio"),
//!     emoji_dir: files.join("Emojis"),
//! };
//!
//! let report = SyncEngine::new(config).run().expect("sync failed");
//! println!("{}", report);
//! ```

mod database;
mod engine;
mod error;
mod media;
mod songs;
mod types;

pub use database::{MusicDatabase, AUDIO_FILE_KEY, SONGS_KEY};
pub use engine::{SyncConfig, SyncEngine};
pub use error::{SyncError, SyncResult};
pub use media::stage_media;
pub use songs::{clean, parse_record, SongList, SongRows};
pub use types::{DatabaseEntry, SongRow, SyncReport};
