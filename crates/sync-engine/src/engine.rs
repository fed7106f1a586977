// crates/sync-engine/src/engine.rs
//! Main sync engine

use crate::database::MusicDatabase;
use crate::error::SyncResult;
use crate::media::stage_media;
use crate::songs::SongList;
use crate::types::{DatabaseEntry, SyncReport};
use std::path::PathBuf;

/// Paths used by a sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Song list to read
    pub csv_path: PathBuf,
    /// JSON database to update
    pub database_path: PathBuf,
    /// Placeholder MP3 copied for every new track
    pub sample_mp3: PathBuf,
    /// Placeholder PNG copied for every new track
    pub sample_png: PathBuf,
    /// Destination directory for `{slug}.mp3`
    pub audio_dir: PathBuf,
    /// Destination directory for `{slug}.png`
    pub emoji_dir: PathBuf,
}

/// Syncs a song list into the JSON database and stages placeholder media
pub struct SyncEngine {
    config: SyncConfig,
}

impl SyncEngine {
    /// Creates a new sync engine
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Runs one sync pass
    ///
    /// Songs whose audio file is already referenced by the database are
    /// skipped; the first occurrence of a slug wins. Media is staged as each
    /// song is added, but the database is only written once, after every song
    /// has been processed, and only if something was added. Any error aborts
    /// the run with the database file untouched.
    pub fn run(&self) -> SyncResult<SyncReport> {
        let mut database = MusicDatabase::load(&self.config.database_path)?;
        let mut known_tracks = database.track_files();
        let mut report = SyncReport::default();

        let songs = SongList::new(&self.config.csv_path);
        for song in songs.rows()? {
            let song = song?;
            let audio_file = song.audio_file();

            if known_tracks.contains(&audio_file) {
                log::debug!("Track {} already in database, skipping", audio_file);
                continue;
            }

            let entry = DatabaseEntry::for_song(&song);
            database.push(&entry)?;
            known_tracks.insert(audio_file.clone());

            if stage_media(&self.config.sample_mp3, &self.config.audio_dir.join(&audio_file))? {
                report.mp3_copied += 1;
            }
            if stage_media(
                &self.config.sample_png,
                &self.config.emoji_dir.join(song.emoji_file()),
            )? {
                report.png_copied += 1;
            }

            report.added += 1;
            log::info!("Added track {} ({})", song.slug, entry.name);
        }

        if report.added > 0 {
            database.save()?;
        } else {
            log::info!("No new tracks, leaving {} untouched", database.path().display());
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup(csv: &str) -> (TempDir, SyncConfig) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("musicas.csv"), csv).unwrap();
        fs::write(root.join("sample.mp3"), b"mp3").unwrap();
        fs::write(root.join("sample.png"), b"png").unwrap();

        let config = SyncConfig {
            csv_path: root.join("musicas.csv"),
            database_path: root.join("Data").join("music_database.json"),
            sample_mp3: root.join("sample.mp3"),
            sample_png: root.join("sample.png"),
            audio_dir: root.join("Audio"),
            emoji_dir: root.join("Emojis"),
        };
        (temp_dir, config)
    }

    #[test]
    fn test_empty_song_list_writes_nothing() {
        let (_temp_dir, config) = setup("");
        let report = SyncEngine::new(config.clone()).run().unwrap();

        assert_eq!(report, SyncReport::default());
        assert!(!config.database_path.exists());
    }

    #[test]
    fn test_duplicate_slug_first_wins() {
        let (_temp_dir, config) = setup("sun,first,Sun One,Ana\nsun,second,Sun Two,Bia\n");
        let report = SyncEngine::new(config.clone()).run().unwrap();

        assert_eq!(report.added, 1);
        assert_eq!(report.mp3_copied, 1);
        assert_eq!(report.png_copied, 1);

        let database = MusicDatabase::load(&config.database_path).unwrap();
        assert_eq!(database.songs().len(), 1);
        assert_eq!(database.songs()[0]["musica"], "Sun One");
    }

    #[test]
    fn test_missing_sample_aborts_without_saving() {
        let (_temp_dir, config) = setup("sun,la,Sun,Ana\n");
        fs::remove_file(&config.sample_png).unwrap();

        let result = SyncEngine::new(config.clone()).run();
        assert!(result.is_err());
        assert!(!config.database_path.exists());
        // Media staged before the failure stays behind
        assert!(config.audio_dir.join("sun.mp3").exists());
    }
}
