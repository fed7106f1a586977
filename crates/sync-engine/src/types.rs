// crates/sync-engine/src/types.rs
//! Core types for song syncing

use serde::{Deserialize, Serialize};
use std::fmt;

/// Extension of every staged audio file
pub const AUDIO_EXTENSION: &str = "mp3";

/// Extension of every staged emoji image
pub const EMOJI_EXTENSION: &str = "png";

/// Directory prefix the game uses to resolve emoji images
pub const EMOJI_PREFIX: &str = "Emojis";

/// One song parsed from the song list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRow {
    /// Filesystem-safe identifier, never empty
    pub slug: String,
    /// Display name, falls back to the slug
    pub name: String,
    pub author: String,
    pub lyrics: String,
}

impl SongRow {
    /// File name of the track's audio file (`{slug}.mp3`)
    pub fn audio_file(&self) -> String {
        format!("{}.{}", self.slug, AUDIO_EXTENSION)
    }

    /// File name of the track's emoji image (`{slug}.png`)
    pub fn emoji_file(&self) -> String {
        format!("{}.{}", self.slug, EMOJI_EXTENSION)
    }
}

/// A song record as stored in the `musicas` array
///
/// Field order matches the order the game expects to see in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseEntry {
    #[serde(rename = "musica")]
    pub name: String,
    #[serde(rename = "autor")]
    pub author: String,
    #[serde(rename = "letra")]
    pub lyrics: String,
    #[serde(rename = "arquivoImagemEmoji")]
    pub emoji_file: String,
    #[serde(rename = "arquivoMusica")]
    pub audio_file: String,
}

impl DatabaseEntry {
    /// Builds the database record for a newly discovered song
    pub fn for_song(song: &SongRow) -> Self {
        Self {
            name: song.name.clone(),
            author: song.author.clone(),
            lyrics: song.lyrics.clone(),
            emoji_file: format!("{}/{}", EMOJI_PREFIX, song.emoji_file()),
            audio_file: song.audio_file(),
        }
    }
}

/// Counters produced by a sync run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    /// New entries appended to the database
    pub added: usize,
    /// Sample MP3 copies made
    pub mp3_copied: usize,
    /// Sample PNG copies made
    pub png_copied: usize,
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "New tracks added: {}", self.added)?;
        writeln!(f, "MP3 files copied: {}", self.mp3_copied)?;
        write!(f, "PNG files copied: {}", self.png_copied)
    }
}
