//! Sync path configuration section
//!
//! Every path has a default derived from the game project's conventional
//! layout. The config file and the command line can override any of them.

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding the song list, relative to the project root
pub const STREAMING_ASSETS_DIR: &str = "Assets/StreamingAssets";

/// Directory holding the game's runtime files, relative to the project root
pub const FILES_DIR: &str = "Assets/StreamingAssets/Files";

/// Fully resolved paths for one sync run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
    pub mp3: PathBuf,
    pub png: PathBuf,
    pub audio_dir: PathBuf,
    pub emoji_dir: PathBuf,
}

impl SyncPaths {
    /// Default paths for a project rooted at `root`
    pub fn conventional(root: &Path) -> Self {
        let streaming_assets = root.join(STREAMING_ASSETS_DIR);
        let files = root.join(FILES_DIR);

        Self {
            csv: streaming_assets.join("musicas.csv"),
            json: files.join("Data").join("music_database.json"),
            mp3: files.join("sampleMP3ToDefault.mp3"),
            png: files.join("samplePNGToDefault.png"),
            audio_dir: files.join("Audio"),
            emoji_dir: files.join("Emojis"),
        }
    }

    /// Applies overrides on top of these paths
    ///
    /// Relative override paths are joined onto `base` when one is given.
    pub fn apply(&mut self, overrides: &PathOverrides, base: Option<&Path>) {
        let resolve = |path: &PathBuf| match base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.clone(),
        };

        if let Some(ref csv) = overrides.csv {
            self.csv = resolve(csv);
        }
        if let Some(ref json) = overrides.json {
            self.json = resolve(json);
        }
        if let Some(ref mp3) = overrides.mp3 {
            self.mp3 = resolve(mp3);
        }
        if let Some(ref png) = overrides.png {
            self.png = resolve(png);
        }
        if let Some(ref audio_dir) = overrides.audio_dir {
            self.audio_dir = resolve(audio_dir);
        }
        if let Some(ref emoji_dir) = overrides.emoji_dir {
            self.emoji_dir = resolve(emoji_dir);
        }
    }

    /// Checks that the inputs exist and the outputs are usable
    ///
    /// These are advisory: the sync itself reports the failures that matter.
    pub fn check(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::is_file(&self.csv, "paths.csv"),
            Validator::is_file(&self.mp3, "paths.mp3"),
            Validator::is_file(&self.png, "paths.png"),
            Validator::directory_or_absent(&self.audio_dir, "paths.audio_dir"),
            Validator::directory_or_absent(&self.emoji_dir, "paths.emoji_dir"),
        ])
    }
}

/// Optional path overrides, as read from the `[paths]` table or the command line
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PathOverrides {
    /// Song list CSV
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csv: Option<PathBuf>,

    /// JSON song database
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<PathBuf>,

    /// Sample MP3 to duplicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mp3: Option<PathBuf>,

    /// Sample PNG to duplicate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub png: Option<PathBuf>,

    /// Destination directory for MP3 files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_dir: Option<PathBuf>,

    /// Destination directory for emoji PNGs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji_dir: Option<PathBuf>,
}

impl PathOverrides {
    fn fields(&self) -> [(&'static str, &Option<PathBuf>); 6] {
        [
            ("paths.csv", &self.csv),
            ("paths.json", &self.json),
            ("paths.mp3", &self.mp3),
            ("paths.png", &self.png),
            ("paths.audio_dir", &self.audio_dir),
            ("paths.emoji_dir", &self.emoji_dir),
        ]
    }
}

impl ConfigSection for PathOverrides {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let results = self
            .fields()
            .into_iter()
            .filter_map(|(field, path)| path.as_deref().map(|p| Validator::not_empty_path(p, field)))
            .collect();

        Validator::collect_errors(results)
    }
}
