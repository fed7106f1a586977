//! EmojiHits sync configuration
//!
//! Resolves the paths a sync run works on. Values come from an override chain:
//!
//! - **Defaults**: the game project's conventional layout under a project root
//! - **Config file**: optional `emojihits-sync.toml` (TOML) with a `[paths]` table
//! - **Command line**: explicit path flags win over everything else
//!
//! # Example
//!
//! ```rust,no_run
//! use emojihits_config::{ConfigManager, PathOverrides};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = ConfigManager::discover(root).load().expect("Failed to load config");
//! let paths = config.resolve_paths(root, &PathOverrides::default());
//! println!("Song list: {}", paths.csv.display());
//! ```

mod error;
mod log_level;
mod manager;
mod paths;
mod persistence;
mod validation;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use log_level::LogLevel;
pub use manager::{ConfigManager, CONFIG_FILE_NAME};
pub use paths::{PathOverrides, SyncPaths, FILES_DIR, STREAMING_ASSETS_DIR};
pub use persistence::ConfigPersistence;
pub use validation::{ConfigSection, Validator};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: LogLevel,

    /// Path overrides
    pub paths: PathOverrides,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        self.paths.validate()
    }

    /// Resolves the final sync paths for a project
    ///
    /// Conventional defaults under `project_root`, then this config's
    /// `[paths]` (relative entries resolve against `project_root`), then
    /// `cli` overrides taken as given.
    pub fn resolve_paths(&self, project_root: &Path, cli: &PathOverrides) -> SyncPaths {
        let mut paths = SyncPaths::conventional(project_root);
        paths.apply(&self.paths, Some(project_root));
        paths.apply(cli, None);
        paths
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            log_level: LogLevel::default(),
            paths: PathOverrides::default(),
        }
    }
}
