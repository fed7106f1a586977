//! Configuration manager - main API for config operations

use crate::persistence::ConfigPersistence;
use crate::{Config, ConfigResult};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// File name looked up in the project root and the user config directory
pub const CONFIG_FILE_NAME: &str = "emojihits-sync.toml";

/// Main configuration manager
///
/// Decides which config file applies and loads it.
pub struct ConfigManager {
    persistence: ConfigPersistence,
}

impl ConfigManager {
    /// Creates a config manager for an explicit config file
    pub fn with_file(config_path: PathBuf) -> Self {
        Self {
            persistence: ConfigPersistence::new(config_path),
        }
    }

    /// Finds the config file for a project
    ///
    /// Lookup order:
    /// 1. `<project_root>/emojihits-sync.toml`
    /// 2. the user config directory, e.g. `~/.config/emojihits/emojihits-sync.toml`
    ///
    /// If neither exists the project file path is used, which loads as defaults.
    pub fn discover(project_root: &Path) -> Self {
        let project_file = project_root.join(CONFIG_FILE_NAME);
        if project_file.is_file() {
            return Self::with_file(project_file);
        }

        if let Some(user_file) = Self::user_config_path() {
            if user_file.is_file() {
                return Self::with_file(user_file);
            }
        }

        Self::with_file(project_file)
    }

    /// Returns the per-user config file path, if the platform has one
    ///
    /// - Linux: `~/.config/emojihits/`
    /// - macOS: `~/Library/Application Support/emojihits/`
    /// - Windows: `%APPDATA%\emojihits\`
    pub fn user_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "emojihits")
            .map(|proj_dirs| proj_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> &Path {
        self.persistence.path()
    }

    /// Loads the configuration from file
    ///
    /// If the file doesn't exist, returns default configuration.
    /// If the file is corrupted, returns an error.
    pub fn load(&self) -> ConfigResult<Config> {
        self.persistence.load()
    }
}
