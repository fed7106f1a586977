// FILE: crates/cli/src/commands.rs

use anyhow::{bail, Context, Result};
use clap::ArgMatches;
use console::style;
use emojihits_config::{Config, ConfigManager, PathOverrides, SyncPaths};
use emojihits_sync_engine::{SyncConfig, SyncEngine, SyncReport};
use std::path::{Path, PathBuf};

/// Project root the default paths hang off
pub fn project_root(matches: &ArgMatches) -> PathBuf {
    matches
        .get_one::<PathBuf>("root")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Loads the explicit `--config` file, or discovers one for the project
pub fn load_config(matches: &ArgMatches, root: &Path) -> Result<Config> {
    let manager = match matches.get_one::<PathBuf>("config") {
        Some(path) => {
            if !path.is_file() {
                bail!("Config file not found: {}", path.display());
            }
            ConfigManager::with_file(path.clone())
        }
        None => ConfigManager::discover(root),
    };

    Ok(manager.load()?)
}

/// Collects the path flags given on the command line
pub fn cli_overrides(matches: &ArgMatches) -> PathOverrides {
    let path = |id: &str| matches.get_one::<PathBuf>(id).cloned();

    PathOverrides {
        csv: path("csv"),
        json: path("json"),
        mp3: path("mp3"),
        png: path("png"),
        audio_dir: path("audio_dir"),
        emoji_dir: path("emoji_dir"),
    }
}

/// Maps resolved paths onto the engine's configuration
pub fn sync_config(paths: SyncPaths) -> SyncConfig {
    SyncConfig {
        csv_path: paths.csv,
        database_path: paths.json,
        sample_mp3: paths.mp3,
        sample_png: paths.png,
        audio_dir: paths.audio_dir,
        emoji_dir: paths.emoji_dir,
    }
}

/// Resolves paths and runs one sync pass
pub fn sync(matches: &ArgMatches, root: &Path, config: &Config) -> Result<SyncReport> {
    let paths = config.resolve_paths(root, &cli_overrides(matches));

    if let Err(problems) = paths.check() {
        for problem in problems {
            log::warn!("{}", problem);
        }
    }

    log::info!("Syncing {} into {}", paths.csv.display(), paths.json.display());
    let engine = SyncEngine::new(sync_config(paths));
    engine
        .run()
        .with_context(|| format!("Failed to sync {}", engine.config().csv_path.display()))
}

/// Prints the run counters
pub fn print_report(report: &SyncReport) {
    println!("New tracks added: {}", style(report.added).bold().cyan());
    println!("MP3 files copied: {}", style(report.mp3_copied).bold());
    println!("PNG files copied: {}", style(report.png_copied).bold());
}

#[cfg(test)]
mod tests;
