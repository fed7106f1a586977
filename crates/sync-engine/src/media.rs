// crates/sync-engine/src/media.rs
//! Placeholder media staging

use crate::error::{SyncError, SyncResult};
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Copies `sample` to `dest` unless `dest` already exists
///
/// The parent directory of `dest` is created first. Returns `Ok(true)` if a
/// copy was made and `Ok(false)` if an existing file was left alone.
pub fn stage_media(sample: &Path, dest: &Path) -> SyncResult<bool> {
    if let Some(parent) = dest.parent() {
        ensure_directory_exists(parent)?;
    }

    if dest.exists() {
        log::debug!("Media already present: {}", dest.display());
        return Ok(false);
    }

    if !sample.is_file() {
        return Err(SyncError::MediaSourceMissing {
            path: sample.to_path_buf(),
        });
    }

    copy_contents(sample, dest).map_err(|e| SyncError::CopyFailure {
        sample: sample.to_path_buf(),
        dest: dest.to_path_buf(),
        source: e,
    })?;

    log::debug!("Staged {} -> {}", sample.display(), dest.display());
    Ok(true)
}

/// Copies bytes only; the new file gets default permissions, not the sample's
fn copy_contents(sample: &Path, dest: &Path) -> io::Result<u64> {
    let mut reader = File::open(sample)?;
    let mut writer = File::create(dest)?;
    io::copy(&mut reader, &mut writer)
}

fn ensure_directory_exists(path: &Path) -> SyncResult<()> {
    if path.as_os_str().is_empty() || path.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(path).map_err(|e| SyncError::Filesystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("Created media directory: {}", path.display());
    Ok(())
}
