//! Directory plumbing for the batch pipeline.
//!
//! Covers the four filesystem chores around a run: scanning the input
//! directory, creating missing directories, flushing stale outputs, and
//! moving rejected files into quarantine.

use crate::{IoResult, format};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Scans a directory for candidate input files.
///
/// Matches every direct child of `dir`, keeps regular files, skips
/// `.gitkeep` placeholders and returns the list sorted by path so runs
/// are deterministic. Classification happens later, at admission time;
/// unsupported files are still listed here so they can be quarantined.
pub fn scan_input(dir: &Path) -> IoResult<Vec<PathBuf>> {
    let pattern = dir.join("*");
    let pattern = pattern.to_string_lossy();

    let mut paths = Vec::new();
    for entry in glob::glob(&pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                warn!("skipping unreadable entry: {err}");
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        if path.file_name().is_some_and(|name| name == ".gitkeep") {
            continue;
        }
        paths.push(path);
    }

    paths.sort();
    debug!("scanned {}: {} candidate file(s)", dir.display(), paths.len());
    Ok(paths)
}

/// Creates a directory if it does not exist yet.
///
/// Returns `true` if the directory already existed.
pub fn ensure_dir(path: &Path) -> IoResult<bool> {
    if path.is_dir() {
        return Ok(true);
    }
    fs::create_dir_all(path)?;
    debug!("created directory {}", path.display());
    Ok(false)
}

/// Deletes previously generated images from the output directory.
///
/// Only files with admitted image extensions are removed; anything else
/// in the directory is left alone. Returns the number of deleted files.
pub fn flush_output(dir: &Path) -> IoResult<usize> {
    let mut deleted = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && format::is_supported(&path) {
            fs::remove_file(&path)?;
            deleted += 1;
        }
    }
    debug!("flushed {deleted} file(s) from {}", dir.display());
    Ok(deleted)
}

/// Moves a rejected file into the quarantine directory.
///
/// Uses `rename` when source and destination share a filesystem and
/// falls back to copy-then-remove across mount points. Returns the
/// file's new location.
pub fn quarantine(path: &Path, invalid_dir: &Path) -> IoResult<PathBuf> {
    let file_name = path.file_name().unwrap_or(path.as_os_str());
    let dest = invalid_dir.join(file_name);

    if fs::rename(path, &dest).is_err() {
        fs::copy(path, &dest)?;
        fs::remove_file(path)?;
    }

    warn!("quarantined {} -> {}", path.display(), dest.display());
    Ok(dest)
}
