//! Staleness evaluation: how many whole days ago was a path last accessed.
//!
//! A file's staleness comes straight from its access time. A directory is as fresh as
//! its freshest file at any depth; a directory without files counts as fresh (0 days).
//!
//! Every evaluation is relative to a reference instant. [`days_stale`] uses the current
//! wall-clock time, [`days_stale_at`] takes the instant explicitly.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::{debug, trace};
use walkdir::WalkDir;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Failure while listing or stat-ing the tree being scanned.
#[derive(Debug)]
pub enum ScanError {
    Io { path: PathBuf, source: io::Error },
    Walk(walkdir::Error),
}

impl ScanError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        ScanError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            ScanError::Walk(e) => write!(f, "directory walk failed: {e}"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScanError::Io { source, .. } => Some(source),
            ScanError::Walk(e) => Some(e),
        }
    }
}

impl From<walkdir::Error> for ScanError {
    fn from(e: walkdir::Error) -> Self {
        ScanError::Walk(e)
    }
}

/// Days since `path` was last accessed, measured against the current time.
pub fn days_stale(path: &Path) -> Result<u64, ScanError> {
    days_stale_at(path, SystemTime::now())
}

/// Days since `path` was last accessed, measured against `now`.
///
/// Anything that is not a regular file (after following symlinks) is evaluated as a
/// directory.
pub fn days_stale_at(path: &Path, now: SystemTime) -> Result<u64, ScanError> {
    let days = if path.is_file() {
        days_stale_of_file(path, now)?
    } else {
        days_stale_of_folder(path, now)?
    };
    debug!(path = %path.display(), days, "Evaluated staleness");
    Ok(days)
}

fn days_stale_of_file(file_path: &Path, now: SystemTime) -> Result<u64, ScanError> {
    let metadata = fs::metadata(file_path).map_err(|e| ScanError::io(file_path, e))?;
    let accessed = metadata
        .accessed()
        .map_err(|e| ScanError::io(file_path, e))?;
    let days = whole_days_between(accessed, now);
    trace!(path = %file_path.display(), days, "File staleness");
    Ok(days)
}

fn days_stale_of_folder(folder_path: &Path, now: SystemTime) -> Result<u64, ScanError> {
    let mut freshest: Option<u64> = None;
    for file in all_files_in_dir(folder_path)? {
        let days = days_stale_of_file(&file, now)?;
        freshest = Some(freshest.map_or(days, |current| current.min(days)));
    }
    Ok(freshest.unwrap_or(0))
}

/// Floor of the elapsed time in days. Access times in the future count as 0.
fn whole_days_between(accessed: SystemTime, now: SystemTime) -> u64 {
    now.duration_since(accessed)
        .map(|elapsed| elapsed.as_secs() / SECONDS_PER_DAY)
        .unwrap_or(0)
}

/// Recursively list every non-directory entry below `dir`, in walk order.
///
/// Symlinks are not followed into. A symlink whose target is a directory is skipped;
/// any other symlink is listed as a file, so a dangling one fails later when stat-ed.
/// A dangling symlink passed as `dir` itself has nothing below it.
pub fn all_files_in_dir(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    if is_dangling_symlink(dir) {
        debug!(path = %dir.display(), "Dangling symlink, no files below it");
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.path_is_symlink() && entry.path().is_dir() {
            continue;
        }
        files.push(entry.into_path());
    }
    Ok(files)
}

fn is_dangling_symlink(path: &Path) -> bool {
    let is_symlink = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    is_symlink && fs::metadata(path).is_err()
}
