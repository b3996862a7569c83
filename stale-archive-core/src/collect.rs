//! Stale-set collection: which files under a root should be archived.
//!
//! Selection happens once, at the level of the root's immediate children. A stale child
//! file is taken as is; a stale child directory is taken whole, every file beneath it,
//! without looking at the individual files again.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::staleness::{all_files_in_dir, days_stale, ScanError};

/// Collect the files to archive under `root`.
///
/// A child is stale when its staleness is at least `days_threshold` (inclusive). The
/// result keeps child listing order, then walk order inside expanded directories.
pub fn collect_stale(root: &Path, days_threshold: u64) -> Result<Vec<PathBuf>, ScanError> {
    info!(root = %root.display(), days_threshold, "[SCAN] Collecting stale files");

    let mut stale_sub_paths = Vec::new();
    for entry in fs::read_dir(root).map_err(|e| ScanError::io(root, e))? {
        let entry = entry.map_err(|e| ScanError::io(root, e))?;
        let path = entry.path();
        let days = days_stale(&path)?;
        if days >= days_threshold {
            debug!(path = %path.display(), days, "[SCAN] Stale entry");
            stale_sub_paths.push(path);
        }
    }

    let mut stale_files = Vec::new();
    for sub_path in stale_sub_paths {
        if sub_path.is_file() {
            stale_files.push(sub_path);
        } else {
            stale_files.extend(all_files_in_dir(&sub_path)?);
        }
    }

    info!(count = stale_files.len(), "[SCAN] Stale files collected");
    Ok(stale_files)
}
