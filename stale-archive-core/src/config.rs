use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Directory scanned when no other root is given: the current working directory.
pub const DEFAULT_ROOT: &str = ".";

/// Files and directories at or above this many days since last access are archived.
pub const DEFAULT_DAYS_THRESHOLD: u64 = 30;

/// Parameters of a single archive run.
///
/// The CLI always runs with [`ArchiveConfig::default`]; the struct exists so tests and
/// embedders can point the same pipeline at another root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveConfig {
    pub root: PathBuf,
    pub days_threshold: u64,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            days_threshold: DEFAULT_DAYS_THRESHOLD,
        }
    }
}

impl ArchiveConfig {
    pub fn trace_loaded(&self) {
        info!(
            root = %self.root.display(),
            days_threshold = self.days_threshold,
            "Loaded ArchiveConfig"
        );
        debug!(?self, "ArchiveConfig loaded (full debug)");
    }
}
