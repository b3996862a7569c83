//! Archival: create one fresh bucket and upload a list of files into it.
//!
//! # Behaviour
//! - Every call generates a new bucket name (`archive.<YYYY-MM-DD>.<12 hex>`), so two
//!   calls with the same input produce two buckets and upload everything twice.
//! - Files are uploaded one after another in input order, keyed by their path string.
//! - The first store error stops the run. Nothing is retried and a partially filled
//!   bucket is left in place; the error says how far the run got.
//!
//! # Navigation
//! - Main entrypoint: [`archive`]
//! - Naming: [`generate_bucket_name`], [`bucket_name_for`]

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::contract::{ObjectStore, StoreError};

pub const BUCKET_PREFIX: &str = "archive";

/// Hex characters of the random suffix in a bucket name.
pub const BUCKET_SUFFIX_LEN: usize = 12;

/// Outcome of a completed archive run.
#[derive(Debug, Clone, Serialize)]
pub struct ArchiveReport {
    pub bucket: String,
    /// Object keys in upload order.
    pub uploaded: Vec<String>,
}

#[derive(Debug)]
pub enum ArchiveError {
    CreateBucket {
        bucket: String,
        source: StoreError,
    },
    Upload {
        bucket: String,
        path: PathBuf,
        /// Files uploaded successfully before this one failed.
        uploaded: usize,
        source: StoreError,
    },
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::CreateBucket { bucket, source } => {
                write!(f, "could not create bucket {bucket}: {source}")
            }
            ArchiveError::Upload {
                bucket,
                path,
                uploaded,
                source,
            } => write!(
                f,
                "could not upload {} to bucket {bucket} after {uploaded} successful uploads: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ArchiveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArchiveError::CreateBucket { source, .. } | ArchiveError::Upload { source, .. } => {
                Some(source.as_ref())
            }
        }
    }
}

/// Bucket name for today's local date with a fresh random suffix.
pub fn generate_bucket_name() -> String {
    bucket_name_for(Local::now().date_naive(), Uuid::new_v4())
}

/// `archive.<date>.<first 12 hex digits of uid>`
pub fn bucket_name_for(date: NaiveDate, uid: Uuid) -> String {
    let hex = uid.simple().to_string();
    format!(
        "{BUCKET_PREFIX}.{}.{}",
        date.format("%Y-%m-%d"),
        &hex[..BUCKET_SUFFIX_LEN]
    )
}

/// Object key for a local file: the path string exactly as collected.
pub fn object_key(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Create a new bucket on `store` and upload every file in `file_paths` into it.
pub async fn archive<S>(file_paths: &[PathBuf], store: &S) -> Result<ArchiveReport, ArchiveError>
where
    S: ObjectStore + ?Sized,
{
    let bucket = generate_bucket_name();
    info!(bucket = %bucket, "Creating bucket: {}", bucket);
    if let Err(e) = store.create_bucket(&bucket).await {
        error!(bucket = %bucket, error = %e, "[ARCHIVE][ERROR] create_bucket failed");
        return Err(ArchiveError::CreateBucket { bucket, source: e });
    }

    let total = file_paths.len();
    let mut uploaded = Vec::with_capacity(total);
    for (i, file_path) in file_paths.iter().enumerate() {
        let key = object_key(file_path);
        info!(bucket = %bucket, "Uploading ({}/{}): {}", i + 1, total, key);
        if let Err(e) = store.upload_file(file_path, &bucket, &key).await {
            error!(bucket = %bucket, file = %key, error = %e, "[ARCHIVE][ERROR] upload_file failed");
            return Err(ArchiveError::Upload {
                bucket,
                path: file_path.clone(),
                uploaded: uploaded.len(),
                source: e,
            });
        }
        uploaded.push(key);
    }

    let report = ArchiveReport { bucket, uploaded };
    info!(bucket = %report.bucket, files = report.uploaded.len(), "[ARCHIVE] Archive complete");
    Ok(report)
}
