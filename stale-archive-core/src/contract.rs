//! # contract: the storage capability used by the archiver
//!
//! The archiver needs exactly two things from an object store: create a bucket, and put
//! a local file into it under a key. [`ObjectStore`] captures that and nothing more.
//!
//! ## Implementations
//! - The CLI crate implements it on top of the AWS S3 SDK.
//! - With the `test-export-mocks` feature (on by default) mockall generates
//!   `MockObjectStore`, so dependents can script store behaviour in their own tests.
//!
//! ## Errors
//! Implementations return a boxed error; the archiver does not distinguish transient
//! from permanent failures and never retries.

use async_trait::async_trait;
use std::path::Path;

#[allow(unused_imports)]
use mockall::automock;

/// Error returned by [`ObjectStore`] implementations.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Minimal object-storage capability: bucket creation and single-file upload.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Create a new, empty bucket named `name`.
    async fn create_bucket(&self, name: &str) -> Result<(), StoreError>;

    /// Upload the current contents of `local_path` into `bucket` under `key`.
    ///
    /// `key` is used verbatim, path separators included.
    async fn upload_file(&self, local_path: &Path, bucket: &str, key: &str)
        -> Result<(), StoreError>;
}
