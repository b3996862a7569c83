//! This module implements the CLI interface for stale-archive: argument parsing, the
//! async entrypoint, and user-visible output.
//!
//! All scanning and archiving logic lives in the [`stale-archive-core`] crate; this
//! module only wires it to the S3 store and decides how failures surface.
//!
//! ## Behaviour
//! - No options: the run always scans the current directory with a 30-day threshold.
//! - A failure while scanning ends the run with an error (non-zero exit).
//! - A failure while creating the bucket or uploading is printed to stdout and the run
//!   still completes successfully. Already uploaded objects stay in the bucket.
//!
//! [`stale-archive-core`]: ../../stale-archive-core/

use crate::upload::S3Store;
use anyhow::{Context, Result};
use clap::Parser;
use stale_archive_core::archive::archive;
use stale_archive_core::collect::collect_stale;
use stale_archive_core::config::ArchiveConfig;
use stale_archive_core::contract::ObjectStore;

/// CLI for stale-archive: move long-unused files into a fresh S3 bucket.
#[derive(Parser, Debug)]
#[clap(
    name = "stale-archive",
    version,
    about = "Upload files not accessed for 30 days or more to a newly created S3 bucket"
)]
pub struct Cli {}

/// Async CLI entrypoint for integration tests and main()
pub async fn run(_cli: Cli) -> Result<()> {
    let config = ArchiveConfig::default();
    let store = S3Store::from_env().await;
    run_with_store(&config, &store).await
}

/// Collect stale files under `config.root` and archive them into `store`.
pub async fn run_with_store<S>(config: &ArchiveConfig, store: &S) -> Result<()>
where
    S: ObjectStore + ?Sized,
{
    config.trace_loaded();

    let stale_files = collect_stale(&config.root, config.days_threshold).with_context(|| {
        format!(
            "failed to collect stale files under {}",
            config.root.display()
        )
    })?;
    tracing::info!(
        command = "archive",
        files = stale_files.len(),
        "Starting archive of stale files"
    );

    match archive(&stale_files, store).await {
        Ok(report) => {
            tracing::info!(command = "archive", ?report, "Archive complete");
        }
        Err(e) => {
            println!("ERROR: Failed uploading to S3: {e}");
            tracing::error!(command = "archive", error = %e, "Archive incomplete");
        }
    }

    Ok(())
}
