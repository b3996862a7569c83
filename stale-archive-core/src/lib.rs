#![doc = "stale-archive-core: core logic library for stale-archive."]

//! This crate contains the scanning and archival logic for stale-archive.
//! Concrete storage backends (S3 and friends) live in the CLI crate; here they are
//! only seen through the [`contract::ObjectStore`] trait.
//!
//! # Pipeline
//! 1. [`staleness`] turns a path into "whole days since last access".
//! 2. [`collect`] picks the stale children of a root and flattens them into files.
//! 3. [`archive`] creates a fresh bucket and uploads every collected file.

pub mod archive;
pub mod collect;
pub mod config;
pub mod contract;
pub mod staleness;
