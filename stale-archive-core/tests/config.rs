use std::path::PathBuf;

use stale_archive_core::config::{ArchiveConfig, DEFAULT_DAYS_THRESHOLD};

#[test]
fn test_default_config_scans_current_directory_with_thirty_days() {
    let config = ArchiveConfig::default();

    assert_eq!(config.root, PathBuf::from("."));
    assert_eq!(config.days_threshold, 30);
    assert_eq!(config.days_threshold, DEFAULT_DAYS_THRESHOLD);
}

#[test]
fn test_config_serializes_for_logging() {
    let json = serde_json::to_value(ArchiveConfig::default()).unwrap();

    assert_eq!(json, serde_json::json!({ "root": ".", "days_threshold": 30 }));
}
