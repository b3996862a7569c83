#![allow(dead_code)]
//! Fixture helpers: files with a chosen access time.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use filetime::FileTime;
use stale_archive_core::staleness::SECONDS_PER_DAY;

/// Set the access time of `path` to `days_old` days before now.
pub fn set_days_old(path: &Path, days_old: u64) {
    let accessed = SystemTime::now() - Duration::from_secs(days_old * SECONDS_PER_DAY);
    filetime::set_file_atime(path, FileTime::from_system_time(accessed))
        .expect("setting atime failed");
}

pub fn generate_directory(parent: &Path, name: &str) -> PathBuf {
    let dir = parent.join(name);
    fs::create_dir_all(&dir).expect("creating fixture directory failed");
    dir
}

pub fn generate_test_file(dir: &Path, name: &str, days_old: u64) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("{name}: last read {days_old} days ago\n"))
        .expect("writing fixture file failed");
    set_days_old(&path, days_old);
    path
}

/// Tree with exactly 7 files that a 30-day scan must pick up.
///
/// ```text
/// root/
///   fresh.txt              0   -
///   old.txt               45   stale
///   boundary.txt          30   stale (inclusive)
///   almost.txt            29   -
///   stale_dir/                 stale (freshest file 40)
///     a.txt               40
///     b.txt              100
///     nested/c.txt       365
///   mixed_dir/                 fresh (freshest file 0)
///     new.txt              0
///     old.txt             90
///   old_tree/                  stale (freshest file 31)
///     deep/x.txt          60
///     deep/deeper/y.txt   31
///   empty_dir/                 fresh (no files)
/// ```
///
/// Returns the stale files.
pub fn generate_test_set(root: &Path) -> Vec<PathBuf> {
    generate_test_file(root, "fresh.txt", 0);
    let old = generate_test_file(root, "old.txt", 45);
    let boundary = generate_test_file(root, "boundary.txt", 30);
    generate_test_file(root, "almost.txt", 29);

    let stale_dir = generate_directory(root, "stale_dir");
    let a = generate_test_file(&stale_dir, "a.txt", 40);
    let b = generate_test_file(&stale_dir, "b.txt", 100);
    let nested = generate_directory(&stale_dir, "nested");
    let c = generate_test_file(&nested, "c.txt", 365);

    let mixed_dir = generate_directory(root, "mixed_dir");
    generate_test_file(&mixed_dir, "new.txt", 0);
    generate_test_file(&mixed_dir, "old.txt", 90);

    let old_tree = generate_directory(root, "old_tree");
    let deep = generate_directory(&old_tree, "deep");
    let x = generate_test_file(&deep, "x.txt", 60);
    let deeper = generate_directory(&deep, "deeper");
    let y = generate_test_file(&deeper, "y.txt", 31);

    generate_directory(root, "empty_dir");

    vec![old, boundary, a, b, c, x, y]
}

pub fn sorted(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort();
    paths
}
