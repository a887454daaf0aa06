//! Shared utilities for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write `contents` to `name` inside a fresh temporary directory.
///
/// The directory lives as long as the returned `TempDir`.
pub fn write_config(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// The example configuration shipped with the crate.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config/agent_conf.example.json");
