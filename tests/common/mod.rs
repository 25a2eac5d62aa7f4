//! Common test utilities

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory with a vuln_db.yml file
#[allow(dead_code)]
pub fn create_test_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("vuln_db.yml");
    fs::write(&config_path, content).unwrap();
    (temp_dir, config_path)
}

/// Create a test config with an empty subdirectory to run from
#[allow(dead_code)]
pub fn create_test_config_in_subdir(content: &str) -> (TempDir, PathBuf, PathBuf) {
    let (temp_dir, config_path) = create_test_config(content);
    let sub_dir = temp_dir.path().join("subdir");
    fs::create_dir(&sub_dir).unwrap();
    (temp_dir, config_path, sub_dir)
}

/// The vuln_db binary, run from an empty directory so no config is discovered
#[allow(dead_code)]
pub fn vuln_db() -> (TempDir, Command) {
    let temp_dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("vuln_db").unwrap();
    cmd.current_dir(temp_dir.path());
    (temp_dir, cmd)
}
