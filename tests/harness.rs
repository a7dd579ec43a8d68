//! Test harness for lse integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

/// Run the binary in `dir` with an isolated config path and no color.
///
/// `HOME` is pointed at the fixture so a developer's `~/.config/lse.json`
/// never leaks into the output.
pub fn run_lse(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_lse");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("FORCE_COLOR")
        .env_remove("LSE_LOG")
        .output()
        .expect("Failed to run lse");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// The name column of each non-empty output line (the last space-separated word).
pub fn listed_names(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .filter_map(|l| l.rsplit(' ').next())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let dir = TestDir::new();
        assert!(dir.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let dir = TestDir::new();
        let file_path = dir.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }

    #[test]
    fn test_listed_names() {
        let out = "-rw-r--r-- 0B 01 Jan 00:00 x a.txt \n\n-rw 1B y b\n";
        assert_eq!(listed_names(out), vec!["a.txt", "b"]);
    }
}
