//! TestRepo builder for temporary workspaces
//!
//! Documents are written into a fresh temp directory; commands run either
//! through the library (with a scripted prompter) or through the built CLI.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Builder for creating throwaway workspaces
pub struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create a new empty workspace
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the path to the workspace root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path of a file in the workspace
    pub fn file(&self, relative_path: &str) -> PathBuf {
        self.dir.path().join(relative_path)
    }

    /// Add a file with the given content
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Add a file of `size` bytes
    pub fn add_sized_file(&self, relative_path: &str, size: usize) -> &Self {
        self.add_file(relative_path, &"x".repeat(size))
    }

    /// Read a workspace file back
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.file(relative_path)).expect("Failed to read file")
    }

    pub fn exists(&self, relative_path: &str) -> bool {
        self.file(relative_path).exists()
    }

    /// Write a config file and return its path
    pub fn add_config(&self, content: &str) -> PathBuf {
        self.add_file("config.toml", content);
        self.file("config.toml")
    }

    /// Run the refactor-extras CLI in the workspace
    ///
    /// The config location is pinned to a missing file so the developer's
    /// own config never leaks in.
    pub fn run_cli(&self, args: &[&str]) -> std::io::Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_refactor-extras"))
            .current_dir(self.path())
            .env("REFACTOR_EXTRAS_CONFIG", self.file("no-config.toml"))
            .env_remove("RUST_LOG")
            .args(args)
            .output()
    }

    /// Run CLI and expect success, return stdout
    pub fn run_cli_success(&self, args: &[&str]) -> String {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert!(
            output.status.success(),
            "CLI command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Run CLI and expect the given exit code, return (stdout, stderr)
    pub fn run_cli_exit(&self, args: &[&str], code: i32) -> (String, String) {
        let output = self.run_cli(args).expect("Failed to run CLI");
        assert_eq!(
            output.status.code(),
            Some(code),
            "CLI command {:?} exited unexpectedly: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        (
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }
}
