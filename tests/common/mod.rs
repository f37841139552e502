//! Shared testing utilities for atelier CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write an `atelier.toml` into the work directory and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("atelier.toml");
        fs::write(&path, content).expect("Failed to write test config");
        path
    }

    /// Build a command for invoking the compiled `atelier` binary, scrubbed
    /// of ambient atelier environment variables.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("atelier").expect("Failed to locate atelier binary");
        cmd.current_dir(&self.work_dir)
            .env_remove("ATELIER_API_KEY")
            .env_remove("ATELIER_TRANSLATE_API_KEY")
            .env_remove("ATELIER_STORE_KEY")
            .env_remove("ATELIER_IDENTITY")
            .env_remove("ATELIER_CONFIG");
        cmd
    }
}
