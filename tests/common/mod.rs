//! Shared testing utilities for scaffold-hook CLI tests.

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use std::path::Path;

/// Testing harness providing an isolated generated-project root for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    project: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated, empty project root.
    pub fn new() -> Self {
        let project = TempDir::new().expect("Failed to create temp directory for tests");
        Self { project }
    }

    /// Path to the generated project root.
    pub fn project_dir(&self) -> &Path {
        self.project.path()
    }

    /// Fixture handle for a path under the project root.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.project.child(path)
    }

    /// Build a command for invoking the compiled binary from the project root,
    /// the way the templating tool runs post-generation hooks.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("scaffold-hook").expect("Failed to locate binary");
        cmd.current_dir(self.project_dir()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a plain file under the project root, creating its parent directories.
    pub fn write_file(&self, path: &str, content: &str) {
        self.child(path).write_str(content).expect("Failed to write fixture file");
    }

    /// Create a directory under the project root.
    pub fn create_dir(&self, path: &str) {
        self.child(path).create_dir_all().expect("Failed to create fixture directory");
    }

    /// Assert that a directory exists under the project root.
    pub fn assert_dir(&self, path: &str) {
        let full = self.project_dir().join(path);
        assert!(full.is_dir(), "{} should be a directory", full.display());
    }

    /// Assert that nothing exists at `path` under the project root.
    pub fn assert_missing(&self, path: &str) {
        let full = self.project_dir().join(path);
        assert!(!full.exists(), "{} should not exist", full.display());
    }

    /// Sorted relative paths of every entry under the project root.
    pub fn snapshot(&self) -> Vec<String> {
        let mut entries = Vec::new();
        collect_entries(self.project_dir(), self.project_dir(), &mut entries);
        entries.sort();
        entries
    }
}

fn collect_entries(root: &Path, dir: &Path, entries: &mut Vec<String>) {
    for entry in std::fs::read_dir(dir).expect("Failed to read fixture directory") {
        let path = entry.expect("Failed to read fixture entry").path();
        let relative = path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/");
        entries.push(relative);
        if path.is_dir() {
            collect_entries(root, &path, entries);
        }
    }
}
