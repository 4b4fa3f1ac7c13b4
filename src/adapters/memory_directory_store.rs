use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, TargetPath};
use crate::ports::DirectoryStore;

/// In-memory directory store for testing.
///
/// Tracks directories and plain files by their path relative to the base directory.
#[derive(Debug, Clone)]
pub struct MemoryDirectoryStore {
    base: PathBuf,
    // Shared so a clone handed to AppContext can still be inspected by the test.
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    directories: BTreeSet<PathBuf>,
    files: HashSet<PathBuf>,
    denied: HashSet<PathBuf>,
    created: Vec<PathBuf>,
}

impl MemoryDirectoryStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into(), state: Arc::new(Mutex::new(MemoryState::default())) }
    }

    /// Seed an existing directory (and its ancestors).
    pub fn with_directory(self, path: impl AsRef<Path>) -> Self {
        {
            let mut state = self.lock();
            for prefix in prefixes(path.as_ref()) {
                state.directories.insert(prefix);
            }
        }
        self
    }

    /// Seed a plain file occupying `path`.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.lock().files.insert(path.as_ref().to_path_buf());
        self
    }

    /// Refuse to create any directory at or below `path`.
    pub fn deny(self, path: impl AsRef<Path>) -> Self {
        self.lock().denied.insert(path.as_ref().to_path_buf());
        self
    }

    /// All directories currently present, sorted.
    pub fn directories(&self) -> Vec<PathBuf> {
        self.lock().directories.iter().cloned().collect()
    }

    /// Directories created through this store, in creation order.
    pub fn created(&self) -> Vec<PathBuf> {
        self.lock().created.clone()
    }

    pub fn contains_dir(&self, path: impl AsRef<Path>) -> bool {
        self.lock().directories.contains(path.as_ref())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DirectoryStore for MemoryDirectoryStore {
    fn base_dir(&self) -> &Path {
        &self.base
    }

    fn is_dir(&self, target: &TargetPath) -> bool {
        self.contains_dir(target.as_path())
    }

    fn ensure_dir(&self, target: &TargetPath) -> Result<(), AppError> {
        let mut state = self.lock();
        let prefixes = prefixes(target.as_path());

        for prefix in &prefixes {
            if state.files.contains(prefix) {
                return Err(AppError::PathCollision { path: self.base.join(prefix) });
            }
        }

        for prefix in prefixes {
            if state.directories.contains(&prefix) {
                continue;
            }
            if state.denied.iter().any(|denied| prefix.starts_with(denied)) {
                return Err(AppError::PermissionDenied { path: self.base.join(&prefix) });
            }
            state.directories.insert(prefix.clone());
            state.created.push(prefix);
        }
        Ok(())
    }
}

/// Cumulative prefixes of a relative path: `a/b/c` -> `a`, `a/b`, `a/b/c`.
fn prefixes(path: &Path) -> Vec<PathBuf> {
    let mut current = PathBuf::new();
    path.components()
        .map(|component| {
            current.push(component);
            current.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(path: &str) -> TargetPath {
        TargetPath::new(path).unwrap()
    }

    #[test]
    fn ensure_records_each_new_ancestor_once() {
        let store = MemoryDirectoryStore::new("/project");

        store.ensure_dir(&target("a/b/c")).unwrap();
        store.ensure_dir(&target("a/d/e")).unwrap();

        assert_eq!(
            store.created(),
            ["a", "a/b", "a/b/c", "a/d", "a/d/e"].iter().map(PathBuf::from).collect::<Vec<_>>()
        );
    }

    #[test]
    fn seeded_file_collides() {
        let store = MemoryDirectoryStore::new("/project").with_file("a");

        let err = store.ensure_dir(&target("a/b")).unwrap_err();

        assert!(matches!(err, AppError::PathCollision { path } if path == Path::new("/project/a")));
        assert!(store.directories().is_empty());
    }

    #[test]
    fn denied_location_fails_with_permission_error() {
        let store = MemoryDirectoryStore::new("/project").with_directory("ro").deny("ro");

        let err = store.ensure_dir(&target("ro/child")).unwrap_err();

        assert!(matches!(err, AppError::PermissionDenied { .. }));
    }
}
