use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, TargetPath};
use crate::ports::DirectoryStore;

/// Filesystem-based directory store rooted at the generated project directory.
#[derive(Debug, Clone)]
pub struct FilesystemDirectoryStore {
    root: PathBuf,
}

impl FilesystemDirectoryStore {
    /// Create a directory store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a directory store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }
}

impl DirectoryStore for FilesystemDirectoryStore {
    fn base_dir(&self) -> &Path {
        &self.root
    }

    fn is_dir(&self, target: &TargetPath) -> bool {
        target.under(&self.root).is_dir()
    }

    fn ensure_dir(&self, target: &TargetPath) -> Result<(), AppError> {
        let path = target.under(&self.root);
        fs::create_dir_all(&path).map_err(|err| classify_create_error(&path, err))
    }
}

fn classify_create_error(path: &Path, err: io::Error) -> AppError {
    if let Some(blocking) = first_non_directory(path) {
        return AppError::PathCollision { path: blocking };
    }
    if err.kind() == io::ErrorKind::PermissionDenied {
        return AppError::PermissionDenied { path: path.to_path_buf() };
    }
    AppError::CreateDirectory { path: path.to_path_buf(), source: err }
}

/// Shallowest existing component of `path` that is not a directory.
fn first_non_directory(path: &Path) -> Option<PathBuf> {
    let mut ancestors: Vec<&Path> = path.ancestors().collect();
    ancestors.reverse();
    ancestors
        .into_iter()
        .find(|candidate| fs::metadata(candidate).map(|meta| !meta.is_dir()).unwrap_or(false))
        .map(Path::to_path_buf)
}
