//! Directory store port.
//!
//! Owns the I/O behavior of ensuring directories exist under the project base
//! directory. Which directories to create is decided by the caller.

use std::path::Path;

use crate::domain::{AppError, TargetPath};

/// Port for creating directories under a fixed base directory.
pub trait DirectoryStore {
    /// Base directory every target is resolved against.
    fn base_dir(&self) -> &Path;

    /// Whether the target already exists as a directory.
    fn is_dir(&self, target: &TargetPath) -> bool;

    /// Create the target and any missing ancestors.
    ///
    /// Succeeds without change when the target already exists as a directory.
    fn ensure_dir(&self, target: &TargetPath) -> Result<(), AppError>;
}
