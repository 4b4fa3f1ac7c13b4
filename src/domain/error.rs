use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for scaffold-hook operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Directory creation failed (full or read-only filesystem, other OS errors).
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A non-directory entry occupies a segment of a required directory path.
    #[error("Cannot create directory: '{}' exists and is not a directory", .path.display())]
    PathCollision { path: PathBuf },

    /// Insufficient rights to create a directory.
    #[error("Permission denied creating directory '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    /// Path template failed to render.
    #[error("Failed to render path template '{template}': {details}")]
    Template { template: String, details: String },

    /// Rendered path cannot be rooted under the base directory.
    #[error("Invalid target path '{path}': {reason}")]
    InvalidTargetPath { path: String, reason: String },

    /// Malformed `key=value` context assignment.
    #[error("Invalid context assignment '{0}': expected KEY=VALUE")]
    InvalidContextAssignment(String),

    /// Context file could not be read or parsed.
    #[error("Failed to load context file '{}': {details}", .path.display())]
    ContextFile { path: PathBuf, details: String },

    /// Layout file passed explicitly but missing.
    #[error("Layout file not found: {}", .0.display())]
    LayoutNotFound(PathBuf),

    /// Layout TOML parse error.
    #[error("Layout parse error: {0}")]
    Layout(#[from] toml::de::Error),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers that classify failures.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::CreateDirectory { source, .. } => source.kind(),
            AppError::PathCollision { .. } => io::ErrorKind::AlreadyExists,
            AppError::PermissionDenied { .. } => io::ErrorKind::PermissionDenied,
            AppError::LayoutNotFound(_) => io::ErrorKind::NotFound,
            AppError::Template { .. }
            | AppError::InvalidTargetPath { .. }
            | AppError::InvalidContextAssignment(_)
            | AppError::ContextFile { .. }
            | AppError::Layout(_) => io::ErrorKind::InvalidInput,
        }
    }
}
