use std::fmt;
use std::path::{Component, Path, PathBuf};

use super::AppError;

/// A directory path template, possibly containing `{{ namespace.key }}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate(String);

impl PathTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathTemplate {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A fully resolved directory path, relative to the project base directory.
///
/// Kept exactly as given. Guarantees:
/// - Not empty or whitespace-only
/// - Relative (no root or drive prefix)
/// - No `..` components
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TargetPath(PathBuf);

impl TargetPath {
    pub fn new(path: &str) -> Result<Self, AppError> {
        let invalid = |reason: &str| AppError::InvalidTargetPath {
            path: path.to_string(),
            reason: reason.to_string(),
        };

        if path.trim().is_empty() {
            return Err(invalid("path is empty"));
        }

        let candidate = PathBuf::from(path);
        for component in candidate.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => {
                    return Err(invalid("path must be relative to the project root"));
                }
                Component::ParentDir => {
                    return Err(invalid("path must not contain '..'"));
                }
                Component::CurDir | Component::Normal(_) => {}
            }
        }

        Ok(Self(candidate))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Absolute location of this target under `base`.
    pub fn under(&self, base: &Path) -> PathBuf {
        base.join(&self.0)
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}
