use serde::Deserialize;

use super::{AppError, PathTemplate};

/// Namespace under which context values are exposed to path templates.
pub const DEFAULT_NAMESPACE: &str = "cookiecutter";

/// Directories created for a new bounded context when no layout file is given.
pub const DEFAULT_DIRECTORIES: [&str; 2] = [
    "src/contexts/{{cookiecutter.context_name}}/domain/entities",
    "src/contexts/{{cookiecutter.context_name}}/application/usecases",
];

/// Ordered set of directory templates the hook ensures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookLayout {
    pub namespace: String,
    pub directories: Vec<PathTemplate>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LayoutFile {
    namespace: Option<String>,
    directories: Vec<String>,
}

impl HookLayout {
    /// Parse a TOML layout document.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let file: LayoutFile = toml::from_str(content)?;
        Ok(Self {
            namespace: file.namespace.unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()),
            directories: file.directories.into_iter().map(PathTemplate::new).collect(),
        })
    }
}

impl Default for HookLayout {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
            directories: DEFAULT_DIRECTORIES.iter().copied().map(PathTemplate::from).collect(),
        }
    }
}
