//! Hook layout loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, HookLayout};

/// Load the hook layout from `path`, or the built-in layout when no path is given.
pub fn load_layout(path: Option<&Path>) -> Result<HookLayout, AppError> {
    let Some(path) = path else {
        return Ok(HookLayout::default());
    };

    if !path.is_file() {
        return Err(AppError::LayoutNotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    HookLayout::from_toml_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PathTemplate;
    use tempfile::TempDir;

    #[test]
    fn no_path_yields_default_layout() {
        assert_eq!(load_layout(None).unwrap(), HookLayout::default());
    }

    #[test]
    fn reads_layout_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("layout.toml");
        fs::write(&path, "directories = [\"docs/{{ cookiecutter.context_name }}\"]\n").unwrap();

        let layout = load_layout(Some(&path)).unwrap();

        assert_eq!(
            layout.directories,
            vec![PathTemplate::new("docs/{{ cookiecutter.context_name }}")]
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.toml");

        let err = load_layout(Some(&path)).unwrap_err();

        assert!(matches!(err, AppError::LayoutNotFound(p) if p == path));
    }
}
