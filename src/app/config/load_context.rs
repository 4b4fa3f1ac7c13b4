//! Context value loading from files and `key=value` assignments.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::domain::{AppError, ContextValues};

/// Collect context values: file values first, then assignments override.
pub fn load_context(
    file: Option<&Path>,
    assignments: &[String],
    namespace: &str,
) -> Result<ContextValues, AppError> {
    let mut values = match file {
        Some(path) => read_context_file(path, namespace)?,
        None => ContextValues::new(),
    };

    let mut overrides = ContextValues::new();
    for assignment in assignments {
        let (key, value) = ContextValues::parse_assignment(assignment)?;
        overrides.insert(key, value);
    }
    values.merge(overrides);

    Ok(values)
}

fn read_context_file(path: &Path, namespace: &str) -> Result<ContextValues, AppError> {
    let context_error =
        |details: String| AppError::ContextFile { path: path.to_path_buf(), details };

    let content = fs::read_to_string(path).map_err(|err| context_error(err.to_string()))?;

    let is_yaml = matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml")
    );
    let document: Value = if is_yaml {
        serde_yaml::from_str(&content).map_err(|err| context_error(err.to_string()))?
    } else {
        serde_json::from_str(&content).map_err(|err| context_error(err.to_string()))?
    };

    ContextValues::from_document(document, namespace).map_err(context_error)
}
