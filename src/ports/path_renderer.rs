use serde_json::Value;

use crate::domain::{AppError, PathTemplate};

/// Port for substituting context values into a path template.
///
/// Keeps the template engine out of the domain layer.
pub trait PathRenderer {
    /// Render `template` against `context` (values already nested under their namespace).
    fn render(&self, template: &PathTemplate, context: &Value) -> Result<String, AppError>;
}
