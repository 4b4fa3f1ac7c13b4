use minijinja::{Environment, UndefinedBehavior};
use serde_json::Value;
use std::sync::OnceLock;

use crate::domain::{AppError, PathTemplate};
use crate::ports::PathRenderer;

/// Path template renderer using Minijinja.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinijinjaPathRenderer;

impl MinijinjaPathRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl PathRenderer for MinijinjaPathRenderer {
    fn render(&self, template: &PathTemplate, context: &Value) -> Result<String, AppError> {
        if let Some(token) = disallowed_template_token(template.as_str()) {
            return Err(template_render_error(
                template,
                format!("only '{{{{ ... }}}}' expressions are allowed in paths, found '{}'", token),
            ));
        }

        let env = ENV.get_or_init(|| {
            let mut env = Environment::new();
            env.set_undefined_behavior(UndefinedBehavior::Strict);
            env
        });

        env.render_str(template.as_str(), context)
            .map_err(|err| template_render_error(template, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn disallowed_template_token(template: &str) -> Option<&'static str> {
    if template.contains("{%") {
        return Some("{%");
    }
    if template.contains("{#") {
        return Some("{#");
    }
    None
}

fn template_render_error(template: &PathTemplate, err: impl std::fmt::Display) -> AppError {
    AppError::Template { template: template.to_string(), details: err.to_string() }
}
