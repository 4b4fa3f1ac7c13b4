//! Path resolution: substitute context values into the layout's path templates.
//!
//! Pure; performs no filesystem I/O.

use tracing::debug;

use crate::domain::{AppError, ContextValues, HookLayout, PathTemplate, TargetPath};
use crate::ports::PathRenderer;

/// Resolve every template in `layout`, preserving order.
pub fn execute<R: PathRenderer>(
    renderer: &R,
    layout: &HookLayout,
    context: &ContextValues,
) -> Result<Vec<TargetPath>, AppError> {
    let rendering_context = context.namespaced(&layout.namespace);

    layout
        .directories
        .iter()
        .map(|template| {
            let target = resolve_one(renderer, template, &rendering_context)?;
            debug!(template = %template, target = %target, "resolved target directory");
            Ok(target)
        })
        .collect()
}

fn resolve_one<R: PathRenderer>(
    renderer: &R,
    template: &PathTemplate,
    rendering_context: &serde_json::Value,
) -> Result<TargetPath, AppError> {
    let rendered = renderer.render(template, rendering_context)?;
    TargetPath::new(&rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MinijinjaPathRenderer;
    use std::path::Path;

    fn billing_context() -> ContextValues {
        let mut context = ContextValues::new();
        context.insert("context_name", "billing");
        context
    }

    #[test]
    fn default_layout_resolves_both_directories() {
        let targets =
            execute(&MinijinjaPathRenderer::new(), &HookLayout::default(), &billing_context())
                .unwrap();

        let paths: Vec<&Path> = targets.iter().map(TargetPath::as_path).collect();
        assert_eq!(
            paths,
            vec![
                Path::new("src/contexts/billing/domain/entities"),
                Path::new("src/contexts/billing/application/usecases"),
            ]
        );
    }

    #[test]
    fn custom_namespace_is_honored() {
        let layout = HookLayout {
            namespace: "ctx".to_string(),
            directories: vec![PathTemplate::new("modules/{{ ctx.context_name }}")],
        };

        let targets = execute(&MinijinjaPathRenderer::new(), &layout, &billing_context()).unwrap();

        assert_eq!(targets[0].as_path(), Path::new("modules/billing"));
    }

    #[test]
    fn missing_value_fails_resolution() {
        let renderer = MinijinjaPathRenderer::new();
        let err =
            execute(&renderer, &HookLayout::default(), &ContextValues::new()).unwrap_err();
        assert!(matches!(err, AppError::Template { .. }));
    }

    #[test]
    fn value_escaping_the_base_directory_is_rejected() {
        let mut context = ContextValues::new();
        context.insert("context_name", "../../elsewhere");

        let err = execute(&MinijinjaPathRenderer::new(), &HookLayout::default(), &context)
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidTargetPath { .. }));
    }

    #[test]
    fn empty_layout_resolves_to_nothing() {
        let layout = HookLayout { namespace: "cookiecutter".to_string(), directories: vec![] };
        let targets =
            execute(&MinijinjaPathRenderer::new(), &layout, &ContextValues::new()).unwrap();
        assert!(targets.is_empty());
    }
}
