//! scaffold-hook: post-generation hook that ensures a bounded context's
//! directory skeleton exists inside a freshly generated project.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

use std::path::{Path, PathBuf};

use adapters::{FilesystemDirectoryStore, MinijinjaPathRenderer};
use app::{
    AppContext,
    commands::{hook, resolve, scaffold},
    config,
};

pub use app::commands::scaffold::ScaffoldReport;
pub use domain::{AppError, ContextValues, HookLayout, PathTemplate, TargetPath};

/// Inputs for a full hook run.
#[derive(Debug, Clone, Default)]
pub struct HookOptions {
    /// Project root; the current directory when `None`.
    pub base_dir: Option<PathBuf>,
    /// TOML layout file; the built-in layout when `None`.
    pub layout: Option<PathBuf>,
    /// JSON or YAML context file.
    pub context_file: Option<PathBuf>,
    /// `key=value` context assignments, applied after the context file.
    pub assignments: Vec<String>,
}

/// Run the post-generation hook.
///
/// Loads the layout and context values, resolves every directory template,
/// then ensures each directory exists under the base directory.
pub fn run_hook(options: &HookOptions) -> Result<ScaffoldReport, AppError> {
    let store = match &options.base_dir {
        Some(dir) => FilesystemDirectoryStore::new(dir.clone()),
        None => FilesystemDirectoryStore::current()?,
    };
    let layout = config::load_layout(options.layout.as_deref())?;
    let context = config::load_context(
        options.context_file.as_deref(),
        &options.assignments,
        &layout.namespace,
    )?;

    let ctx = AppContext::new(store, MinijinjaPathRenderer::new());
    hook::execute(&ctx, &layout, &context)
}

/// Ensure each already-resolved path exists as a directory under `base`.
///
/// All paths are validated before any directory is created. An empty list is a no-op.
pub fn ensure_directories<P: AsRef<str>>(
    base: &Path,
    paths: &[P],
) -> Result<ScaffoldReport, AppError> {
    let targets =
        paths.iter().map(|path| TargetPath::new(path.as_ref())).collect::<Result<Vec<_>, _>>()?;
    let store = FilesystemDirectoryStore::new(base.to_path_buf());
    scaffold::execute(&store, &targets)
}

/// Substitute context values into a single path template. Performs no I/O.
pub fn resolve_path(
    template: &str,
    context: &ContextValues,
    namespace: &str,
) -> Result<TargetPath, AppError> {
    let layout = HookLayout {
        namespace: namespace.to_string(),
        directories: vec![PathTemplate::new(template)],
    };
    let mut targets = resolve::execute(&MinijinjaPathRenderer::new(), &layout, context)?;
    targets.pop().ok_or_else(|| AppError::InvalidTargetPath {
        path: template.to_string(),
        reason: "template produced no path".to_string(),
    })
}
