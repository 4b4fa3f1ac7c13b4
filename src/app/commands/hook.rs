//! The post-generation hook: resolve the layout, then ensure its directories.

use super::resolve;
use super::scaffold::{self, ScaffoldReport};
use crate::app::AppContext;
use crate::domain::{AppError, ContextValues, HookLayout};
use crate::ports::{DirectoryStore, PathRenderer};

/// Run the hook against the context's directory store.
///
/// Every template is resolved before any directory is touched, so a rendering
/// error leaves the filesystem unchanged.
pub fn execute<D: DirectoryStore, R: PathRenderer>(
    ctx: &AppContext<D, R>,
    layout: &HookLayout,
    context: &ContextValues,
) -> Result<ScaffoldReport, AppError> {
    let targets = resolve::execute(ctx.renderer(), layout, context)?;
    scaffold::execute(ctx.store(), &targets)
}
