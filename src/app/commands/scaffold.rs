//! Ensure a list of resolved directories exists under the base directory.

use tracing::{debug, info};

use crate::domain::{AppError, TargetPath};
use crate::ports::DirectoryStore;

/// Outcome of a successful scaffold run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Targets that did not exist before the run.
    pub created: Vec<TargetPath>,
    /// Targets that were already present as directories.
    pub existing: Vec<TargetPath>,
}

impl ScaffoldReport {
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

/// Ensure every target exists, in order.
///
/// The first failure aborts the run. Directories created for earlier targets are kept.
pub fn execute<D: DirectoryStore>(
    store: &D,
    targets: &[TargetPath],
) -> Result<ScaffoldReport, AppError> {
    let mut report = ScaffoldReport::default();

    for target in targets {
        let existed = store.is_dir(target);
        store.ensure_dir(target)?;

        if existed {
            debug!(path = %target, "directory already exists");
            report.existing.push(target.clone());
        } else {
            debug!(path = %target, "created directory");
            report.created.push(target.clone());
        }
    }

    info!(
        base = %store.base_dir().display(),
        created = report.created.len(),
        existing = report.existing.len(),
        "scaffold directories ensured"
    );
    Ok(report)
}
