pub mod context;
pub mod error;
pub mod layout;
pub mod target;

pub use context::ContextValues;
pub use error::AppError;
pub use layout::{DEFAULT_DIRECTORIES, DEFAULT_NAMESPACE, HookLayout};
pub use target::{PathTemplate, TargetPath};
