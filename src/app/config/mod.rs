//! File-backed configuration loaders.
//!
//! Layout and context documents are read from disk here; pure parsing lives in
//! `domain::layout` and `domain::context`.

mod load_context;
mod load_layout;

pub use load_context::load_context;
pub use load_layout::load_layout;
