mod directory_store;
mod path_renderer;

pub use directory_store::DirectoryStore;
pub use path_renderer::PathRenderer;
