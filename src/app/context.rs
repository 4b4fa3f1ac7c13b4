use crate::ports::{DirectoryStore, PathRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<D: DirectoryStore, R: PathRenderer> {
    store: D,
    renderer: R,
}

impl<D: DirectoryStore, R: PathRenderer> AppContext<D, R> {
    /// Create a new application context.
    pub fn new(store: D, renderer: R) -> Self {
        Self { store, renderer }
    }

    /// Get a reference to the directory store.
    pub fn store(&self) -> &D {
        &self.store
    }

    /// Get a reference to the path renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
