pub mod directory_filesystem;
pub mod memory_directory_store;
pub mod template;

pub use directory_filesystem::FilesystemDirectoryStore;
pub use memory_directory_store::MemoryDirectoryStore;
pub use template::MinijinjaPathRenderer;
