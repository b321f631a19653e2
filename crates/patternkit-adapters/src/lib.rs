//! Infrastructure adapters for patternkit.
//!
//! This crate implements the ports defined in `patternkit-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod project_root;
pub mod renderer;
pub mod sink;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use project_root::ProjectRoot;
pub use renderer::SimpleRenderer;
pub use sink::MemorySink;
pub use template_store::{BuiltinStore, DirectoryStore};
