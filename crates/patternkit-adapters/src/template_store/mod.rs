//! Template store adapters.

mod builtin;
mod directory;

pub use builtin::BuiltinStore;
pub use directory::DirectoryStore;
