//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `patternkit-adapters` implement
//! these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateStore`: Stub storage/retrieval
//!   - `TemplateRenderer`: Placeholder substitution
//!   - `PathResolver`: Application root
//!   - `MessageSink`: Console channels (info, line, error, comment)
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    Filesystem, MessageLevel, MessageSink, PathResolver, Stub, TemplateRenderer, TemplateStore,
};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer, MockTemplateStore};
