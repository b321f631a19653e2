//! Application layer for patternkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GeneratorService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Which files a pattern produces lives in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    CatalogService, FileEmitter, GenerateOptions, GeneratorService, PatternInfo, StubInfo,
    StubRenderer,
};

pub use ports::{
    Filesystem, MessageLevel, MessageSink, PathResolver, Stub, TemplateRenderer, TemplateStore,
};

pub use error::ApplicationError;
