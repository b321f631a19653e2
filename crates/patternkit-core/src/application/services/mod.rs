//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a factory" or "list patterns".

pub mod catalog_service;
pub mod file_emitter;
pub mod generator_service;
pub mod stub_renderer;

pub use catalog_service::{CatalogService, PatternInfo, StubInfo};
pub use file_emitter::FileEmitter;
pub use generator_service::{GenerateOptions, GeneratorService};
pub use stub_renderer::StubRenderer;
