// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for patternkit.
//!
//! This module contains pure logic with no I/O. Reading stubs, writing
//! files and talking to the user are handled via ports (traits) defined in
//! the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or console calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: requests and plans are built once, then read
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod resolver;
pub mod substitution;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    descriptor::{
        Extra, OUTPUT_EXTENSION, PATTERNS_DIR, StubId, TemplateDescriptor, all_stub_ids,
        descriptors,
    },
    plan::{EmitPlan, PlannedFile, product_cases},
    report::{GenerationReport, ReportedFile},
    request::{DEFAULT_ADAPTEE, GenerationRequest, GenerationRequestBuilder},
};

pub use error::{DomainError, ErrorCategory};

pub use resolver::{resolve_import_path, short_class_name};
pub use substitution::{RenderedText, Substitutions, substitute};
pub use value_objects::{PatternKind, Role};

pub use validation::{DomainValidator, NAMESPACE_SEPARATOR};
