//! patternkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the patternkit
//! design-pattern generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          patternkit-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (GeneratorService, CatalogService)    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Store, Renderer, Filesystem, Sink)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   patternkit-adapters (Infrastructure)  │
//! │ (BuiltinStore, LocalFilesystem, etc)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (GenerationRequest, EmitPlan, Report)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use patternkit_core::{
//!     application::{GenerateOptions, GeneratorService},
//!     domain::{GenerationRequest, PatternKind},
//! };
//!
//! // 1. Describe what to generate
//! let request = GenerationRequest::builder(PatternKind::Factory, "Vehicle")
//!     .satellites(["Car", "Bike"])
//!     .build()?;
//!
//! // 2. Use application service (with injected adapters)
//! let report = service.generate(&request, GenerateOptions::default(), &sink)?;
//! assert_eq!(report.file_count(), 4);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CatalogService, GenerateOptions, GeneratorService,
        ports::{Filesystem, MessageSink, PathResolver, TemplateRenderer, TemplateStore},
    };
    pub use crate::domain::{
        EmitPlan, GenerationReport, GenerationRequest, PatternKind, Role, StubId, Substitutions,
    };
    pub use crate::error::{PatternError, PatternResult};
}
