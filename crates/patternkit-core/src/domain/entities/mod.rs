pub mod common;
pub mod descriptor;
pub mod plan;
pub mod report;
pub mod request;

pub use crate::domain::DomainError;
pub use common::RelativePath;
pub use descriptor::{StubId, TemplateDescriptor};
pub use plan::{EmitPlan, PlannedFile};
pub use report::{GenerationReport, ReportedFile};
pub use request::{GenerationRequest, GenerationRequestBuilder};
