//! Generator Service - main application orchestrator.
//!
//! This service coordinates one generation:
//! 1. Expand the request into an emit plan
//! 2. Check that every stub the plan needs is present
//! 3. Render every stub
//! 4. Write every file (unless dry-running)
//! 5. Report a summary through the message sink
//!
//! Nothing is written unless steps 1-3 succeed for every file.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{MessageSink, PathResolver},
        services::{FileEmitter, StubRenderer},
    },
    domain::{
        DomainValidator as validator, EmitPlan, GenerationReport, GenerationRequest, PlannedFile,
        RenderedText, ReportedFile,
    },
    error::PatternResult,
};

/// Per-invocation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Render everything but write nothing.
    pub dry_run: bool,
}

/// The generic pattern generator.
///
/// One instance serves all five patterns; which files are produced is
/// decided by the descriptor table behind [`EmitPlan`].
pub struct GeneratorService {
    stubs: StubRenderer,
    emitter: FileEmitter,
    paths: Box<dyn PathResolver>,
}

impl GeneratorService {
    /// Create a new generator with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use patternkit_core::application::{FileEmitter, GeneratorService, StubRenderer};
    ///
    /// let service = GeneratorService::new(
    ///     StubRenderer::new(store, renderer), // impl TemplateStore, impl TemplateRenderer
    ///     FileEmitter::new(filesystem),       // impl Filesystem
    ///     paths,                              // impl PathResolver
    /// );
    /// ```
    pub fn new(stubs: StubRenderer, emitter: FileEmitter, paths: Box<dyn PathResolver>) -> Self {
        Self {
            stubs,
            emitter,
            paths,
        }
    }

    /// Generate the files for one request.
    #[instrument(
        skip_all,
        fields(
            pattern = %request.kind(),
            name = %request.primary_name(),
            dry_run = options.dry_run
        )
    )]
    pub fn generate(
        &self,
        request: &GenerationRequest,
        options: GenerateOptions,
        sink: &dyn MessageSink,
    ) -> PatternResult<GenerationReport> {
        info!("Generating {}", request);

        // 1. Plan
        let plan = EmitPlan::for_request(request)?;
        validator::validate_plan(&plan)?;
        debug!(files = plan.file_count(), "Plan built");

        // 2. All stubs present?
        self.check_stubs(&plan, sink)?;

        // 3. Render
        let rendered = plan
            .files()
            .iter()
            .map(|file| {
                self.stubs
                    .render(&file.stub, &file.substitutions)
                    .map(|text| (file, text))
            })
            .collect::<PatternResult<Vec<_>>>()?;

        // 4. Write
        if options.dry_run {
            info!("Dry run, nothing written");
        } else {
            self.write_all(&rendered)?;
        }

        // 5. Report
        let report = build_report(request, &rendered, options);
        announce(&report, sink);

        info!(files = report.file_count(), "Generation completed");
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Report every missing stub, then fail on the first one.
    fn check_stubs(&self, plan: &EmitPlan, sink: &dyn MessageSink) -> PatternResult<()> {
        let mut first_missing: Option<ApplicationError> = None;
        let mut reported = Vec::new();

        for file in plan.files() {
            if self.stubs.exists(&file.stub) || reported.contains(&&file.stub) {
                continue;
            }
            reported.push(&file.stub);

            let location = self.stubs.locate(&file.stub);
            warn!(stub = %file.stub, location = %location, "Stub missing");
            sink.error(&format!(
                "{} not found: {}",
                file.stub_description, location
            ));

            first_missing.get_or_insert(ApplicationError::TemplateNotFound {
                stub: file.stub.to_string(),
                location,
            });
        }

        match first_missing {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn write_all(&self, rendered: &[(&PlannedFile, RenderedText)]) -> PatternResult<()> {
        for (file, text) in rendered {
            let path = self.paths.base_path(&file.output_path);
            self.emitter.emit(&path, &text.content)?;
            debug!(path = %path.display(), "File written");
        }
        Ok(())
    }
}

fn build_report(
    request: &GenerationRequest,
    rendered: &[(&PlannedFile, RenderedText)],
    options: GenerateOptions,
) -> GenerationReport {
    let kind = request.kind();
    let hint = if request.satellite_names().is_empty() {
        kind.follow_up_hint(request.primary_name())
    } else {
        None
    };

    GenerationReport {
        pattern: kind,
        namespace: request.namespace().to_string(),
        files: rendered
            .iter()
            .map(|(file, text)| ReportedFile {
                role: file.role,
                label: file.label,
                path: file.output_path.clone(),
                unresolved: text.unresolved.clone(),
            })
            .collect(),
        hint,
        dry_run: options.dry_run,
    }
}

/// Headline, one line per file, then warnings and the follow-up hint.
fn announce(report: &GenerationReport, sink: &dyn MessageSink) {
    let name = report.pattern.directory();
    if report.dry_run {
        sink.info(&format!("Dry run: {name} pattern would create:"));
    } else {
        sink.info(&format!("{name} pattern created successfully!"));
    }

    for line in report.summary_lines() {
        sink.line(&line);
    }

    for file in report.files.iter().filter(|f| !f.unresolved.is_empty()) {
        warn!(path = %file.path, tokens = ?file.unresolved, "Unresolved placeholders");
        sink.comment(&format!(
            "   Warning: {} still contains placeholders: {}",
            file.path,
            file.unresolved.join(", ")
        ));
    }

    if let Some(hint) = &report.hint {
        sink.comment(&format!("   {hint}"));
    }
}
