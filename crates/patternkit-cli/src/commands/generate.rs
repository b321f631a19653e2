//! Implementation of the pattern commands (`adapter`, `decorator`,
//! `factory`, `observer`, `strategy`).
//!
//! Responsibility: translate CLI arguments into a `GenerationRequest`, wire
//! the adapters into the generator, and display results. No business logic
//! lives here.

use std::path::Path;

use tracing::{info, instrument};

use patternkit_adapters::{LocalFilesystem, MemorySink, ProjectRoot, SimpleRenderer};
use patternkit_core::{
    application::{FileEmitter, GenerateOptions, GeneratorService, MessageLevel, StubRenderer},
    domain::{GenerationRequest, PatternKind},
    error::PatternError,
};

use crate::{
    cli::{AdapterArgs, GenerateFlags, GlobalArgs, OutputFormat, PatternArgs},
    commands::template_store,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// What one pattern command asked for, independent of its clap shape.
#[derive(Debug)]
pub struct PatternInput {
    pub kind: PatternKind,
    pub name: String,
    pub satellites: Vec<String>,
    pub adaptee: Option<String>,
    pub flags: GenerateFlags,
}

impl PatternInput {
    pub fn adapter(args: AdapterArgs) -> Self {
        Self {
            kind: PatternKind::Adapter,
            name: args.name,
            satellites: Vec::new(),
            adaptee: Some(args.adaptee),
            flags: args.flags,
        }
    }

    pub fn with_satellites(kind: PatternKind, args: PatternArgs) -> Self {
        Self {
            kind,
            name: args.name,
            satellites: args.names,
            adaptee: None,
            flags: args.flags,
        }
    }

    /// Build the core request, taking the namespace from config when the
    /// flag is absent.
    pub fn to_request(&self, config: &AppConfig) -> CliResult<GenerationRequest> {
        let namespace = self
            .flags
            .namespace
            .clone()
            .unwrap_or_else(|| config.namespaces.for_pattern(self.kind).to_string());

        let mut builder = GenerationRequest::builder(self.kind, &self.name)
            .satellites(self.satellites.iter().cloned())
            .namespace(namespace);
        if let Some(adaptee) = &self.adaptee {
            builder = builder.adaptee(adaptee);
        }

        builder.build().map_err(|e| CliError::Core(e.into()))
    }
}

/// Execute one pattern command.
#[instrument(skip_all, fields(pattern = %input.kind, name = %input.name))]
pub fn execute(
    input: PatternInput,
    global: GlobalArgs,
    config: AppConfig,
    root: &Path,
    output: OutputManager,
) -> CliResult<()> {
    let request = input.to_request(&config)?;

    let strict = input.flags.strict || config.templates.strict;
    let renderer = if strict {
        SimpleRenderer::strict()
    } else {
        SimpleRenderer::new()
    };

    let service = GeneratorService::new(
        StubRenderer::new(template_store(&global, &config, root), Box::new(renderer)),
        FileEmitter::new(Box::new(LocalFilesystem::new())),
        Box::new(ProjectRoot::new(root)),
    );
    let options = GenerateOptions {
        dry_run: input.flags.dry_run,
    };

    info!(root = %root.display(), strict, dry_run = options.dry_run, "Generating");

    if output.format() == OutputFormat::Json {
        return generate_json(&service, &request, options, &output);
    }

    service.generate(&request, options, &output)?;
    Ok(())
}

/// JSON mode: the report goes to stdout, console lines are dropped except
/// errors.
fn generate_json(
    service: &GeneratorService,
    request: &GenerationRequest,
    options: GenerateOptions,
    output: &OutputManager,
) -> CliResult<()> {
    let sink = MemorySink::new();
    let result = service.generate(request, options, &sink);

    for message in sink.at(MessageLevel::Error) {
        output.error(&message)?;
    }

    let report = result?;
    let json = serde_json::to_string_pretty(&report).map_err(|e| {
        CliError::Core(PatternError::Internal {
            message: format!("Failed to serialise report: {e}"),
        })
    })?;
    output.data(&json)?;
    Ok(())
}
