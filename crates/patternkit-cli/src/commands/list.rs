//! Implementation of the `patternkit list` command.

use std::path::Path;

use patternkit_core::{
    application::{CatalogService, PatternInfo},
    domain::{DomainError, PatternKind},
    error::PatternError,
};

use crate::{
    cli::{ListArgs, ListFormat, global::GlobalArgs},
    commands::template_store,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    root: &Path,
    output: OutputManager,
) -> CliResult<()> {
    let catalog = CatalogService::new(template_store(&global, &config, root));
    let patterns = match &args.pattern {
        Some(name) => {
            let kind: PatternKind = name.parse().map_err(|e: DomainError| CliError::Core(e.into()))?;
            vec![catalog.describe(kind)]
        }
        None => catalog.patterns(),
    };

    match args.format {
        ListFormat::Table => {
            output.header("Available Patterns:")?;
            for info in &patterns {
                let status = if info.is_ready() { "ready" } else { "incomplete" };
                output.print(&format!(
                    "  {:<10} {} ({})",
                    info.pattern.as_str(),
                    info.namespace,
                    status
                ))?;
                for stub in &info.stubs {
                    let mark = if stub.available { "\u{2713}" } else { "\u{2717}" };
                    output.print(&format!("      {mark} {:<18} {}", stub.label, stub.location))?;
                }
            }
            let unused = catalog.unused_stubs()?;
            if !unused.is_empty() {
                output.comment(&format!(
                    "Stubs not used by any pattern: {}",
                    unused
                        .iter()
                        .map(|id| id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))?;
            }
        }

        ListFormat::Json => {
            // Straight to stdout so pipes stay parseable.
            let json = serde_json::to_string_pretty(&patterns).map_err(|e| {
                CliError::Core(PatternError::Internal {
                    message: format!("Failed to serialise pattern list: {e}"),
                })
            })?;
            output.data(&json)?;
        }

        ListFormat::List => {
            for info in &patterns {
                output.data(info.pattern.as_str())?;
            }
        }

        ListFormat::Csv => {
            output.data("pattern,role,label,stub,available")?;
            for row in csv_rows(&patterns) {
                output.data(&row)?;
            }
        }
    }

    Ok(())
}

fn csv_rows(patterns: &[PatternInfo]) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|info| {
            info.stubs.iter().map(move |stub| {
                format!(
                    "{},{},{},{},{}",
                    info.pattern, stub.role, stub.label, stub.id, stub.available
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use patternkit_adapters::BuiltinStore;

    use super::*;

    #[test]
    fn csv_has_one_row_per_stub() {
        let patterns = CatalogService::new(Box::new(BuiltinStore::new())).patterns();
        let rows = csv_rows(&patterns);
        assert_eq!(rows.len(), 14);
        assert_eq!(
            rows[0],
            "adapter,interface,Interface,adapter/adapter-interface.stub,true"
        );
        assert!(rows.contains(
            &"observer,interface,Observer Interface,observer/observer-interface.stub,true"
                .to_string()
        ));
    }
}
