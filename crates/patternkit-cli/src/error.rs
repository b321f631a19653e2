//! Error presentation for the patternkit CLI.
//!
//! Core errors arrive as [`PatternError`] and are wrapped with the CLI's own
//! configuration and I/O failures. Each error knows its exit code and the
//! next steps to print under it.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use patternkit_core::error::PatternError;

pub use patternkit_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Generation or catalog failure from `patternkit-core`.
    #[error("Generation failed: {0}")]
    Core(#[from] PatternError),

    /// Terminal or config-file I/O outside the core.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Exit-code classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad class name, namespace, duplicate output, strict-mode leftovers.
    UserError,
    /// A stub the pattern needs is missing.
    NotFound,
    /// Unreadable or invalid configuration.
    Configuration,
    /// I/O failures and bugs.
    Internal,
}

impl ErrorCategory {
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
            Self::Internal => 1,
        }
    }
}

impl CliError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// What the user can do next, most specific first.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => vec![
                "Run 'patternkit config path' to see which file is in use".into(),
                "Run 'patternkit init --local --force' to rewrite .patternkit.toml".into(),
                "Nested keys come from PATTERNKIT_<SECTION>__<KEY> variables too".into(),
            ],

            Self::Core(core) => {
                let mut steps = core.suggestions();
                match self.category() {
                    ErrorCategory::NotFound => steps.push(
                        "Run 'patternkit list' to check every stub of the active store".into(),
                    ),
                    ErrorCategory::UserError => steps.push(
                        "Usage: patternkit <pattern> <Name> [Names...] [--namespace NS]".into(),
                    ),
                    _ => {}
                }
                steps
            }

            Self::IoError { .. } => vec![
                "Check that --root points at your application".into(),
                "Check write permissions under app/Patterns".into(),
            ],
        }
    }

    /// Full message for stderr: headline, causes when `verbose`, then
    /// suggestions. `color` adds ANSI styling.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if color { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{} {}\n",
            paint("Error:", |t| t.red().bold().to_string()),
            paint(&self.to_string(), |t| t.red().to_string()),
        );

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                out.push_str(&paint(&format!("  caused by: {err}"), |t| {
                    t.dimmed().to_string()
                }));
                out.push('\n');
                cause = err.source();
            }
        }

        let steps = self.suggestions();
        if !steps.is_empty() {
            out.push('\n');
            out.push_str(&paint("Suggestions:", |t| t.yellow().bold().to_string()));
            out.push('\n');
            for step in steps {
                out.push_str(&format!("  - {step}\n"));
            }
        }

        if !verbose {
            out.push('\n');
            out.push_str(&paint("Use -v / --verbose for more details.", |t| {
                t.dimmed().to_string()
            }));
            out.push('\n');
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        let code = self.exit_code();
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(code, "{}", self)
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(code, "{}", self)
            }
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Attach a description of the failed step to a `std::io` result.
pub trait IoContext<T> {
    fn io_context<F, S>(self, describe: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IoContext<T> for Result<T, std::io::Error> {
    fn io_context<F, S>(self, describe: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: describe().into(),
            source,
        })
    }
}
