//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `patternkit-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{RelativePath, RenderedText, StubId, Substitutions};
use crate::error::PatternResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `patternkit_adapters::filesystem::LocalFilesystem` (production)
/// - `patternkit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PatternResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> PatternResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// A stub as loaded from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stub {
    pub id: StubId,
    pub source: String,
}

/// Port for stub storage and retrieval.
///
/// Implemented by:
/// - `patternkit_adapters::template_store::BuiltinStore` (compiled-in stubs)
/// - `patternkit_adapters::template_store::DirectoryStore` (stubs on disk)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Whether the stub is available.
    fn exists(&self, id: &StubId) -> bool;

    /// Load a stub; fails with `TemplateNotFound` when absent.
    fn load(&self, id: &StubId) -> PatternResult<Stub>;

    /// Where the stub lives (or would live), for messages.
    fn locate(&self, id: &StubId) -> String;

    /// Every stub the store holds, sorted.
    fn list(&self) -> PatternResult<Vec<StubId>>;
}

/// Port for stub rendering.
///
/// Implemented by:
/// - `patternkit_adapters::renderer::SimpleRenderer` (placeholder substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a stub with the given placeholder values.
    fn render(&self, stub: &Stub, substitutions: &Substitutions) -> PatternResult<RenderedText>;
}

/// Port resolving paths against the application root.
///
/// Implemented by:
/// - `patternkit_adapters::ProjectRoot`
pub trait PathResolver: Send + Sync {
    /// Absolute location of `relative` inside the application.
    fn base_path(&self, relative: &RelativePath) -> PathBuf;
}

/// Severity channel of a console message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageLevel {
    /// Headline, e.g. "Factory pattern created successfully!".
    Info,
    /// Plain detail line.
    Line,
    /// Something went wrong.
    Error,
    /// Hints and warnings.
    Comment,
}

/// Port for user-facing console output.
///
/// Implemented by:
/// - the CLI's `OutputManager`
/// - `patternkit_adapters::MemorySink` (testing, JSON mode)
pub trait MessageSink {
    fn emit(&self, level: MessageLevel, message: &str);

    fn info(&self, message: &str) {
        self.emit(MessageLevel::Info, message);
    }

    fn line(&self, message: &str) {
        self.emit(MessageLevel::Line, message);
    }

    fn error(&self, message: &str) {
        self.emit(MessageLevel::Error, message);
    }

    fn comment(&self, message: &str) {
        self.emit(MessageLevel::Comment, message);
    }
}
