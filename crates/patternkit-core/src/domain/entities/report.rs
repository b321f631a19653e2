use serde::Serialize;

use crate::domain::{
    entities::common::RelativePath,
    value_objects::{PatternKind, Role},
};

/// What one invocation produced (or would produce, on a dry run).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub pattern: PatternKind,
    pub namespace: String,
    pub files: Vec<ReportedFile>,
    /// Follow-up suggestion when no satellites were given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedFile {
    pub role: Role,
    pub label: &'static str,
    pub path: RelativePath,
    /// Placeholders left unreplaced in this file.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// The summary line printed for each file.
    pub fn summary_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.files
            .iter()
            .map(|f| format!("   - {}: {}", f.label, f.path))
    }
}
