//! Application root resolution.

use std::path::PathBuf;

use patternkit_core::{application::ports::PathResolver, domain::RelativePath};

/// The root of the PHP application that receives generated files.
#[derive(Debug, Clone)]
pub struct ProjectRoot {
    root: PathBuf,
}

impl ProjectRoot {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PathResolver for ProjectRoot {
    fn base_path(&self, relative: &RelativePath) -> PathBuf {
        self.root.join(relative.as_path())
    }
}
