//! Stubs read from a directory on disk.
//!
//! # Directory layout expected
//!
//! ```text
//! stubs/
//! ├── adapter/
//! │   ├── adapter-interface.stub
//! │   └── adapter-class.stub
//! ├── factory/
//! │   ├── factory-interface.stub
//! │   ├── factory-factory.stub
//! │   └── factory-product.stub
//! └── ...
//! ```
//!
//! A stub id is its path relative to the root, with forward slashes.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use patternkit_core::{
    application::{
        ApplicationError,
        ports::{Stub, TemplateStore},
    },
    domain::StubId,
    error::PatternResult,
};

use crate::filesystem::map_io_error;

/// Extension a file needs to count as a stub.
const STUB_EXTENSION: &str = "stub";

/// Store over a user-supplied stub directory. There is no fallback to the
/// built-in stubs.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// The directory does not need to exist yet; every stub is then missing.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_of(&self, id: &StubId) -> PathBuf {
        id.as_str()
            .split('/')
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }
}

impl TemplateStore for DirectoryStore {
    fn exists(&self, id: &StubId) -> bool {
        self.path_of(id).is_file()
    }

    #[instrument(skip(self), fields(stub = %id))]
    fn load(&self, id: &StubId) -> PatternResult<Stub> {
        let path = self.path_of(id);
        if !path.is_file() {
            return Err(ApplicationError::TemplateNotFound {
                stub: id.to_string(),
                location: path.display().to_string(),
            }
            .into());
        }

        let source = fs::read_to_string(&path).map_err(|e| map_io_error(&path, e, "read stub"))?;
        debug!(path = %path.display(), "Stub loaded");
        Ok(Stub {
            id: id.clone(),
            source,
        })
    }

    fn locate(&self, id: &StubId) -> String {
        self.path_of(id).display().to_string()
    }

    #[instrument(skip(self), fields(dir = %self.root.display()))]
    fn list(&self) -> PatternResult<Vec<StubId>> {
        if !self.root.is_dir() {
            warn!("Stub directory does not exist");
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.root).min_depth(1) {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: self.root.clone(),
                reason: format!("Failed to walk stub directory: {e}"),
            })?;

            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(STUB_EXTENSION)
            {
                continue;
            }

            if let Ok(relative) = path.strip_prefix(&self.root) {
                ids.push(StubId::new(normalize_path(relative)));
            }
        }

        ids.sort();
        debug!(count = ids.len(), "Stubs found");
        Ok(ids)
    }
}

/// Convert a relative path to a forward-slash id.
fn normalize_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(root: &Path, id: &str, content: &str) {
        let path = root.join(id);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn loads_and_lists_stubs() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "factory/factory-product.stub", "class {{ class }}");
        write(dir.path(), "adapter/adapter-class.stub", "x");
        write(dir.path(), "README.md", "not a stub");

        let store = DirectoryStore::new(dir.path());
        let id = StubId::new("factory/factory-product.stub");
        assert!(store.exists(&id));
        assert_eq!(store.load(&id).unwrap().source, "class {{ class }}");
        assert_eq!(
            store.list().unwrap(),
            [
                StubId::new("adapter/adapter-class.stub"),
                StubId::new("factory/factory-product.stub")
            ]
        );
    }

    #[test]
    fn missing_stub_names_full_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(dir.path());
        let id = StubId::new("observer/observer-subject.stub");

        assert!(!store.exists(&id));
        let err = store.load(&id).unwrap_err();
        assert!(err.is_template_not_found());

        let expected = dir.path().join("observer").join("observer-subject.stub");
        assert_eq!(store.locate(&id), expected.display().to_string());
    }

    #[test]
    fn absent_root_lists_nothing() {
        let store = DirectoryStore::new("/definitely/not/here");
        assert!(store.list().unwrap().is_empty());
    }
}
