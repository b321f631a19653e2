//! File Emitter - write rendered text, creating parent directories.

use std::path::Path;

use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, error::PatternResult};

/// Writes rendered files, silently replacing existing ones.
pub struct FileEmitter {
    filesystem: Box<dyn Filesystem>,
}

impl FileEmitter {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    #[instrument(skip(self, content), fields(path = %path.display()))]
    pub fn emit(&self, path: &Path, content: &str) -> PatternResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                self.filesystem.create_dir_all(parent)?;
            }
        }

        if self.filesystem.exists(path) {
            debug!("Overwriting existing file");
        }

        self.filesystem.write_file(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockFilesystem};

    #[test]
    fn creates_parent_then_writes() {
        let mut fs = MockFilesystem::new();
        let mut seq = mockall::Sequence::new();
        fs.expect_create_dir_all()
            .withf(|p| p == Path::new("/app/app/Patterns/Factory"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        fs.expect_exists().returning(|_| false);
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("/app/app/Patterns/Factory/Car.php") && c == "<?php")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        FileEmitter::new(Box::new(fs))
            .emit(Path::new("/app/app/Patterns/Factory/Car.php"), "<?php")
            .unwrap();
    }

    #[test]
    fn directory_failure_stops_the_write() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|p| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "Failed to create directory: permission denied".into(),
            }
            .into())
        });
        fs.expect_write_file().never();

        let result = FileEmitter::new(Box::new(fs)).emit(Path::new("/ro/x/Car.php"), "<?php");
        assert!(result.is_err());
    }
}
