//! Command handlers, one module per subcommand.

use std::path::{Path, PathBuf};

use tracing::debug;

use patternkit_adapters::{BuiltinStore, DirectoryStore};
use patternkit_core::application::ports::TemplateStore;

use crate::{cli::GlobalArgs, config::AppConfig};

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod list;

/// Stub directory in effect: `--stubs` first, then `templates.local_path`
/// (relative to the application root).
pub fn stub_dir(global: &GlobalArgs, config: &AppConfig, root: &Path) -> Option<PathBuf> {
    global.stubs.clone().or_else(|| {
        config
            .templates
            .local_path
            .as_ref()
            .map(|p| if p.is_absolute() { p.clone() } else { root.join(p) })
    })
}

/// The active template store. A stub directory replaces the built-in
/// stubs entirely.
pub fn template_store(
    global: &GlobalArgs,
    config: &AppConfig,
    root: &Path,
) -> Box<dyn TemplateStore> {
    match stub_dir(global, config, root) {
        Some(dir) => {
            debug!(dir = %dir.display(), "Using stub directory");
            Box::new(DirectoryStore::new(dir))
        }
        None => Box::new(BuiltinStore::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn global(stubs: Option<&str>) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            root: None,
            stubs: stubs.map(PathBuf::from),
            output_format: OutputFormat::Plain,
        }
    }

    #[test]
    fn builtin_without_directory() {
        assert!(stub_dir(&global(None), &AppConfig::default(), Path::new("/app")).is_none());
    }

    #[test]
    fn flag_beats_config() {
        let mut config = AppConfig::default();
        config.templates.local_path = Some(PathBuf::from("stubs"));
        assert_eq!(
            stub_dir(&global(Some("/custom")), &config, Path::new("/app")),
            Some(PathBuf::from("/custom"))
        );
    }

    #[test]
    fn config_path_is_relative_to_root() {
        let mut config = AppConfig::default();
        config.templates.local_path = Some(PathBuf::from("resources/stubs"));
        assert_eq!(
            stub_dir(&global(None), &config, Path::new("/app")),
            Some(PathBuf::from("/app/resources/stubs"))
        );
    }
}
