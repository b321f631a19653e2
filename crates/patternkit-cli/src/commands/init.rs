//! `patternkit init`: create a default configuration file.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IoContext},
    output::OutputManager,
};

/// Where `init` writes: `.patternkit.toml` in the root with `--local`,
/// otherwise the global config file.
pub fn target_path(args: &InitArgs, root: &Path) -> PathBuf {
    if args.local {
        AppConfig::local_path(root)
    } else {
        AppConfig::config_path()
    }
}

/// Create a default patternkit configuration file.
pub fn execute(args: InitArgs, root: &Path, output: OutputManager) -> CliResult<()> {
    let config_path = target_path(&args, root);
    debug!(global = args.global, local = args.local, path = %config_path.display(), "Init");

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise default config: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).io_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(&config_path, &toml)
        .io_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    info!(path = %config_path.display(), "Config written");
    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}
