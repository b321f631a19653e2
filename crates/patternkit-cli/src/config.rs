//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `PATTERNKIT_*` environment variables, `__` between nested keys
//!    (`PATTERNKIT_TEMPLATES__STRICT=true`)
//! 3. The file given with `--config` (must exist)
//! 4. `.patternkit.toml` in the application root
//! 5. The global file at [`AppConfig::config_path`]
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::debug;

use patternkit_core::domain::PatternKind;

/// File name of the per-application config.
pub const LOCAL_CONFIG_FILE: &str = ".patternkit.toml";

const ENV_PREFIX: &str = "PATTERNKIT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Namespace used per pattern when `--namespace` is not given.
    pub namespaces: NamespaceConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// Stub settings.
    pub templates: TemplateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamespaceConfig {
    pub adapter: String,
    pub decorator: String,
    pub factory: String,
    pub observer: String,
    pub strategy: String,
}

impl Default for NamespaceConfig {
    fn default() -> Self {
        Self {
            adapter: PatternKind::Adapter.default_namespace(),
            decorator: PatternKind::Decorator.default_namespace(),
            factory: PatternKind::Factory.default_namespace(),
            observer: PatternKind::Observer.default_namespace(),
            strategy: PatternKind::Strategy.default_namespace(),
        }
    }
}

impl NamespaceConfig {
    pub fn for_pattern(&self, kind: PatternKind) -> &str {
        match kind {
            PatternKind::Adapter => &self.adapter,
            PatternKind::Decorator => &self.decorator,
            PatternKind::Factory => &self.factory,
            PatternKind::Observer => &self.observer,
            PatternKind::Strategy => &self.strategy,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Stub directory replacing the built-in stubs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_path: Option<PathBuf>,
    /// Unresolved placeholders are errors.
    pub strict: bool,
}

impl AppConfig {
    /// Load configuration for the application at `root`.
    ///
    /// `config_file` is the path passed via `--config`; unlike the global
    /// and local files it must exist.
    pub fn load(config_file: Option<&Path>, root: &Path) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from(Self::config_path()).required(false))
            .add_source(config::File::from(Self::local_path(root)).required(false));

        if let Some(path) = config_file {
            if !path.is_file() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("failed to read configuration")?;

        let config: Self = settings
            .try_deserialize()
            .context("invalid configuration")?;
        debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.patternkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "patternkit", "patternkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Path to the per-application configuration file.
    pub fn local_path(root: &Path) -> PathBuf {
        root.join(LOCAL_CONFIG_FILE)
    }

    /// The file with the highest priority that exists, if any.
    pub fn active_path(config_file: Option<&Path>, root: &Path) -> Option<PathBuf> {
        if let Some(path) = config_file {
            return Some(path.to_path_buf());
        }
        [Self::local_path(root), Self::config_path()]
            .into_iter()
            .find(|p| p.is_file())
    }

    /// Look up a dotted key such as `namespaces.factory`.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let mut value = serde_json::to_value(self).ok()?;
        for segment in key.split('.') {
            value = value.get_mut(segment)?.take();
        }
        Some(value)
    }
}
