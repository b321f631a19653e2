//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use patternkit_core::domain::{DEFAULT_ADAPTEE, PatternKind};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "patternkit",
    bin_name = "patternkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Design-pattern scaffolding for PHP applications",
    long_about = "patternkit writes the interface, primary class and concrete \
                  classes of common design patterns into app/Patterns of a \
                  PHP application.",
    after_help = "EXAMPLES:\n\
        \x20 patternkit adapter PaymentGateway StripeService\n\
        \x20 patternkit factory Vehicle Car Bike\n\
        \x20 patternkit observer Order EmailObserver --namespace 'Shop\\Events'\n\
        \x20 patternkit completions bash > /usr/share/bash-completion/completions/patternkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an Adapter: interface plus adapter class.
    #[command(
        visible_alias = "pattern:adapter",
        about = "Generate an Adapter pattern",
        after_help = "EXAMPLES:\n\
            \x20 patternkit adapter PaymentGateway                  # adapts App\\Models\\Adaptee\n\
            \x20 patternkit adapter PaymentGateway StripeService    # App\\Services\\StripeService\n\
            \x20 patternkit adapter Legacy 'Vendor\\Sdk\\Client'      # full class path kept"
    )]
    Adapter(AdapterArgs),

    /// Generate a Decorator: interface, base component, decorators.
    #[command(
        visible_alias = "pattern:decorator",
        about = "Generate a Decorator pattern",
        after_help = "EXAMPLES:\n\
            \x20 patternkit decorator Coffee\n\
            \x20 patternkit decorator Coffee MilkDecorator SugarDecorator"
    )]
    Decorator(PatternArgs),

    /// Generate a Factory: interface, factory, products.
    #[command(
        visible_alias = "pattern:factory",
        about = "Generate a Factory pattern",
        after_help = "EXAMPLES:\n\
            \x20 patternkit factory Vehicle\n\
            \x20 patternkit factory Vehicle Car Bike"
    )]
    Factory(PatternArgs),

    /// Generate an Observer: observer interface, subject, observers.
    #[command(
        visible_alias = "pattern:observer",
        about = "Generate an Observer pattern",
        after_help = "EXAMPLES:\n\
            \x20 patternkit observer Order\n\
            \x20 patternkit observer Order EmailObserver LogObserver"
    )]
    Observer(PatternArgs),

    /// Generate a Strategy: interface, context, concrete strategies.
    #[command(
        visible_alias = "pattern:strategy",
        about = "Generate a Strategy pattern",
        after_help = "EXAMPLES:\n\
            \x20 patternkit strategy Shipping\n\
            \x20 patternkit strategy Shipping FedexStrategy UpsStrategy"
    )]
    Strategy(PatternArgs),

    /// List patterns and the stubs behind them.
    #[command(
        visible_alias = "ls",
        about = "List available patterns",
        after_help = "EXAMPLES:\n\
            \x20 patternkit list\n\
            \x20 patternkit list --format json\n\
            \x20 patternkit list factory\n\
            \x20 patternkit --stubs ./stubs list"
    )]
    List(ListArgs),

    /// Initialise a patternkit configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 patternkit init           # default location\n\
            \x20 patternkit init --global  # global config\n\
            \x20 patternkit init --local   # .patternkit.toml in the application root"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 patternkit completions bash > ~/.local/share/bash-completion/completions/patternkit\n\
            \x20 patternkit completions zsh  > ~/.zfunc/_patternkit\n\
            \x20 patternkit completions fish > ~/.config/fish/completions/patternkit.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the patternkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 patternkit config get namespaces.factory\n\
            \x20 patternkit config list\n\
            \x20 patternkit config path"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// The pattern a generating subcommand produces.
    pub fn pattern(&self) -> Option<PatternKind> {
        match self {
            Self::Adapter(_) => Some(PatternKind::Adapter),
            Self::Decorator(_) => Some(PatternKind::Decorator),
            Self::Factory(_) => Some(PatternKind::Factory),
            Self::Observer(_) => Some(PatternKind::Observer),
            Self::Strategy(_) => Some(PatternKind::Strategy),
            _ => None,
        }
    }
}

// ── pattern generation ────────────────────────────────────────────────────────

/// Arguments for `patternkit adapter`.
#[derive(Debug, Args)]
pub struct AdapterArgs {
    /// Name of the adapter class.
    #[arg(value_name = "NAME", help = "Adapter class name")]
    pub name: String,

    /// Class being adapted: a short name (`StripeService`, `UserRepository`,
    /// `User`) or a full class path.
    #[arg(
        value_name = "ADAPTEE",
        default_value = DEFAULT_ADAPTEE,
        help = "Class to adapt (Model, Service, Repository, or full class path)"
    )]
    pub adaptee: String,

    #[command(flatten)]
    pub flags: GenerateFlags,
}

/// Arguments for the patterns taking extra class names.
#[derive(Debug, Args)]
pub struct PatternArgs {
    /// Name of the pattern's primary class.
    #[arg(value_name = "NAME", help = "Primary class name")]
    pub name: String,

    /// Concrete classes to generate alongside (decorators, products,
    /// observers or strategies).
    #[arg(value_name = "NAMES", help = "Concrete class names (optional)")]
    pub names: Vec<String>,

    #[command(flatten)]
    pub flags: GenerateFlags,
}

/// Flags shared by every generating subcommand.
#[derive(Debug, Clone, Args)]
pub struct GenerateFlags {
    /// Namespace for the generated classes.
    #[arg(
        long = "namespace",
        value_name = "NAMESPACE",
        help = "Namespace (default: App\\Patterns\\<Pattern>)"
    )]
    pub namespace: Option<String>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Fail on placeholders no value was given for.
    #[arg(long = "strict", help = "Treat unresolved placeholders as errors")]
    pub strict: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `patternkit list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only this pattern.
    #[arg(value_name = "PATTERN", help = "Limit the listing to one pattern")]
    pub pattern: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One pattern per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows, one per stub.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `patternkit init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(
        long = "global",
        conflicts_with = "local",
        help = "Create global configuration"
    )]
    pub global: bool,

    /// Write to `.patternkit.toml` in the application root.
    #[arg(
        long = "local",
        help = "Create local configuration in the application root"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `patternkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `patternkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `namespaces.factory`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
