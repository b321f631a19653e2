//! # patternkit CLI
//!
//! Design-pattern scaffolding for PHP applications.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Resolve the application root and load configuration.
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Stub not found          |
//! |  4   | Configuration error     |

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use patternkit_core::domain::PatternKind;

use crate::{
    cli::{Cli, Commands, GlobalArgs},
    commands::generate::PatternInput,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // .env is optional.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too and must exit 0.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Root + configuration ───────────────────────────────────────────
    let verbose = cli.global.verbose > 0;
    let root = match resolve_root(&cli.global) {
        Ok(root) => root,
        Err(e) => return handle_error(e, verbose),
    };

    let config = match AppConfig::load(cli.global.config.as_deref(), &root) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return handle_error(err, verbose);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, root, output) {
        Ok(()) => {
            info!("patternkit completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// `--root`, else the current directory.
fn resolve_root(global: &GlobalArgs) -> CliResult<PathBuf> {
    match &global.root {
        Some(root) => Ok(root.clone()),
        None => Ok(std::env::current_dir()?),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, root: PathBuf, output: OutputManager) -> CliResult<()> {
    let Cli { global, command } = cli;
    debug!(pattern = ?command.pattern(), "Dispatching");
    let generate = |input: PatternInput, global: GlobalArgs, config: AppConfig, output: OutputManager| {
        commands::generate::execute(input, global, config, &root, output)
    };

    match command {
        Commands::Adapter(args) => generate(PatternInput::adapter(args), global, config, output),
        Commands::Decorator(args) => generate(
            PatternInput::with_satellites(PatternKind::Decorator, args),
            global,
            config,
            output,
        ),
        Commands::Factory(args) => generate(
            PatternInput::with_satellites(PatternKind::Factory, args),
            global,
            config,
            output,
        ),
        Commands::Observer(args) => generate(
            PatternInput::with_satellites(PatternKind::Observer, args),
            global,
            config,
            output,
        ),
        Commands::Strategy(args) => generate(
            PatternInput::with_satellites(PatternKind::Strategy, args),
            global,
            config,
            output,
        ),
        Commands::List(args) => commands::list::execute(args, global, config, &root, output),
        Commands::Init(args) => commands::init::execute(args, &root, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, config, global.config.as_deref(), &root, output)
        }
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let color = std::io::IsTerminal::is_terminal(&std::io::stderr());
    eprint!("{}", err.render(verbose, color));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
