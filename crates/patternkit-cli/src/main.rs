//! # Patternkit CLI
//!
//! Runnable front end for the pattern examples.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults + file + env).
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
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::{io::IsTerminal as _, process::ExitCode};

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
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
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version arrive here too and must exit 0.
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

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            eprintln!("Configuration error: {e:#}");
            return ExitCode::from(4);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);
    debug!(format = ?output.format(), color = output.supports_color(), "output ready");
    let verbose = cli.global.verbose > 0;
    let color = output.supports_color() && std::io::stderr().is_terminal();

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli.command, &config, &output) {
        Ok(()) => {
            info!("Patternkit completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(command: Commands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match command {
        Commands::Prototype(cmd) => commands::prototype::execute(cmd, config, output),
        Commands::Builder(args) => commands::builder::execute(args, output),
        Commands::Notify(args) => commands::notify::execute(args, output),
        Commands::Providers(args) => commands::providers::execute(args, output),
        Commands::DbConfig(args) => commands::db_config::execute(args, output),
        Commands::Checkout(args) => commands::checkout::execute(args, config, output),
        Commands::Config(cmd) => commands::config::execute(cmd, config, output),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    let msg = if color {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
