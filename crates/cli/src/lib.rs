//! Daiku CLI library
//!
//! This library contains all the CLI logic for daiku, making it reusable for
//! testing and integration with other tools.

pub mod cmd;
pub mod command;
pub mod common;
pub mod error;
pub mod logging;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use command::Command;
use common::RuntimeContext;

/// Daiku - developer workflow utilities
#[derive(Parser)]
#[command(name = "daiku")]
#[command(about = "Small utilities for developer workflow automation")]
#[command(version)]
#[command(long_about = "Small utilities for developer workflow automation

One binary, four tools:
  • create-env  — generate .env from an env template
  • setup-env   — render {{VAR}} placeholders for a pipeline app
  • jsonfmt     — pretty-print a JSON file
  • prettier    — scaffold .prettierrc and install prettier")]
pub struct Cli {
    /// Enable verbose output (shows DEBUG level logs)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to a file (useful for debugging)
    #[arg(long, env = "DAIKU_LOG_FILE", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for daiku CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a .env file from an env template
    #[command(name = "create-env")]
    CreateEnv(cmd::create_env::CreateEnvCommand),

    /// Render an app's env.test into .env using the process environment
    #[command(name = "setup-env")]
    SetupEnv(cmd::setup_env::SetupEnvCommand),

    /// Pretty-print a JSON file to stdout
    Jsonfmt(cmd::jsonfmt::JsonfmtCommand),

    /// Scaffold .prettierrc and install prettier
    Prettier(cmd::prettier::PrettierCommand),
}

/// Main entry point for the CLI logic
///
/// # Errors
///
/// Returns an error if:
/// - Logging initialization fails
/// - Command execution fails
pub fn run(cli: Cli) -> Result<()> {
    // Initialize logging based on verbosity
    logging::init(cli.verbose, cli.log_file.as_deref())?;

    // Snapshot the process environment once at the edge; commands and the
    // substitution core only ever see this explicit copy.
    let context = RuntimeContext::from_process_env();

    match cli.command {
        Commands::CreateEnv(create_cmd) => {
            create_cmd.execute(&context)?;
        }
        Commands::SetupEnv(setup_cmd) => {
            setup_cmd.execute(&context)?;
        }
        Commands::Jsonfmt(jsonfmt_cmd) => {
            jsonfmt_cmd.execute(&context)?;
        }
        Commands::Prettier(prettier_cmd) => {
            prettier_cmd.execute(&context)?;
        }
    }

    Ok(())
}
