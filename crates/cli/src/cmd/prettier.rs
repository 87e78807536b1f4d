//! Prettier command implementation
//!
//! Scaffold a `.prettierrc` in the current directory and install prettier as
//! a dev dependency through the selected package manager. The package
//! manager's output streams are passed through to the terminal.

use clap::Args;
use owo_colors::OwoColorize;
use std::path::Path;
use tracing::debug;

use crate::command::Command;
use crate::common::RuntimeContext;
use daiku_format::{PackageManager, PrettierConfig};

/// Prettier command
#[derive(Debug, Args)]
pub struct PrettierCommand {
    /// Package manager to use (npm or pnpm)
    #[arg(long, default_value = "npm")]
    pub pkg: String,

    /// Write .prettierrc without running the package manager
    #[arg(long)]
    pub skip_install: bool,
}

impl PrettierCommand {
    /// Write the config file into `dir`. Split out so tests can point it at
    /// a temp directory instead of the process working directory.
    fn write_config(&self, dir: &Path) -> crate::error::Result<()> {
        println!("Generating .prettierrc...");
        let path = PrettierConfig::default().write_config(dir)?;
        debug!(path = %path.display(), "Prettier config written");
        Ok(())
    }
}

impl Command for PrettierCommand {
    type Output = ();

    fn execute(&self, _context: &RuntimeContext) -> crate::error::Result<()> {
        // Validate the selector before touching the filesystem
        let manager: PackageManager = self.pkg.parse()?;

        self.write_config(Path::new("."))?;

        if self.skip_install {
            println!("{} Skipping prettier installation", "•".yellow());
            return Ok(());
        }

        println!("Installing prettier using {manager}...");
        manager.install_prettier()?;

        println!("{} Prettier installed successfully", "✓".green());
        Ok(())
    }
}
