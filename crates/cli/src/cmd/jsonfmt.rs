//! Jsonfmt command implementation
//!
//! Pretty-print a JSON file to stdout with two-space indentation.

use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::CommandError;
use daiku_format::format_json;

/// Jsonfmt command
#[derive(Debug, Args)]
pub struct JsonfmtCommand {
    /// JSON file to format
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

impl JsonfmtCommand {
    /// Format the file's contents, returning the pretty-printed bytes.
    fn format(&self) -> crate::error::Result<Vec<u8>> {
        let content = std::fs::read(&self.file).map_err(|source| CommandError::ReadFile {
            path: self.file.clone(),
            source,
        })?;

        Ok(format_json(&content)?)
    }
}

impl Command for JsonfmtCommand {
    type Output = ();

    fn execute(&self, _context: &RuntimeContext) -> crate::error::Result<()> {
        let formatted = self.format()?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&formatted)?;
        stdout.write_all(b"\n")?;
        Ok(())
    }
}
