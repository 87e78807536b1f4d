//! Create-env command implementation
//!
//! Generate a `.env` file from an env template by filtering out comments,
//! blank lines, and anything that is not a `KEY=VALUE` assignment.

use clap::Args;
use owo_colors::OwoColorize;
use std::path::PathBuf;
use tracing::debug;

use crate::command::Command;
use crate::common::RuntimeContext;
use daiku_envfile::{CopyReport, FilterOptions, copy_template};

/// Create-env command
#[derive(Debug, Args)]
pub struct CreateEnvCommand {
    /// Template file to read
    #[arg(long, env = "DAIKU_ENV_TEMPLATE", default_value = "env.template")]
    pub template: PathBuf,

    /// Output file to write
    #[arg(long, env = "DAIKU_ENV_OUTPUT", default_value = ".env")]
    pub output: PathBuf,

    /// Warn about dropped lines that are neither blank nor comments
    #[arg(long)]
    pub warn_dropped: bool,
}

impl Command for CreateEnvCommand {
    type Output = CopyReport;

    fn execute(&self, _context: &RuntimeContext) -> crate::error::Result<CopyReport> {
        debug!(
            template = %self.template.display(),
            output = %self.output.display(),
            "Copying env template"
        );

        let options = FilterOptions {
            warn_dropped: self.warn_dropped,
        };
        let report = copy_template(&self.template, &self.output, options)?;

        println!(
            "{} {} created from {} ({} line{} kept, {} dropped)",
            "✓".green(),
            self.output.display(),
            self.template.display(),
            report.kept,
            if report.kept == 1 { "" } else { "s" },
            report.dropped(),
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_execute_writes_filtered_env() {
        let temp = TempDir::new().unwrap();
        let template = temp.path().join("env.template");
        let output = temp.path().join(".env");

        fs::write(&template, "# header\nAPP_NAME=daiku\n\nnot an assignment\n").unwrap();

        let cmd = CreateEnvCommand {
            template: template.clone(),
            output: output.clone(),
            warn_dropped: false,
        };
        let report = cmd.execute(&RuntimeContext::default()).unwrap();

        assert_eq!(report.kept, 1);
        assert_eq!(fs::read_to_string(&output).unwrap(), "APP_NAME=daiku\n");
    }

    #[test]
    fn test_execute_missing_template_fails() {
        let temp = TempDir::new().unwrap();

        let cmd = CreateEnvCommand {
            template: temp.path().join("absent.template"),
            output: temp.path().join(".env"),
            warn_dropped: false,
        };
        let err = cmd.execute(&RuntimeContext::default()).unwrap_err();

        assert!(err.to_string().contains("absent.template"));
    }
}
