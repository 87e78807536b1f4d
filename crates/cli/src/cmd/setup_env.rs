//! Setup-env command implementation
//!
//! Render an application's `env.test` template into `.env` by substituting
//! `{{VAR}}` placeholders with values from the environment bindings snapshot.
//! Used by CI pipelines to stamp out per-app env files.

use clap::Args;
use owo_colors::OwoColorize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::command::Command;
use crate::common::RuntimeContext;
use crate::error::CommandError;
use daiku_envfile::substitute;

/// Template file name read from the app directory.
const TEMPLATE_NAME: &str = "env.test";

/// Output file name written to the app directory.
const OUTPUT_NAME: &str = ".env";

/// Setup-env command
#[derive(Debug, Args)]
pub struct SetupEnvCommand {
    /// Application directory containing env.test
    #[arg(value_name = "APP_DIR")]
    pub app_dir: PathBuf,
}

impl Command for SetupEnvCommand {
    type Output = ();

    fn execute(&self, context: &RuntimeContext) -> crate::error::Result<()> {
        let template_path = self.app_dir.join(TEMPLATE_NAME);
        let output_path = self.app_dir.join(OUTPUT_NAME);

        debug!(
            template = %template_path.display(),
            output = %output_path.display(),
            bindings = context.bindings.len(),
            "Rendering env template"
        );

        let content = fs::read_to_string(&template_path).map_err(|source| {
            CommandError::ReadFile {
                path: template_path,
                source,
            }
        })?;

        let rendered = substitute(&content, &context.bindings);

        fs::write(&output_path, rendered).map_err(|source| CommandError::WriteFile {
            path: output_path.clone(),
            source,
        })?;

        println!(
            "{} {} created for pipeline: {}",
            "✓".green(),
            OUTPUT_NAME,
            self.app_dir.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use daiku_envfile::Bindings;
    use tempfile::TempDir;

    #[test]
    fn test_execute_renders_with_injected_bindings() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("env.test"),
            "HOST={{ HOST }}\nPORT={{ PORT }}\n",
        )
        .unwrap();

        let cmd = SetupEnvCommand {
            app_dir: temp.path().to_path_buf(),
        };
        let context = RuntimeContext::new(Bindings::from([("HOST", "api.example.com")]));
        cmd.execute(&context).unwrap();

        // PORT is unbound and degrades to empty
        let env = fs::read_to_string(temp.path().join(".env")).unwrap();
        assert_eq!(env, "HOST=api.example.com\nPORT=\n");
    }

    #[test]
    fn test_execute_missing_template_fails() {
        let temp = TempDir::new().unwrap();

        let cmd = SetupEnvCommand {
            app_dir: temp.path().to_path_buf(),
        };
        let err = cmd.execute(&RuntimeContext::default()).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("Failed to read"));
        assert!(msg.contains("env.test"));
    }
}
