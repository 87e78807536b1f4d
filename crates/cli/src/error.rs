//! Error types for CLI commands
//!
//! Structured error types using thiserror, wrapping the library crate errors
//! plus the I/O failures the commands themselves can hit.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during command execution
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CommandError {
    /// Env template filtering error
    #[error("Env template error: {0}")]
    Envfile(#[from] daiku_envfile::Error),

    /// Formatting or scaffolding error
    #[error(transparent)]
    Format(#[from] daiku_format::Error),

    /// A file could not be read
    #[error("Failed to read {path}")]
    ReadFile {
        /// Path to the file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A file could not be written
    #[error("Failed to write {path}")]
    WriteFile {
        /// Path to the file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for command operations
pub type Result<T> = std::result::Result<T, CommandError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use std::io;

    #[test]
    fn test_envfile_error_conversion() {
        let err = daiku_envfile::Error::OpenTemplate {
            path: PathBuf::from("/tmp/env.template"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        let error: CommandError = err.into();

        let error_msg = error.to_string();
        assert!(error_msg.contains("Env template error"));
        assert!(error_msg.contains("env.template"));
    }

    #[test]
    fn test_format_error_is_transparent() {
        let err = daiku_format::Error::UnknownPackageManager("yarn".to_string());
        let error: CommandError = err.into();

        // Transparent: the library message surfaces unchanged
        assert_eq!(
            error.to_string(),
            "Invalid package manager 'yarn'. Use npm or pnpm."
        );
    }

    #[test]
    fn test_read_file_error() {
        let error = CommandError::ReadFile {
            path: PathBuf::from("/missing/data.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };

        let error_msg = error.to_string();
        assert!(error_msg.contains("Failed to read"));
        assert!(error_msg.contains("data.json"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error: CommandError = io_error.into();

        assert!(error.to_string().contains("IO error"));
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_err = anyhow::anyhow!("something went wrong");
        let error: CommandError = anyhow_err.into();

        assert!(error.to_string().contains("something went wrong"));
    }
}
