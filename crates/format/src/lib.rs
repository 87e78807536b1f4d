//! # Daiku Format
//!
//! Formatting collaborators for daiku: a JSON pretty-printer, a prettier
//! configuration scaffold, and the package-manager invocation that installs
//! prettier.

pub mod json;
pub mod prettier;

pub use json::format_json;
pub use prettier::{PackageManager, PrettierConfig};

use std::path::PathBuf;
use thiserror::Error;

/// Result type for formatting operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors for formatting and scaffolding operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not syntactically valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Serializing a configuration object failed
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A file could not be written
    #[error("Failed to write {path}")]
    WriteFile {
        /// Path to the file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The package-manager selector is not recognized
    #[error("Invalid package manager '{0}'. Use npm or pnpm.")]
    UnknownPackageManager(String),

    /// The package-manager binary is not on PATH
    #[error("{name} not found on PATH")]
    ToolNotFound {
        /// Binary name that was looked up
        name: &'static str,
        /// The underlying lookup error
        #[source]
        source: which::Error,
    },

    /// The package-manager subprocess could not be spawned
    #[error("Failed to run {name}")]
    Spawn {
        /// Binary name that was invoked
        name: &'static str,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The package-manager subprocess exited non-zero
    #[error("{name} exited with status {code:?}")]
    InstallFailed {
        /// Binary name that was invoked
        name: &'static str,
        /// Exit code, if any
        code: Option<i32>,
    },
}
