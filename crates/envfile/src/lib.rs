//! # Daiku Envfile
//!
//! Env template handling for daiku: filtering `KEY=VALUE` template lines
//! into a `.env` file and substituting `{{VAR}}` placeholders from a set of
//! bindings.
//!
//! The two pieces are independent. The line filter is used by
//! `daiku create-env`, the substituter by `daiku setup-env`; neither calls
//! the other.

pub mod filter;
pub mod subst;

pub use filter::{CopyReport, FilterOptions, copy_template, keep_line};
pub use subst::{Bindings, substitute};

use std::path::PathBuf;
use thiserror::Error;

/// Result type for envfile operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors for env template file operations
///
/// The substituter has no error path by design; only the file-backed line
/// filter can fail, and every variant carries the offending path plus the
/// underlying I/O error as source.
#[derive(Error, Debug)]
pub enum Error {
    /// Template file could not be opened for reading
    #[error("Failed to open template {path}")]
    OpenTemplate {
        /// Path to the template file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A line could not be read from the template
    #[error("Failed to read template {path}")]
    ReadTemplate {
        /// Path to the template file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Output file could not be created
    #[error("Failed to create output file {path}")]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A kept line could not be written to the output file
    #[error("Failed to write to {path}")]
    WriteOutput {
        /// Path to the output file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
