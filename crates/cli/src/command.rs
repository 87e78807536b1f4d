//! Command trait for daiku CLI
//!
//! Defines the `Command` trait that all daiku commands implement, giving a
//! uniform interface for command execution and making commands testable
//! without going through argument parsing.

use crate::common::RuntimeContext;
use crate::error::Result;

/// Trait for all daiku commands
///
/// The `execute` method receives a [`RuntimeContext`] holding shared state,
/// most importantly the environment bindings snapshot taken once at startup.
/// Commands never read `std::env` themselves.
///
/// Commands can specify their return type via the `Output` associated type.
/// Most commands return `()`, but some may return values (e.g. create-env
/// returns the copy report).
pub trait Command {
    /// The type returned by this command
    type Output;

    /// Execute the command with the given runtime context
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` if the command fails to execute. Error
    /// messages should be descriptive enough for the user to understand what
    /// went wrong.
    fn execute(&self, context: &RuntimeContext) -> Result<Self::Output>;
}
