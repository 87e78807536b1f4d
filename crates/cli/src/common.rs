//! Common state shared across CLI commands

use daiku_envfile::Bindings;

/// Runtime context passed to every command
///
/// Holds the environment bindings snapshot taken once at the process edge.
/// Reading the environment exactly once keeps the core substitution logic
/// pure and lets tests inject bindings without mutating real process state.
#[derive(Debug, Clone, Default)]
pub struct RuntimeContext {
    /// Environment bindings for placeholder substitution
    pub bindings: Bindings,
}

impl RuntimeContext {
    /// Create a context with an explicit set of bindings.
    #[must_use]
    pub fn new(bindings: Bindings) -> Self {
        Self { bindings }
    }

    /// Create a context from a snapshot of the current process environment.
    #[must_use]
    pub fn from_process_env() -> Self {
        Self::new(Bindings::from_process_env())
    }
}
