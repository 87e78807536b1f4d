//! CLI command implementations
//!
//! This module contains all command implementations for the daiku CLI.

pub mod create_env;
pub mod jsonfmt;
pub mod prettier;
pub mod setup_env;
