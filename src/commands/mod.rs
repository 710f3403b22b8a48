//! Command implementations for promptpack.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Both commands operate on fixed directories relative to
//! the current working directory; the implementations take an explicit root
//! path so tests can run against temporary directories.

mod build;
mod validate_toml;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Build => build::cmd_build(),
        Command::ValidateToml => validate_toml::cmd_validate_toml(),
    }
}
