//! CLI argument parsing for promptpack.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Promptpack: builds Markdown and TOML prompt artifacts from YAML sources.
///
/// Prompt definitions live as single-document YAML mappings under `src/`.
/// Each source file produces two artifacts named after its base name:
/// - `prompts/<name>.md` — Markdown with YAML frontmatter and a literal
///   `$ARGUMENTS` placeholder
/// - `commands/<name>.toml` — TOML with a literal `{{args}}` placeholder
#[derive(Parser, Debug)]
#[command(name = "promptpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptpack.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build prompt artifacts from src/*.yaml.
    ///
    /// Reads every .yaml file under src/, validates the required fields,
    /// and writes prompts/<name>.md and commands/<name>.toml. A bad source
    /// file is reported and skipped; the rest of the batch still builds.
    Build,

    /// Re-parse generated commands/*.toml artifacts.
    ///
    /// Fails if no artifacts match, or if any artifact fails to parse.
    /// Intended as a post-build check.
    #[command(name = "validate-toml")]
    ValidateToml,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
