//! Error types for the promptpack CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. Per-file errors (validation, write verification, YAML parse)
//! are caught at the file-processing boundary in the build command and
//! never abort the batch; only `DirectoryNotFound` and the terminal
//! aggregate variants surface through `main`.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for promptpack operations.
#[derive(Error, Debug)]
pub enum PackError {
    /// Source directory does not exist. Fatal, checked before the per-file loop.
    #[error("source directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// A required field is absent, null, or an empty string.
    #[error("{0} field is required")]
    MissingField(&'static str),

    /// A required field is present but not a string.
    #[error("{0} must be a string")]
    NotAString(&'static str),

    /// Source content is not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(String),

    /// Source content parsed but is not a top-level mapping.
    #[error("source is not a YAML mapping")]
    NotAMapping,

    /// Filesystem operation failed.
    #[error("{0}")]
    Io(String),

    /// JSON encoding of a field value failed.
    #[error("failed to encode {0}")]
    Encode(&'static str),

    /// An artifact was written but could not be found afterwards.
    #[error("failed to write {}", .0.display())]
    WriteVerificationFailed(PathBuf),

    /// A glob pattern failed to compile.
    #[error("invalid glob pattern: {0}")]
    Pattern(String),

    /// No TOML artifacts matched the validator's glob.
    #[error("no commands/*.toml files found")]
    NoTomlArtifacts,

    /// One or more TOML artifacts failed to re-parse.
    #[error("failed to validate {0} TOML file(s)")]
    TomlValidationFailed(usize),

    /// One or more source files failed during the build loop.
    #[error("build completed with {0} error(s)")]
    BuildFailed(usize),
}

impl PackError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Every error maps to the single failure code; the method exists so
    /// `main` stays decoupled from the taxonomy.
    pub fn exit_code(&self) -> i32 {
        exit_codes::FAILURE
    }
}

/// Result type alias for promptpack operations.
pub type Result<T> = std::result::Result<T, PackError>;
