//! Artifact renderers.
//!
//! Each renderer validates the raw source mapping independently and then
//! renders a fixed template. Validation applies a fixed rule order with
//! first-failure-wins semantics: all presence checks run before any type
//! check. The Markdown renderer requires `argumentHint`; the TOML renderer
//! deliberately does not, so a record without a hint still produces a valid
//! TOML artifact when rendered on its own.

pub mod command;
pub mod markdown;

pub use command::CommandPrompt;
pub use markdown::MarkdownPrompt;

use crate::error::{PackError, Result};
use serde_yaml::{Mapping, Value};

/// Look up a required field, rejecting absent, null, and empty-string values.
fn require_present<'a>(mapping: &'a Mapping, name: &'static str) -> Result<&'a Value> {
    let value = mapping.get(name).ok_or(PackError::MissingField(name))?;
    match value {
        Value::Null => Err(PackError::MissingField(name)),
        Value::String(s) if s.is_empty() => Err(PackError::MissingField(name)),
        _ => Ok(value),
    }
}

/// Require a previously-located field value to be a string.
fn require_string<'a>(value: &'a Value, name: &'static str) -> Result<&'a str> {
    value.as_str().ok_or(PackError::NotAString(name))
}
