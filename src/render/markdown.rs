//! Markdown artifact renderer.
//!
//! Produces a Markdown document with a YAML frontmatter block
//! (`description` and `argument-hint` keys), the trimmed prompt body, and
//! a trailing literal `$ARGUMENTS` line. The placeholder is substituted by
//! the consuming tool at its own run time; this renderer emits it verbatim.
//!
//! Frontmatter values are interpolated verbatim, without escaping. Values
//! are assumed to be single-line plain text; a value containing `: ` or a
//! leading YAML special character would corrupt the frontmatter.

use super::{require_present, require_string};
use crate::error::Result;
use serde_yaml::Mapping;

/// A record validated for Markdown rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownPrompt {
    pub description: String,
    pub argument_hint: String,
    pub prompt: String,
}

impl MarkdownPrompt {
    /// Validate a source mapping for Markdown rendering.
    ///
    /// Rule order is fixed, first failure wins: presence of `description`,
    /// `prompt`, `argumentHint`, then string typing of each in the same
    /// order.
    pub fn from_mapping(mapping: &Mapping) -> Result<Self> {
        let description = require_present(mapping, "description")?;
        let prompt = require_present(mapping, "prompt")?;
        let argument_hint = require_present(mapping, "argumentHint")?;

        let description = require_string(description, "description")?;
        let prompt = require_string(prompt, "prompt")?;
        let argument_hint = require_string(argument_hint, "argumentHint")?;

        Ok(Self {
            description: description.to_string(),
            argument_hint: argument_hint.to_string(),
            prompt: prompt.to_string(),
        })
    }

    /// Render the Markdown document.
    ///
    /// The prompt body is trimmed to avoid consecutive blank lines around
    /// the placeholder, which would trip the MD012 lint rule.
    pub fn render(&self) -> String {
        format!(
            "---\ndescription: {}\nargument-hint: {}\n---\n\n{}\n\n$ARGUMENTS\n",
            self.description,
            self.argument_hint,
            self.prompt.trim()
        )
    }
}
