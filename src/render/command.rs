//! TOML command artifact renderer.
//!
//! Produces a two-key TOML document: `description` as a quoted string and
//! `prompt` as a multiline string ending in a blank line and the literal
//! `{{args}}` placeholder, which the consuming tool substitutes itself.
//!
//! `description` is JSON-string-encoded, which doubles as valid TOML
//! basic-string encoding for quotes, backslashes, and control characters.
//! The prompt body is embedded verbatim between `"""` delimiters; an
//! embedded `"""` sequence or a stray backslash escape would corrupt the
//! artifact. That limitation is inherited from the format and caught by
//! the validate-toml pass rather than handled here.

use super::{require_present, require_string};
use crate::error::{PackError, Result};
use serde_yaml::Mapping;

/// A record validated for TOML rendering.
///
/// Unlike [`super::MarkdownPrompt`], this view does not require
/// `argumentHint`; the asymmetry between the two artifact formats is
/// intentional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandPrompt {
    pub description: String,
    pub prompt: String,
}

impl CommandPrompt {
    /// Validate a source mapping for TOML rendering.
    ///
    /// Applies the presence and typing rules for `description` and
    /// `prompt` only, in the same order as the Markdown path.
    pub fn from_mapping(mapping: &Mapping) -> Result<Self> {
        let description = require_present(mapping, "description")?;
        let prompt = require_present(mapping, "prompt")?;

        let description = require_string(description, "description")?;
        let prompt = require_string(prompt, "prompt")?;

        Ok(Self {
            description: description.to_string(),
            prompt: prompt.to_string(),
        })
    }

    /// Render the TOML document. The prompt body is not trimmed.
    pub fn render(&self) -> Result<String> {
        let description = serde_json::to_string(&self.description)
            .map_err(|_| PackError::Encode("description"))?;

        Ok(format!(
            "description = {}\nprompt = \"\"\"\n{}\n\n{{{{args}}}}\n\"\"\"\n",
            description, self.prompt
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(yaml: &str) -> Mapping {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn renders_two_key_document() {
        let m = mapping("description: Test\nprompt: Do the thing\n");
        let prompt = CommandPrompt::from_mapping(&m).unwrap();

        assert_eq!(
            prompt.render().unwrap(),
            "description = \"Test\"\n\
             prompt = \"\"\"\n\
             Do the thing\n\
             \n\
             {{args}}\n\
             \"\"\"\n"
        );
    }

    #[test]
    fn argument_hint_is_not_required() {
        let m = mapping("description: d\nprompt: p\n");
        assert!(CommandPrompt::from_mapping(&m).is_ok());
    }

    #[test]
    fn missing_prompt_is_rejected() {
        let m = mapping("description: d\n");
        let result = CommandPrompt::from_mapping(&m);
        assert!(matches!(result, Err(PackError::MissingField("prompt"))));
    }

    #[test]
    fn non_string_prompt_is_a_type_error() {
        let m = mapping("description: d\nprompt: 3\n");
        let result = CommandPrompt::from_mapping(&m);
        assert!(matches!(result, Err(PackError::NotAString("prompt"))));
    }

    #[test]
    fn description_special_characters_are_escaped() {
        let m = mapping("description: 'He said \"hi\" with a \\ backslash'\nprompt: p\n");
        let prompt = CommandPrompt::from_mapping(&m).unwrap();

        let rendered = prompt.render().unwrap();
        assert!(
            rendered.starts_with("description = \"He said \\\"hi\\\" with a \\\\ backslash\"\n")
        );
    }

    #[test]
    fn rendered_artifact_round_trips_through_a_toml_parser() {
        let m = mapping("description: 'A \"quoted\" summary'\nprompt: \"line one\\nline two\"\n");
        let prompt = CommandPrompt::from_mapping(&m).unwrap();

        let rendered = prompt.render().unwrap();
        let table: toml::Table = rendered.parse().unwrap();

        assert_eq!(
            table["description"].as_str().unwrap(),
            "A \"quoted\" summary"
        );
        assert_eq!(
            table["prompt"].as_str().unwrap(),
            "line one\nline two\n\n{{args}}\n"
        );
    }

    #[test]
    fn prompt_body_is_not_trimmed() {
        let m = mapping("description: d\nprompt: \"  padded  \"\n");
        let prompt = CommandPrompt::from_mapping(&m).unwrap();

        let rendered = prompt.render().unwrap();
        assert!(rendered.contains("\"\"\"\n  padded  \n\n{{args}}\n\"\"\"\n"));
    }
}
