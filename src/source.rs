//! Source file discovery and YAML parsing.
//!
//! Sources are single-document YAML mappings with a `.yaml` extension.
//! Discovery preserves the filesystem's default directory order; an empty
//! source directory is a clean no-op for the caller, not an error.

use crate::error::{PackError, Result};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

/// Extension recognized for source files.
pub const SOURCE_EXTENSION: &str = "yaml";

/// List the YAML source files in `src_dir`.
///
/// Fails with `DirectoryNotFound` if the directory does not exist. Files
/// with any other extension (including `.yml`) are ignored.
pub fn list_source_files(src_dir: &Path) -> Result<Vec<PathBuf>> {
    if !src_dir.is_dir() {
        return Err(PackError::DirectoryNotFound(src_dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(src_dir).map_err(|e| {
        PackError::Io(format!(
            "failed to read directory '{}': {}",
            src_dir.display(),
            e
        ))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            PackError::Io(format!(
                "failed to read directory entry in '{}': {}",
                src_dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SOURCE_EXTENSION) {
            files.push(path);
        }
    }

    Ok(files)
}

/// Parse source content as a single YAML mapping.
///
/// Anything that is valid YAML but not a mapping (scalars, sequences,
/// empty/null documents) is rejected with `NotAMapping`.
pub fn parse_mapping(content: &str) -> Result<Mapping> {
    let value: Value =
        serde_yaml::from_str(content).map_err(|e| PackError::Yaml(e.to_string()))?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(PackError::NotAMapping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_directory_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let src_dir = temp_dir.path().join("src");

        let result = list_source_files(&src_dir);

        assert!(matches!(result, Err(PackError::DirectoryNotFound(_))));
    }

    #[test]
    fn empty_directory_yields_no_files() {
        let temp_dir = TempDir::new().unwrap();

        let files = list_source_files(temp_dir.path()).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn only_yaml_extension_is_listed() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.yaml"), "description: a\n").unwrap();
        std::fs::write(temp_dir.path().join("b.yml"), "description: b\n").unwrap();
        std::fs::write(temp_dir.path().join("c.txt"), "not yaml\n").unwrap();
        std::fs::create_dir(temp_dir.path().join("nested.yaml")).unwrap();

        let files = list_source_files(temp_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "a.yaml");
    }

    #[test]
    fn parse_mapping_accepts_a_mapping() {
        let mapping = parse_mapping("description: Test\nprompt: Do the thing\n").unwrap();

        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn parse_mapping_rejects_invalid_yaml() {
        let result = parse_mapping("description: [unclosed");

        assert!(matches!(result, Err(PackError::Yaml(_))));
    }

    #[test]
    fn parse_mapping_rejects_non_mappings() {
        assert!(matches!(
            parse_mapping("- one\n- two\n"),
            Err(PackError::NotAMapping)
        ));
        assert!(matches!(
            parse_mapping("just a scalar"),
            Err(PackError::NotAMapping)
        ));
        // Empty input decodes to null, which is not a mapping either.
        assert!(parse_mapping("").is_err());
    }
}
