//! Implementation of the `promptpack validate-toml` command.
//!
//! Post-build check that re-parses every generated `commands/*.toml`
//! artifact. Parse failures are accumulated rather than fail-fast, so one
//! corrupted artifact never hides problems in the others. Zero matching
//! files fails the run: the check is meant to run after a build, and an
//! empty match means the build never happened.

use crate::error::{PackError, Result};
use globset::Glob;
use std::path::{Path, PathBuf};

/// Glob pattern matching the TOML artifacts, relative to the root.
pub const TOML_GLOB: &str = "commands/*.toml";

/// Execute the `promptpack validate-toml` command against the current
/// directory.
pub fn cmd_validate_toml() -> Result<()> {
    let root = std::env::current_dir()
        .map_err(|e| PackError::Io(format!("failed to resolve current directory: {}", e)))?;

    run_validate_toml(&root)?;
    Ok(())
}

/// Validate every TOML artifact under `root`, returning the count of
/// successfully parsed files.
pub fn run_validate_toml(root: &Path) -> Result<usize> {
    let files = matching_artifacts(root)?;

    if files.is_empty() {
        return Err(PackError::NoTomlArtifacts);
    }

    let mut failures = 0;
    for path in &files {
        if let Err(message) = parse_artifact(path) {
            eprintln!("Error parsing {}:", path.display());
            eprintln!("{}", message);
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(PackError::TomlValidationFailed(failures));
    }

    println!("Validated {} TOML files", files.len());
    Ok(files.len())
}

/// Read and parse one artifact; unreadable files count as parse failures.
fn parse_artifact(path: &Path) -> std::result::Result<(), String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    content
        .parse::<toml::Table>()
        .map(|_| ())
        .map_err(|e| e.to_string())
}

/// Collect the files under `root` matching [`TOML_GLOB`].
///
/// A missing `commands/` directory simply yields zero matches.
fn matching_artifacts(root: &Path) -> Result<Vec<PathBuf>> {
    let matcher = Glob::new(TOML_GLOB)
        .map_err(|e| PackError::Pattern(e.to_string()))?
        .compile_matcher();

    let commands_dir = root.join("commands");
    let entries = match std::fs::read_dir(&commands_dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(Vec::new()),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            PackError::Io(format!(
                "failed to read directory entry in '{}': {}",
                commands_dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        let relative = Path::new("commands").join(entry.file_name());
        if path.is_file() && matcher.is_match(&relative) {
            files.push(path);
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = "description = \"d\"\nprompt = \"\"\"\nbody\n\n{{args}}\n\"\"\"\n";

    fn write_artifact(root: &Path, name: &str, content: &str) {
        let commands_dir = root.join("commands");
        std::fs::create_dir_all(&commands_dir).unwrap();
        std::fs::write(commands_dir.join(name), content).unwrap();
    }

    #[test]
    fn zero_matches_is_an_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = run_validate_toml(temp_dir.path());

        assert!(matches!(result, Err(PackError::NoTomlArtifacts)));
    }

    #[test]
    fn empty_commands_directory_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::create_dir(temp_dir.path().join("commands")).unwrap();

        let result = run_validate_toml(temp_dir.path());

        assert!(matches!(result, Err(PackError::NoTomlArtifacts)));
    }

    #[test]
    fn all_valid_artifacts_are_counted() {
        let temp_dir = TempDir::new().unwrap();
        write_artifact(temp_dir.path(), "a.toml", VALID);
        write_artifact(temp_dir.path(), "b.toml", VALID);

        let count = run_validate_toml(temp_dir.path()).unwrap();

        assert_eq!(count, 2);
    }

    #[test]
    fn corrupted_artifact_among_valid_ones_is_accumulated() {
        let temp_dir = TempDir::new().unwrap();
        write_artifact(temp_dir.path(), "good.toml", VALID);
        write_artifact(temp_dir.path(), "bad.toml", "prompt = \"\"\"unterminated\n");
        write_artifact(temp_dir.path(), "fine.toml", VALID);

        let result = run_validate_toml(temp_dir.path());

        assert!(matches!(result, Err(PackError::TomlValidationFailed(1))));
    }

    #[test]
    fn non_toml_files_are_not_matched() {
        let temp_dir = TempDir::new().unwrap();
        write_artifact(temp_dir.path(), "a.toml", VALID);
        write_artifact(temp_dir.path(), "README.md", "not toml at all [");

        let count = run_validate_toml(temp_dir.path()).unwrap();

        assert_eq!(count, 1);
    }
}
