//! Implementation of the `promptpack build` command.
//!
//! Drives the full pipeline: discover YAML sources under `src/`, validate
//! and render each one, and write the two artifacts per source file.
//!
//! # Build Steps
//!
//! 1. Verify the source directory exists (fatal if not)
//! 2. Discover `src/*.yaml`; zero sources is a clean success with no
//!    output directories created
//! 3. Create `prompts/` and `commands/` (idempotent)
//! 4. Process each source sequentially: read, parse, render Markdown,
//!    render TOML, write both with post-write verification
//! 5. Map the aggregate outcome to the process exit status
//!
//! A failure at any step for one file is logged and counted; the loop
//! always continues to the next file. One bad source never aborts the
//! batch, and other files in the same run still produce artifacts.


use crate::error::{PackError, Result};
use crate::fs;
use crate::render::{CommandPrompt, MarkdownPrompt};
use crate::source;
use crate::ui;
use std::path::Path;

/// Directory of YAML source files, relative to the build root.
pub const SRC_DIR: &str = "src";

/// Output directory for Markdown artifacts.
pub const PROMPTS_DIR: &str = "prompts";

/// Output directory for TOML artifacts.
pub const COMMANDS_DIR: &str = "commands";

/// Aggregate outcome of one build run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    /// Source files that produced both artifacts.
    pub built: usize,
    /// Source files that failed at any step.
    pub failed: usize,
}

/// Execute the `promptpack build` command against the current directory.
pub fn cmd_build() -> Result<()> {
    let root = std::env::current_dir()
        .map_err(|e| PackError::Io(format!("failed to resolve current directory: {}", e)))?;

    let report = run_build(&root)?;

    if report.failed > 0 {
        return Err(PackError::BuildFailed(report.failed));
    }
    Ok(())
}

/// Run the build pipeline rooted at `root`.
///
/// Returns `Err` only for fatal pre-loop failures (missing source
/// directory, unreadable directory listing). Per-file failures are
/// reported through the returned [`BuildReport`]; the caller decides how
/// they map to an exit status.
pub fn run_build(root: &Path) -> Result<BuildReport> {
    ui::info("Building prompt files from src/*.yaml...");
    println!();

    let src_dir = root.join(SRC_DIR);
    let sources = source::list_source_files(&src_dir)?;

    if sources.is_empty() {
        ui::warn("No YAML files found in src/");
        return Ok(BuildReport::default());
    }

    // Output directories are created only after sources are known to exist.
    let prompts_dir = root.join(PROMPTS_DIR);
    let commands_dir = root.join(COMMANDS_DIR);
    fs::ensure_dir(&prompts_dir)?;
    fs::ensure_dir(&commands_dir)?;

    ui::info(&format!("Processing {} source file(s)...", sources.len()));
    println!();

    let mut report = BuildReport::default();
    for path in &sources {
        match process_source(path, &prompts_dir, &commands_dir) {
            Ok(()) => report.built += 1,
            Err(err) => {
                let file = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                ui::file_failed(&file, &err.to_string());
                println!();
                report.failed += 1;
            }
        }
    }

    if report.failed == 0 {
        ui::success("Done.");
    }

    Ok(report)
}

/// Process one source file: read, parse, render both artifacts, write both.
///
/// The Markdown path validates first, so a record missing `argumentHint`
/// fails here before any artifact is written for this file.
fn process_source(path: &Path, prompts_dir: &Path, commands_dir: &Path) -> Result<()> {
    let file = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PackError::Io(format!("invalid source file name: {}", path.display())))?;
    let stem = path
        .file_stem()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PackError::Io(format!("invalid source file name: {}", path.display())))?;

    ui::info(&format!("Reading: src/{}", file));

    let content = std::fs::read_to_string(path)
        .map_err(|e| PackError::Io(format!("failed to read '{}': {}", path.display(), e)))?;
    let mapping = source::parse_mapping(&content)?;

    // Render both artifacts before writing either, so a validation failure
    // in one format leaves no partial output for this file.
    let markdown = MarkdownPrompt::from_mapping(&mapping)?.render();
    let command = CommandPrompt::from_mapping(&mapping)?.render()?;

    let md_path = prompts_dir.join(format!("{}.md", stem));
    fs::write_verified(&md_path, &markdown)?;
    ui::artifact_ok(&format!("{}/{}.md", PROMPTS_DIR, stem));

    let toml_path = commands_dir.join(format!("{}.toml", stem));
    fs::write_verified(&toml_path, &command)?;
    ui::artifact_ok(&format!("{}/{}.toml", COMMANDS_DIR, stem));

    println!();
    Ok(())
}
