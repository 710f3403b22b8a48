//! Filesystem helpers for the build pipeline.

use crate::error::{PackError, Result};
use crate::ui;
use std::path::Path;

/// Create a directory (and parents) if it does not already exist.
///
/// Idempotent; logs only when the directory is actually created.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        ui::info(&format!("Creating directory: {}", dir.display()));
        std::fs::create_dir_all(dir).map_err(|e| {
            PackError::Io(format!(
                "failed to create directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }
    Ok(())
}

/// Write an artifact and verify it landed on disk.
///
/// The existence check after the write mirrors the build contract: a write
/// that cannot be observed is reported as `WriteVerificationFailed` and
/// handled like any other per-file error.
pub fn write_verified(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .map_err(|e| PackError::Io(format!("failed to write '{}': {}", path.display(), e)))?;

    if !path.exists() {
        return Err(PackError::WriteVerificationFailed(path.to_path_buf()));
    }

    Ok(())
}
