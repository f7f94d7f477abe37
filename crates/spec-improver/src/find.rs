//! Finding the project root and its checklist

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::PROJECT_DIR;

/// Checklist locations relative to the project root, in lookup order
const CHECKLIST_LOCATIONS: &[&str] = &[".spec-improver/checklist.yaml", "checklist.yaml"];

/// Find the project root by looking for .spec-improver or .git
pub fn find_project_root() -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(find_root_from(&cwd))
}

/// Walk up from `start`; falls back to `start` itself
pub fn find_root_from(start: &Path) -> PathBuf {
    let mut dir = start;

    loop {
        if dir.join(PROJECT_DIR).exists() || dir.join(".git").exists() {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => break,
        }
    }

    start.to_path_buf()
}

/// Find the project's default checklist file
pub fn find_checklist(project_root: &Path) -> Option<PathBuf> {
    CHECKLIST_LOCATIONS
        .iter()
        .map(|location| project_root.join(location))
        .find(|path| path.is_file())
}
