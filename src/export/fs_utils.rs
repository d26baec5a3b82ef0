// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info};
use std::path::Path;

/// Decide whether the export may write `path`.
///
/// A missing file or `--force` pass straight through; an existing file
/// needs an explicit "yes" on stdin.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    let question = format!("'{}' already exists. Replace it?", path.display());
    if !confirm(question) {
        return Err(AppError::Export(format!(
            "{} left untouched, export cancelled",
            path.display()
        )));
    }

    info("Replacing existing export file.");
    Ok(())
}
