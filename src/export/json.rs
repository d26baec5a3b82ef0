use super::model::AssignmentExport;
use crate::errors::AppResult;
use std::path::Path;

/// Pretty-printed JSON array.
pub(crate) fn write_json(path: &Path, rows: &[AssignmentExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
