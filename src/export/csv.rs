use super::model::{AssignmentExport, export_to_row, get_headers};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Header row followed by one line per assignment.
pub(crate) fn write_csv(path: &Path, rows: &[AssignmentExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for r in rows {
        wtr.write_record(export_to_row(r))?;
    }

    wtr.flush()?;
    Ok(())
}
