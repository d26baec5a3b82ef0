// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::load_assignments;
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::AssignmentExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::Assignment;
use crate::ui::messages::warning;
use crate::utils::date::period_bounds;
use crate::utils::path::{expand_tilde, is_absolute};
use chrono::{NaiveDate, TimeZone};

pub struct ExportLogic;

impl ExportLogic {
    /// Write the assignments to `file` (absolute, `~/` allowed).
    ///
    /// `range` accepts `all`, YYYY, YYYY-MM, YYYY-MM-DD or `A:B`,
    /// matched against the local due day.
    ///
    /// Returns the number of exported assignments.
    pub fn export<Tz: TimeZone>(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
        tz: &Tz,
    ) -> AppResult<usize>
    where
        Tz::Offset: std::fmt::Display,
    {
        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let path = expand_tilde(file);

        let bounds = match range {
            Some(r) => period_bounds(r)?,
            None => None,
        };

        let all = load_assignments(pool)?;
        let rows = select_rows(&all, bounds, tz);

        if rows.is_empty() {
            warning("No assignments found for selected range.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => write_csv(&path, &rows)?,
            ExportFormat::Json => write_json(&path, &rows)?,
        }

        notify_export_success(format, rows.len(), &path);
        Ok(rows.len())
    }
}

/// Flatten the assignments whose local due day is inside `bounds`, ordered by due instant.
pub(crate) fn select_rows<Tz: TimeZone>(
    all: &[Assignment],
    bounds: Option<(NaiveDate, NaiveDate)>,
    tz: &Tz,
) -> Vec<AssignmentExport>
where
    Tz::Offset: std::fmt::Display,
{
    let mut selected: Vec<&Assignment> = all
        .iter()
        .filter(|a| match bounds {
            Some((start, end)) => {
                let d = a.due_day(tz);
                d >= start && d <= end
            }
            None => true,
        })
        .collect();

    selected.sort_by_key(|a| a.due);

    selected
        .into_iter()
        .map(|a| AssignmentExport::from_assignment(a, tz))
        .collect()
}
