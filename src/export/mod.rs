// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod logic;
mod model;

pub use logic::ExportLogic;
pub use model::AssignmentExport;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(format: ExportFormat, count: usize, path: &Path) {
    success(format!(
        "{} export completed: {} ({} assignments)",
        format.label(),
        path.display(),
        count
    ));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}
