use super::csv::write_csv;
use super::fs_utils::ensure_writable;
use super::json::write_json;
use super::model::TimecardExport;
use super::{ExportFormat, notify_export_success};
use crate::core::Confirm;
use crate::errors::{AppError, AppResult};
use crate::models::Calendar;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    pub fn rows(calendar: &Calendar) -> Vec<TimecardExport> {
        calendar
            .rows
            .iter()
            .map(|r| TimecardExport::from_row(&calendar.month, r))
            .collect()
    }

    /// Exports every row of the calendar to `path`. An existing file is
    /// replaced only with `force` or when `confirm` agrees.
    pub fn export(
        calendar: &Calendar,
        format: ExportFormat,
        path: &Path,
        force: bool,
        confirm: &mut dyn Confirm,
    ) -> AppResult<()> {
        if path.is_dir() {
            return Err(AppError::Export(format!(
                "output path is a directory: {}",
                path.display()
            )));
        }

        ensure_writable(path, force, confirm)?;

        let rows = Self::rows(calendar);
        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        notify_export_success(&format, rows.len(), path);
        Ok(())
    }
}
