use super::model::{TimecardExport, export_to_record, get_headers};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Writes the rows as CSV, one record per day.
pub fn write_csv(path: &Path, rows: &[TimecardExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for r in rows {
        wtr.write_record(export_to_record(r))?;
    }

    wtr.flush()?;
    Ok(())
}
