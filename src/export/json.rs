use super::model::TimecardExport;
use crate::errors::AppResult;
use std::path::Path;

/// Writes the rows as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[TimecardExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
