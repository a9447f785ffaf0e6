use super::day_row::DayRow;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One month of day rows, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    /// "YYYY-MM"
    pub month: String,
    pub rows: Vec<DayRow>,
}

impl Calendar {
    /// Materializes one row per day of the month. `holidays` lists day numbers
    /// flagged as public holidays.
    pub fn for_month(
        year: i32,
        month: u32,
        holidays: &[u32],
        contract_selector: bool,
    ) -> AppResult<Self> {
        let days = date::all_days_of_month(year, month)
            .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))?;

        let rows = days
            .into_iter()
            .map(|d| {
                let row = DayRow::new(d.day(), date::weekday_label(d), holidays.contains(&d.day()));
                if contract_selector {
                    row.with_contract_selector()
                } else {
                    row
                }
            })
            .collect();

        Ok(Self {
            month: format!("{year}-{month:02}"),
            rows,
        })
    }

    pub fn row(&self, day: u32) -> Option<&DayRow> {
        self.rows.iter().find(|r| r.day == day)
    }

    pub fn row_mut(&mut self, day: u32) -> Option<&mut DayRow> {
        self.rows.iter_mut().find(|r| r.day == day)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Calendar(format!(
                "calendar file {} not found (create one with `rtimecard new YYYY-MM`)",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let calendar: Calendar = serde_json::from_str(&content)?;
        calendar.check_unique_days()?;
        Ok(calendar)
    }

    /// Day numbers identify rows; a file listing one twice is rejected.
    fn check_unique_days(&self) -> AppResult<()> {
        let mut seen = HashSet::new();
        match self.rows.iter().find(|r| !seen.insert(r.day)) {
            Some(dup) => Err(AppError::Calendar(format!(
                "day {} appears more than once in {}",
                dup.day, self.month
            ))),
            None => Ok(()),
        }
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
