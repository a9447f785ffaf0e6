use crate::core::calculator::work_minutes;
use crate::models::DayRow;
use crate::utils::time::format_time;
use serde::Serialize;

/// Flat view of a day row for export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TimecardExport {
    pub date: String,
    pub weekday: String,
    pub holiday: bool,
    pub work_type: String,
    pub work_type_label: String,
    pub start_time: String,
    pub start_next_day: bool,
    pub end_time: String,
    pub end_next_day: bool,
    pub break_minutes: u32,
    pub paid_leave: u8,
    pub contract: String,
    pub work_minutes: i64,
}

impl TimecardExport {
    pub fn from_row(month: &str, row: &DayRow) -> Self {
        Self {
            date: format!("{month}-{:02}", row.day),
            weekday: row.weekday_label.clone(),
            holiday: row.is_holiday,
            work_type: row.work_type.code().to_string(),
            work_type_label: row.work_type.label().to_string(),
            start_time: format_time(row.start_time.value),
            start_next_day: row.start_next_day,
            end_time: format_time(row.end_time.value),
            end_next_day: row.end_next_day,
            break_minutes: row.break_minutes.value,
            paid_leave: row.paid_leave.value,
            contract: row
                .contract
                .as_ref()
                .and_then(|c| c.value.clone())
                .unwrap_or_default(),
            work_minutes: work_minutes(row),
        }
    }
}

/// Column headers, in field order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "weekday",
        "holiday",
        "work_type",
        "work_type_label",
        "start_time",
        "start_next_day",
        "end_time",
        "end_next_day",
        "break_minutes",
        "paid_leave",
        "contract",
        "work_minutes",
    ]
}

pub(crate) fn export_to_record(e: &TimecardExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.weekday.clone(),
        e.holiday.to_string(),
        e.work_type.clone(),
        e.work_type_label.clone(),
        e.start_time.clone(),
        e.start_next_day.to_string(),
        e.end_time.clone(),
        e.end_next_day.to_string(),
        e.break_minutes.to_string(),
        e.paid_leave.to_string(),
        e.contract.clone(),
        e.work_minutes.to_string(),
    ]
}
