use crate::core::calculator::work_minutes;
use crate::errors::AppResult;
use crate::models::{Calendar, WorkType};
use crate::utils::time::format_time;
use chrono::Local;
use rusqlite::{Connection, params};

/// A timecard row as stored on submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredTimecard {
    pub day: u32,
    pub work_type: WorkType,
    pub start_time: String,
    pub end_time: String,
    pub break_minutes: u32,
    pub paid_leave: u8,
    pub work_minutes: i64,
}

/// Upserts every row of the calendar, keyed by (month, day), in one transaction.
pub fn save_timecards(conn: &mut Connection, calendar: &Calendar) -> AppResult<usize> {
    let now = Local::now().to_rfc3339();
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare_cached(
            "INSERT INTO timecards (
                month, day, work_type, start_time, start_time_next_day,
                end_time, end_time_next_day, break_minutes, paid_leave,
                contract, work_minutes, submitted_at
             ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
             ON CONFLICT(month, day) DO UPDATE SET
                work_type = excluded.work_type,
                start_time = excluded.start_time,
                start_time_next_day = excluded.start_time_next_day,
                end_time = excluded.end_time,
                end_time_next_day = excluded.end_time_next_day,
                break_minutes = excluded.break_minutes,
                paid_leave = excluded.paid_leave,
                contract = excluded.contract,
                work_minutes = excluded.work_minutes,
                submitted_at = excluded.submitted_at",
        )?;

        for row in &calendar.rows {
            stmt.execute(params![
                calendar.month,
                row.day,
                row.work_type.code(),
                format_time(row.start_time.value),
                row.start_next_day,
                format_time(row.end_time.value),
                row.end_next_day,
                row.break_minutes.value,
                row.paid_leave.value,
                row.contract.as_ref().and_then(|c| c.value.clone()),
                work_minutes(row),
                now,
            ])?;
        }
    }
    tx.commit()?;
    Ok(calendar.rows.len())
}

pub fn load_timecards(conn: &Connection, month: &str) -> AppResult<Vec<StoredTimecard>> {
    let mut stmt = conn.prepare_cached(
        "SELECT day, work_type, start_time, end_time, break_minutes, paid_leave, work_minutes
         FROM timecards WHERE month = ?1 ORDER BY day ASC",
    )?;
    let rows = stmt.query_map([month], |row| {
        let code: String = row.get(1)?;
        Ok(StoredTimecard {
            day: row.get(0)?,
            work_type: WorkType::from_code(&code).unwrap_or_default(),
            start_time: row.get(2)?,
            end_time: row.get(3)?,
            break_minutes: row.get(4)?,
            paid_leave: row.get(5)?,
            work_minutes: row.get(6)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
