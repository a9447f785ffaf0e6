//! Work-hours figures derived from the rows: per-day worked minutes and
//! monthly totals.

use super::row::RowAccess;
use crate::models::{TimeField, WorkType};
use chrono::Timelike;
use serde::Serialize;

const DAY_MINUTES: i64 = 24 * 60;

/// Worked minutes of an attendance row; 0 for any other row or when a time is missing.
///
/// Next-day flags push the corresponding time one day forward. Without any
/// flag an end at or before the start is read as ending the following day.
pub fn work_minutes<R: RowAccess + ?Sized>(row: &R) -> i64 {
    if row.work_type() != WorkType::Attendance {
        return 0;
    }
    let (Some(start), Some(end)) = (row.time(TimeField::Start), row.time(TimeField::End)) else {
        return 0;
    };

    let start_next = row.next_day(TimeField::Start);
    let end_next = row.next_day(TimeField::End);

    let mut start_min = i64::from(start.hour() * 60 + start.minute());
    let mut end_min = i64::from(end.hour() * 60 + end.minute());
    if start_next {
        start_min += DAY_MINUTES;
    }
    if end_next {
        end_min += DAY_MINUTES;
    }
    if !start_next && !end_next && end_min <= start_min {
        end_min += DAY_MINUTES;
    }

    (end_min - start_min - i64::from(row.break_minutes())).max(0)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub attendance_days: u32,
    pub absence_days: u32,
    pub rest_days: u32,
    pub no_work_days: u32,
    pub paid_leave_days: u32,
    pub total_work_minutes: i64,
    /// Minutes worked on weekends and holidays.
    pub holiday_work_minutes: i64,
}

impl MonthlySummary {
    pub fn from_rows<R: RowAccess>(rows: &[R]) -> Self {
        let mut s = Self::default();
        for row in rows {
            let wt = row.work_type();
            match wt {
                WorkType::Attendance => s.attendance_days += 1,
                WorkType::NoWork => s.no_work_days += 1,
                _ => {}
            }
            if wt.is_absence() {
                s.absence_days += 1;
            }
            if wt.is_rest_day() {
                s.rest_days += 1;
            }
            if wt == WorkType::PaidLeave {
                s.paid_leave_days += u32::from(row.paid_leave());
            }

            let minutes = work_minutes(row);
            s.total_work_minutes += minutes;
            if row.is_weekend_or_holiday() {
                s.holiday_work_minutes += minutes;
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayRow;
    use crate::utils::time::parse_time;

    fn row(label: &str, start: &str, end: &str, brk: u32) -> DayRow {
        let mut r = DayRow::new(1, label, false);
        r.work_type = WorkType::Attendance;
        r.start_time.value = parse_time(start);
        r.end_time.value = parse_time(end);
        r.break_minutes.value = brk;
        r
    }

    #[test]
    fn day_shift_subtracts_break() {
        assert_eq!(work_minutes(&row("月", "09:00", "18:00", 60)), 480);
    }

    #[test]
    fn overnight_without_flags_wraps_to_next_day() {
        assert_eq!(work_minutes(&row("月", "22:00", "06:00", 60)), 420);
    }

    #[test]
    fn end_next_day_flag_extends_span() {
        let mut r = row("月", "09:00", "10:00", 0);
        r.end_next_day = true;
        assert_eq!(work_minutes(&r), 25 * 60);
    }

    #[test]
    fn break_longer_than_span_clamps_to_zero() {
        assert_eq!(work_minutes(&row("月", "09:00", "09:30", 60)), 0);
    }

    #[test]
    fn non_attendance_counts_nothing() {
        let mut r = row("月", "09:00", "18:00", 0);
        r.work_type = WorkType::Absence;
        assert_eq!(work_minutes(&r), 0);
    }

    #[test]
    fn summary_totals() {
        let mut leave = DayRow::new(3, "水", false);
        leave.work_type = WorkType::PaidLeave;
        leave.paid_leave.value = 1;
        let mut absent = DayRow::new(4, "木", false);
        absent.work_type = WorkType::Absence;
        let rows = vec![
            row("月", "09:00", "18:00", 60),
            row("土", "10:00", "12:00", 0),
            leave,
            absent,
        ];
        let s = MonthlySummary::from_rows(&rows);
        assert_eq!(s.attendance_days, 2);
        assert_eq!(s.absence_days, 1);
        assert_eq!(s.rest_days, 1);
        assert_eq!(s.paid_leave_days, 1);
        assert_eq!(s.total_work_minutes, 600);
        assert_eq!(s.holiday_work_minutes, 120);
    }
}
