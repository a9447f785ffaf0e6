use super::editor::TimecardCalendar;
use super::validate::{SubmitDecision, ValidationResult};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::save_timecards;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub struct SubmitLogic;

impl SubmitLogic {
    /// Runs validation and, only when it passes, stores the calendar's rows.
    /// A vetoed submission writes nothing to the database. The audit entry is
    /// best-effort: once the rows are stored, a log failure only warns.
    pub fn apply(pool: &mut DbPool, editor: &mut TimecardCalendar) -> AppResult<ValidationResult> {
        let result = editor.validate();
        let month = editor.calendar().month.clone();

        let (operation, message) = match result.decision() {
            SubmitDecision::Prevent => (
                "submit_rejected",
                format!("{} row error(s)", result.errors.len()),
            ),
            SubmitDecision::Proceed => {
                let saved = save_timecards(&mut pool.conn, editor.calendar())?;
                ("submit", format!("{saved} timecard row(s) stored"))
            }
        };

        if let Err(e) = ttlog(&pool.conn, operation, &month, &message) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::editor::EditorOptions;
    use crate::db::log::load_log;
    use crate::db::queries::load_timecards;
    use crate::models::{Calendar, WorkType};
    use crate::utils::time::parse_time;

    fn pool() -> DbPool {
        DbPool::in_memory().unwrap()
    }

    #[test]
    fn valid_calendar_is_stored() {
        let mut pool = pool();
        let cal = Calendar::for_month(2025, 9, &[], false).unwrap();
        let mut editor = TimecardCalendar::new(cal, EditorOptions::default());
        editor.change_work_type(1, WorkType::Attendance);
        let row = editor.row_mut(1).unwrap();
        row.start_time.value = parse_time("09:00");
        row.end_time.value = parse_time("18:00");
        row.break_minutes.value = 60;

        let result = SubmitLogic::apply(&mut pool, &mut editor).unwrap();
        assert!(result.is_valid());

        let stored = load_timecards(&pool.conn, "2025-09").unwrap();
        assert_eq!(stored.len(), 30);
        assert_eq!(stored[0].work_type, WorkType::Attendance);
        assert_eq!(stored[0].start_time, "09:00");
        assert_eq!(stored[0].work_minutes, 480);

        let log = load_log(&pool.conn).unwrap();
        assert_eq!(log.last().unwrap().operation, "submit");
    }

    #[test]
    fn resubmission_overwrites_rows() {
        let mut pool = pool();
        let cal = Calendar::for_month(2025, 9, &[], false).unwrap();
        let mut editor = TimecardCalendar::new(cal, EditorOptions::default());
        SubmitLogic::apply(&mut pool, &mut editor).unwrap();
        editor.change_work_type(2, WorkType::Absence);
        SubmitLogic::apply(&mut pool, &mut editor).unwrap();

        let stored = load_timecards(&pool.conn, "2025-09").unwrap();
        assert_eq!(stored.len(), 30);
        assert_eq!(stored[1].work_type, WorkType::Absence);
    }

    #[test]
    fn invalid_calendar_is_not_stored() {
        let mut pool = pool();
        let cal = Calendar::for_month(2025, 9, &[], false).unwrap();
        let mut editor = TimecardCalendar::new(cal, EditorOptions::default());
        editor.change_work_type(3, WorkType::Attendance);

        let result = SubmitLogic::apply(&mut pool, &mut editor).unwrap();
        assert!(!result.is_valid());
        assert!(load_timecards(&pool.conn, "2025-09").unwrap().is_empty());
        assert!(editor.row(3).unwrap().highlighted);
    }

    #[test]
    fn audit_failure_does_not_fail_a_stored_submission() {
        let mut pool = pool();
        pool.conn.execute_batch("DROP TABLE log").unwrap();
        let cal = Calendar::for_month(2025, 9, &[], false).unwrap();
        let mut editor = TimecardCalendar::new(cal, EditorOptions::default());

        let result = SubmitLogic::apply(&mut pool, &mut editor).unwrap();
        assert!(result.is_valid());
        assert_eq!(load_timecards(&pool.conn, "2025-09").unwrap().len(), 30);
    }
}
