use super::row::RowAccess;
use crate::models::{TimeField, WorkType};
use thiserror::Error;

/// At most this many messages are shown in the alert; the rest are elided.
pub const MAX_SHOWN_ERRORS: usize = 5;

/// A problem found on one row before submission. Display is the user message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("{day}日: 出勤の場合は出勤・退勤時刻を入力してください。")]
    MissingTime { day: u32 },

    #[error("{day}日: 退勤時刻は出勤時刻より後の時刻を入力してください。")]
    InvertedRange { day: u32 },
}

impl RowError {
    pub fn day(&self) -> u32 {
        match self {
            RowError::MissingTime { day } | RowError::InvertedRange { day } => *day,
        }
    }
}

/// What the host form should do with the pending submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitDecision {
    Proceed,
    Prevent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<RowError>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn decision(&self) -> SubmitDecision {
        if self.is_valid() {
            SubmitDecision::Proceed
        } else {
            SubmitDecision::Prevent
        }
    }

    /// Alert text: a header, the first few messages, and "..." when more exist.
    /// `None` when there is nothing to report.
    pub fn alert_text(&self) -> Option<String> {
        if self.is_valid() {
            return None;
        }
        let shown: Vec<String> = self
            .errors
            .iter()
            .take(MAX_SHOWN_ERRORS)
            .map(ToString::to_string)
            .collect();
        let mut text = format!("入力エラーがあります。\n\n{}", shown.join("\n"));
        if self.errors.len() > MAX_SHOWN_ERRORS {
            text.push_str("\n...");
        }
        Some(text)
    }
}

pub struct ValidateLogic;

impl ValidateLogic {
    /// Checks every attendance row and marks the failing ones.
    /// Markers left by an earlier pass are cleared first.
    pub fn apply<R: RowAccess>(rows: &mut [R]) -> ValidationResult {
        let mut result = ValidationResult::default();

        for row in rows.iter_mut() {
            row.set_highlighted(false);

            if let Some(err) = Self::check_row(row) {
                row.set_highlighted(true);
                result.errors.push(err);
            }
        }

        result
    }

    pub fn check_row<R: RowAccess + ?Sized>(row: &R) -> Option<RowError> {
        if row.work_type() != WorkType::Attendance {
            return None;
        }

        let day = row.day();
        let (Some(start), Some(end)) = (row.time(TimeField::Start), row.time(TimeField::End))
        else {
            return Some(RowError::MissingTime { day });
        };

        // An explicit next-day flag makes start >= end a legitimate overnight shift.
        let overnight = row.next_day(TimeField::Start) || row.next_day(TimeField::End);
        if start >= end && !overnight {
            return Some(RowError::InvertedRange { day });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::row_state::RowStateLogic;
    use crate::models::DayRow;
    use crate::utils::time::parse_time;

    fn attendance(day: u32, start: &str, end: &str) -> DayRow {
        let mut row = DayRow::new(day, "月", false);
        RowStateLogic::apply(&mut row, WorkType::Attendance);
        row.start_time.value = parse_time(start);
        row.end_time.value = parse_time(end);
        row
    }

    #[test]
    fn inverted_range_is_reported_once() {
        let mut rows = vec![attendance(7, "18:00", "09:00")];
        let result = ValidateLogic::apply(&mut rows);
        assert_eq!(result.errors, vec![RowError::InvertedRange { day: 7 }]);
        assert_eq!(result.decision(), SubmitDecision::Prevent);
        assert!(rows[0].highlighted);
    }

    #[test]
    fn next_day_flag_allows_overnight_shift() {
        let mut rows = vec![attendance(7, "18:00", "09:00")];
        rows[0].end_next_day = true;
        let result = ValidateLogic::apply(&mut rows);
        assert!(result.is_valid());
        assert_eq!(result.decision(), SubmitDecision::Proceed);
    }

    #[test]
    fn equal_times_count_as_inverted() {
        let mut rows = vec![attendance(1, "09:00", "09:00")];
        assert_eq!(
            ValidateLogic::apply(&mut rows).errors,
            vec![RowError::InvertedRange { day: 1 }]
        );
    }

    #[test]
    fn missing_times_are_reported() {
        let mut rows = vec![attendance(2, "09:00", ""), attendance(3, "", "")];
        let result = ValidateLogic::apply(&mut rows);
        assert_eq!(
            result.errors,
            vec![RowError::MissingTime { day: 2 }, RowError::MissingTime { day: 3 }]
        );
    }

    #[test]
    fn non_attendance_rows_are_ignored() {
        let mut row = DayRow::new(4, "木", false);
        row.work_type = WorkType::PaidLeave;
        let mut rows = vec![row];
        assert!(ValidateLogic::apply(&mut rows).is_valid());
    }

    #[test]
    fn markers_from_a_previous_pass_are_cleared() {
        let mut rows = vec![attendance(7, "18:00", "09:00")];
        ValidateLogic::apply(&mut rows);
        rows[0].start_time.value = parse_time("08:00");
        ValidateLogic::apply(&mut rows);
        assert!(!rows[0].highlighted);
    }

    #[test]
    fn alert_shows_at_most_five_messages() {
        let mut rows: Vec<DayRow> = (1..=7).map(|d| attendance(d, "", "")).collect();
        let result = ValidateLogic::apply(&mut rows);
        assert_eq!(result.errors.len(), 7);
        let text = result.alert_text().unwrap();
        assert!(text.starts_with("入力エラーがあります。\n\n"));
        assert!(text.contains("5日:"));
        assert!(!text.contains("6日:"));
        assert!(text.ends_with("\n..."));
    }

    #[test]
    fn alert_without_truncation_has_no_ellipsis() {
        let mut rows = vec![attendance(1, "", "")];
        let text = ValidateLogic::apply(&mut rows).alert_text().unwrap();
        assert_eq!(
            text,
            "入力エラーがあります。\n\n1日: 出勤の場合は出勤・退勤時刻を入力してください。"
        );
    }
}
