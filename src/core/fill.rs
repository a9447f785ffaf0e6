use super::collaborators::Confirm;
use super::row::RowAccess;
use super::row_state::RowStateLogic;
use crate::models::{TimeField, WorkType};
use chrono::NaiveTime;

/// Per-row extension run by bulk fill before defaults are written,
/// e.g. to pick a contract for the row.
pub type FillHook = Box<dyn FnMut(&mut dyn RowAccess)>;

/// Values written into weekday rows by bulk fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillDefaults {
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub break_minutes: u32,
}

impl Default for FillDefaults {
    fn default() -> Self {
        Self {
            start_time: None,
            end_time: None,
            break_minutes: 60,
        }
    }
}

pub struct FillAllLogic;

impl FillAllLogic {
    pub fn confirmation_message(has_hook: bool) -> String {
        let mut msg = String::from("平日に対して契約の就業時間で一括設定しますか？");
        if has_hook {
            msg.push_str("\n※最初の有効な契約が自動選択されます。");
        }
        msg
    }

    /// Overwrites every row, in table order: weekends and holidays become
    /// "no work", weekdays become attendance with the configured times.
    ///
    /// Nothing is touched when the confirmation is declined. Returns whether
    /// the fill ran.
    pub fn apply<R: RowAccess>(
        rows: &mut [R],
        defaults: &FillDefaults,
        mut hook: Option<&mut FillHook>,
        confirm: &mut dyn Confirm,
    ) -> bool {
        if !confirm.confirm(&Self::confirmation_message(hook.is_some())) {
            return false;
        }

        for row in rows.iter_mut() {
            if let Some(h) = hook.as_deref_mut() {
                h(row as &mut dyn RowAccess);
            }
            Self::fill_row(row, defaults);
        }
        true
    }

    fn fill_row<R: RowAccess + ?Sized>(row: &mut R, defaults: &FillDefaults) {
        row.set_next_day(TimeField::Start, false);
        row.set_next_day(TimeField::End, false);
        row.set_preset(None);
        row.set_paid_leave(0);

        if row.is_weekend_or_holiday() {
            row.set_work_type(WorkType::NoWork);
            row.set_time(TimeField::Start, None);
            row.set_time(TimeField::End, None);
            row.set_break_minutes(0);
        } else {
            row.set_work_type(WorkType::Attendance);
            row.set_time(TimeField::Start, defaults.start_time);
            row.set_time(TimeField::End, defaults.end_time);
            row.set_break_minutes(defaults.break_minutes);
        }

        RowStateLogic::reconcile(row);
    }
}
