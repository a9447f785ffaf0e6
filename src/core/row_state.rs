use super::row::RowAccess;
use crate::models::{Field, TimeField, WorkType};

/// Reconciles which inputs of a row are editable with its work type.
///
/// | work type     | start / end / break        | paid leave            |
/// |---------------|----------------------------|-----------------------|
/// | attendance    | enabled, kept              | disabled, forced to 0 |
/// | paid leave    | disabled, cleared / 0      | enabled, kept         |
/// | anything else | disabled, cleared / 0      | disabled, forced to 0 |
pub struct RowStateLogic;

impl RowStateLogic {
    /// Selects `work_type` on the row, then reconciles its fields.
    pub fn apply<R: RowAccess + ?Sized>(row: &mut R, work_type: WorkType) {
        row.set_work_type(work_type);
        Self::reconcile(row);
    }

    /// Re-derives enabled flags and canonical defaults from the row's current work type.
    pub fn reconcile<R: RowAccess + ?Sized>(row: &mut R) {
        match row.work_type() {
            WorkType::Attendance => {
                set_times_enabled(row, true);
                row.set_enabled(Field::PaidLeave, false);
                row.set_paid_leave(0);
            }
            WorkType::PaidLeave => {
                set_times_enabled(row, false);
                clear_times(row);
                row.set_enabled(Field::PaidLeave, true);
            }
            _ => {
                set_times_enabled(row, false);
                clear_times(row);
                row.set_enabled(Field::PaidLeave, false);
                row.set_paid_leave(0);
            }
        }
    }
}

fn set_times_enabled<R: RowAccess + ?Sized>(row: &mut R, enabled: bool) {
    row.set_enabled(Field::StartTime, enabled);
    row.set_enabled(Field::EndTime, enabled);
    row.set_enabled(Field::BreakMinutes, enabled);
}

fn clear_times<R: RowAccess + ?Sized>(row: &mut R) {
    row.set_time(TimeField::Start, None);
    row.set_time(TimeField::End, None);
    row.set_break_minutes(0);
}
