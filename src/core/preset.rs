use super::row::RowAccess;
use super::row_state::RowStateLogic;
use crate::models::{TimeField, TimePreset, WorkType};

pub struct PresetLogic;

impl PresetLogic {
    /// Applies the preset chosen in a row's preset selector.
    ///
    /// `None` is the empty option and leaves the row untouched. Otherwise the row
    /// becomes an attendance day carrying the preset's times, break and next-day flags.
    /// Returns whether the row changed.
    pub fn apply<R: RowAccess + ?Sized>(row: &mut R, preset: Option<&TimePreset>) -> bool {
        let Some(preset) = preset else {
            return false;
        };

        row.set_work_type(WorkType::Attendance);
        row.set_time(TimeField::Start, preset.start_time);
        row.set_time(TimeField::End, preset.end_time);
        row.set_next_day(TimeField::Start, preset.start_next_day);
        row.set_next_day(TimeField::End, preset.end_next_day);
        row.set_break_minutes(preset.break_minutes);
        row.set_preset(Some(preset.name.clone()));

        RowStateLogic::reconcile(row);
        true
    }
}
