use super::collaborators::{Confirm, DependentsNotifier};
use super::row::RowAccess;
use super::row_state::RowStateLogic;
use crate::models::{TimeField, WorkType};

pub const CLEAR_CONFIRMATION: &str = "全ての入力をクリアしますか？";

pub struct ClearLogic;

impl ClearLogic {
    /// Resets every row to the empty state, in table order. Rows with a
    /// contract selector get their dependents notified after the reset.
    /// Returns whether the clear ran.
    pub fn apply<R: RowAccess>(
        rows: &mut [R],
        confirm: &mut dyn Confirm,
        notifier: &mut dyn DependentsNotifier,
    ) -> bool {
        if !confirm.confirm(CLEAR_CONFIRMATION) {
            return false;
        }

        for row in rows.iter_mut() {
            let has_contract = row.has_contract_selector();
            if has_contract {
                row.set_contract(None);
            }
            row.set_preset(None);

            row.set_work_type(WorkType::Unset);
            row.set_time(TimeField::Start, None);
            row.set_time(TimeField::End, None);
            row.set_break_minutes(0);
            row.set_paid_leave(0);
            row.set_next_day(TimeField::Start, false);
            row.set_next_day(TimeField::End, false);

            RowStateLogic::reconcile(row);

            if has_contract {
                notifier.notify_dependents_changed(row);
            }
        }
        true
    }
}
