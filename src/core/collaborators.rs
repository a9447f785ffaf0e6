//! Collaborators the editor talks to but does not own: the confirmation
//! dialog and whatever listens for contract-selection changes.

use super::row::RowAccess;
use crate::models::Field;

/// Blocking yes/no dialog.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Accepts every prompt (`--yes`, scripted use).
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        true
    }
}

/// Declines every prompt.
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _message: &str) -> bool {
        false
    }
}

/// Told when a row's contract selection changed so that fields depending
/// on it can refresh themselves.
pub trait DependentsNotifier {
    fn notify_dependents_changed(&mut self, row: &mut dyn RowAccess);
}

pub struct NoopNotifier;

impl DependentsNotifier for NoopNotifier {
    fn notify_dependents_changed(&mut self, _row: &mut dyn RowAccess) {}
}

/// Keeps the preset selector usable only while a contract is selected.
/// Every contract change drops the current preset, since the presets on
/// offer depend on the contract.
pub struct PresetSelectorSync;

impl DependentsNotifier for PresetSelectorSync {
    fn notify_dependents_changed(&mut self, row: &mut dyn RowAccess) {
        if !row.has_contract_selector() {
            return;
        }
        row.set_enabled(Field::Preset, row.contract().is_some());
        row.set_preset(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DayRow;

    #[test]
    fn preset_selector_follows_contract_selection() {
        let mut row = DayRow::new(1, "月", false).with_contract_selector();
        row.set_contract(Some("C-1".into()));
        PresetSelectorSync.notify_dependents_changed(&mut row);
        assert!(row.preset.enabled);

        row.set_preset(Some("day".into()));
        row.set_contract(None);
        PresetSelectorSync.notify_dependents_changed(&mut row);
        assert!(!row.preset.enabled);
        assert_eq!(row.preset.value, None);
    }

    #[test]
    fn switching_contract_drops_preset() {
        let mut row = DayRow::new(1, "月", false).with_contract_selector();
        row.set_contract(Some("C-1".into()));
        PresetSelectorSync.notify_dependents_changed(&mut row);
        row.set_preset(Some("short".into()));

        row.set_contract(Some("C-2".into()));
        PresetSelectorSync.notify_dependents_changed(&mut row);
        assert!(row.preset.enabled);
        assert_eq!(row.preset.value, None);
    }

    #[test]
    fn rows_without_contract_selector_are_untouched() {
        let mut row = DayRow::new(1, "月", false);
        row.set_preset(Some("day".into()));
        PresetSelectorSync.notify_dependents_changed(&mut row);
        assert!(row.preset.enabled);
        assert_eq!(row.preset.value.as_deref(), Some("day"));
    }
}
