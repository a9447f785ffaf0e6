//! Narrow accessor over a single day row's field bag.
//! Every editor operation goes through this trait, so it does not care
//! whether rows live in memory, in a file, or behind a rendering layer.

use crate::models::{DayRow, Field, TimeField, WorkType};
use chrono::NaiveTime;

pub trait RowAccess {
    fn day(&self) -> u32;
    fn weekday_label(&self) -> &str;
    fn is_holiday(&self) -> bool;

    fn work_type(&self) -> WorkType;
    fn set_work_type(&mut self, work_type: WorkType);

    fn time(&self, which: TimeField) -> Option<NaiveTime>;
    fn set_time(&mut self, which: TimeField, value: Option<NaiveTime>);

    fn next_day(&self, which: TimeField) -> bool;
    fn set_next_day(&mut self, which: TimeField, value: bool);

    fn break_minutes(&self) -> u32;
    fn set_break_minutes(&mut self, minutes: u32);

    fn paid_leave(&self) -> u8;
    fn set_paid_leave(&mut self, flag: u8);

    fn is_enabled(&self, field: Field) -> bool;
    fn set_enabled(&mut self, field: Field, enabled: bool);

    fn has_contract_selector(&self) -> bool;
    fn contract(&self) -> Option<&str>;
    /// No-op on rows without a contract selector.
    fn set_contract(&mut self, contract: Option<String>);

    fn preset(&self) -> Option<&str>;
    fn set_preset(&mut self, name: Option<String>);

    fn set_highlighted(&mut self, on: bool);

    /// Weekend (土/日) or public holiday.
    fn is_weekend_or_holiday(&self) -> bool {
        self.is_holiday() || matches!(self.weekday_label(), "土" | "日")
    }
}

impl RowAccess for DayRow {
    fn day(&self) -> u32 {
        self.day
    }

    fn weekday_label(&self) -> &str {
        &self.weekday_label
    }

    fn is_holiday(&self) -> bool {
        self.is_holiday
    }

    fn work_type(&self) -> WorkType {
        self.work_type
    }

    fn set_work_type(&mut self, work_type: WorkType) {
        self.work_type = work_type;
    }

    fn time(&self, which: TimeField) -> Option<NaiveTime> {
        match which {
            TimeField::Start => self.start_time.value,
            TimeField::End => self.end_time.value,
        }
    }

    fn set_time(&mut self, which: TimeField, value: Option<NaiveTime>) {
        match which {
            TimeField::Start => self.start_time.value = value,
            TimeField::End => self.end_time.value = value,
        }
    }

    fn next_day(&self, which: TimeField) -> bool {
        match which {
            TimeField::Start => self.start_next_day,
            TimeField::End => self.end_next_day,
        }
    }

    fn set_next_day(&mut self, which: TimeField, value: bool) {
        match which {
            TimeField::Start => self.start_next_day = value,
            TimeField::End => self.end_next_day = value,
        }
    }

    fn break_minutes(&self) -> u32 {
        self.break_minutes.value
    }

    fn set_break_minutes(&mut self, minutes: u32) {
        self.break_minutes.value = minutes;
    }

    fn paid_leave(&self) -> u8 {
        self.paid_leave.value
    }

    fn set_paid_leave(&mut self, flag: u8) {
        self.paid_leave.value = flag;
    }

    fn is_enabled(&self, field: Field) -> bool {
        match field {
            Field::StartTime => self.start_time.enabled,
            Field::EndTime => self.end_time.enabled,
            Field::BreakMinutes => self.break_minutes.enabled,
            Field::PaidLeave => self.paid_leave.enabled,
            Field::Preset => self.preset.enabled,
        }
    }

    fn set_enabled(&mut self, field: Field, enabled: bool) {
        match field {
            Field::StartTime => self.start_time.enabled = enabled,
            Field::EndTime => self.end_time.enabled = enabled,
            Field::BreakMinutes => self.break_minutes.enabled = enabled,
            Field::PaidLeave => self.paid_leave.enabled = enabled,
            Field::Preset => self.preset.enabled = enabled,
        }
    }

    fn has_contract_selector(&self) -> bool {
        self.contract.is_some()
    }

    fn contract(&self) -> Option<&str> {
        self.contract.as_ref().and_then(|c| c.value.as_deref())
    }

    fn set_contract(&mut self, contract: Option<String>) {
        if let Some(selector) = self.contract.as_mut() {
            selector.value = contract;
        }
    }

    fn preset(&self) -> Option<&str> {
        self.preset.value.as_deref()
    }

    fn set_preset(&mut self, name: Option<String>) {
        self.preset.value = name;
    }

    fn set_highlighted(&mut self, on: bool) {
        self.highlighted = on;
    }
}
