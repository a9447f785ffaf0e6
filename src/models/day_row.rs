use super::work_type::WorkType;
use crate::utils::time::hhmm;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editable inputs of a row whose enabled flag is tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    StartTime,
    EndTime,
    BreakMinutes,
    PaidLeave,
    Preset,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::StartTime => "start_time",
            Field::EndTime => "end_time",
            Field::BreakMinutes => "break_minutes",
            Field::PaidLeave => "paid_leave",
            Field::Preset => "preset",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Start or end of the working span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    End,
}

impl TimeField {
    pub fn field(&self) -> Field {
        match self {
            TimeField::Start => Field::StartTime,
            TimeField::End => Field::EndTime,
        }
    }
}

/// A form input: its current value plus whether the user may edit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState<T> {
    pub value: T,
    pub enabled: bool,
}

impl<T: Default> Default for FieldState<T> {
    fn default() -> Self {
        Self {
            value: T::default(),
            enabled: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeState {
    #[serde(with = "hhmm")]
    pub value: Option<NaiveTime>,
    pub enabled: bool,
}

/// One calendar day of the timecard table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRow {
    pub day: u32,
    pub weekday_label: String,
    #[serde(default)]
    pub is_holiday: bool,
    #[serde(default)]
    pub work_type: WorkType,

    #[serde(default)]
    pub start_time: TimeState,
    #[serde(default)]
    pub end_time: TimeState,
    #[serde(default)]
    pub break_minutes: FieldState<u32>,
    #[serde(default)]
    pub paid_leave: FieldState<u8>,

    #[serde(default)]
    pub start_next_day: bool,
    #[serde(default)]
    pub end_next_day: bool,

    /// `None` when the page renders no contract selector for this row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<FieldState<Option<String>>>,
    #[serde(default = "enabled_preset")]
    pub preset: FieldState<Option<String>>,

    #[serde(default)]
    pub highlighted: bool,
}

fn enabled_preset() -> FieldState<Option<String>> {
    FieldState {
        value: None,
        enabled: true,
    }
}

impl DayRow {
    /// Blank row as rendered for a day with no stored timecard.
    pub fn new(day: u32, weekday_label: &str, is_holiday: bool) -> Self {
        Self {
            day,
            weekday_label: weekday_label.to_string(),
            is_holiday,
            work_type: WorkType::Unset,
            start_time: TimeState::default(),
            end_time: TimeState::default(),
            break_minutes: FieldState::default(),
            paid_leave: FieldState::default(),
            start_next_day: false,
            end_next_day: false,
            contract: None,
            preset: enabled_preset(),
            highlighted: false,
        }
    }

    /// Adds an (empty) contract selector. The preset selector stays disabled
    /// until a contract is chosen.
    pub fn with_contract_selector(mut self) -> Self {
        self.contract = Some(FieldState {
            value: None,
            enabled: true,
        });
        self.preset.enabled = false;
        self
    }
}
