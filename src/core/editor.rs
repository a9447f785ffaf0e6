//! The timecard calendar editor: one instance per open calendar, owning its
//! rows and dispatching user actions to the row operations.

use super::clear::ClearLogic;
use super::collaborators::{Confirm, DependentsNotifier};
use super::fill::{FillAllLogic, FillDefaults, FillHook};
use super::preset::PresetLogic;
use super::row_state::RowStateLogic;
use super::validate::{ValidateLogic, ValidationResult};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Calendar, DayRow, TimePreset, WorkType};
use crate::utils::time::parse_optional_time;

#[derive(Default)]
pub struct EditorOptions {
    pub defaults: FillDefaults,
    pub on_fill_all: Option<FillHook>,
}

impl EditorOptions {
    /// Reads the fill defaults from configuration. The hook is registered separately.
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let start_time = parse_optional_time(&cfg.default_start_time).map_err(|_| {
            AppError::Config(format!("default_start_time: '{}'", cfg.default_start_time))
        })?;
        let end_time = parse_optional_time(&cfg.default_end_time).map_err(|_| {
            AppError::Config(format!("default_end_time: '{}'", cfg.default_end_time))
        })?;
        let break_minutes = cfg.default_break_minutes.trim().parse::<u32>().map_err(|_| {
            AppError::Config(format!(
                "default_break_minutes: '{}'",
                cfg.default_break_minutes
            ))
        })?;

        Ok(Self {
            defaults: FillDefaults {
                start_time,
                end_time,
                break_minutes,
            },
            on_fill_all: None,
        })
    }

    pub fn with_fill_hook(mut self, hook: FillHook) -> Self {
        self.on_fill_all = Some(hook);
        self
    }
}

pub struct TimecardCalendar {
    calendar: Calendar,
    options: EditorOptions,
}

impl TimecardCalendar {
    /// Binds the editor to a calendar and reconciles every row with its work type.
    pub fn new(mut calendar: Calendar, options: EditorOptions) -> Self {
        for row in calendar.rows.iter_mut() {
            RowStateLogic::reconcile(row);
        }
        Self { calendar, options }
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn row(&self, day: u32) -> Option<&DayRow> {
        self.calendar.row(day)
    }

    pub fn row_mut(&mut self, day: u32) -> Option<&mut DayRow> {
        self.calendar.row_mut(day)
    }

    /// Work-type selector changed. A missing row is ignored.
    pub fn change_work_type(&mut self, day: u32, work_type: WorkType) -> bool {
        match self.calendar.row_mut(day) {
            Some(row) => {
                RowStateLogic::apply(row, work_type);
                true
            }
            None => false,
        }
    }

    /// Preset selector changed; `None` is the empty option.
    pub fn select_preset(&mut self, day: u32, preset: Option<&TimePreset>) -> bool {
        match self.calendar.row_mut(day) {
            Some(row) => PresetLogic::apply(row, preset),
            None => false,
        }
    }

    pub fn fill_all(&mut self, confirm: &mut dyn Confirm) -> bool {
        FillAllLogic::apply(
            &mut self.calendar.rows,
            &self.options.defaults,
            self.options.on_fill_all.as_mut(),
            confirm,
        )
    }

    pub fn clear_all(
        &mut self,
        confirm: &mut dyn Confirm,
        notifier: &mut dyn DependentsNotifier,
    ) -> bool {
        ClearLogic::apply(&mut self.calendar.rows, confirm, notifier)
    }

    pub fn validate(&mut self) -> ValidationResult {
        ValidateLogic::apply(&mut self.calendar.rows)
    }
}
