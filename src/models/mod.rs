pub mod calendar;
pub mod day_row;
pub mod preset;
pub mod work_type;

pub use calendar::Calendar;
pub use day_row::{DayRow, Field, FieldState, TimeField, TimeState};
pub use preset::TimePreset;
pub use work_type::WorkType;
