pub mod calculator;
pub mod clear;
pub mod collaborators;
pub mod editor;
pub mod fill;
pub mod log;
pub mod preset;
pub mod row;
pub mod row_state;
pub mod submit;
pub mod validate;

pub use collaborators::{
    AlwaysConfirm, Confirm, DependentsNotifier, NeverConfirm, NoopNotifier, PresetSelectorSync,
};
pub use editor::{EditorOptions, TimecardCalendar};
pub use row::RowAccess;
pub use validate::{RowError, SubmitDecision, ValidationResult};
