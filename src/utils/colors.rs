/// ANSI color helper utilities for terminal output.
use crate::models::WorkType;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Warning background used for rows that failed the last validation pass.
pub const HIGHLIGHT: &str = "\x1b[30;43m";

pub fn color_for_work_type(wt: WorkType) -> &'static str {
    match wt {
        WorkType::Attendance => GREEN,
        WorkType::PaidLeave | WorkType::SpecialLeave | WorkType::CompensatoryLeave => CYAN,
        WorkType::DayOff => BLUE,
        WorkType::Absence => RED,
        WorkType::NoWork => MAGENTA,
        WorkType::Unset => GREY,
    }
}

pub fn highlight(line: &str) -> String {
    format!("{HIGHLIGHT}{line}{RESET}")
}
