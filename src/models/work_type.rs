use serde::{Deserialize, Serialize};
use std::fmt;

/// Day classification selected in a row's work-type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WorkType {
    Attendance,        // 10
    DayOff,            // 20
    Absence,           // 30
    PaidLeave,         // 40
    SpecialLeave,      // 50
    CompensatoryLeave, // 60
    NoWork,            // 70
    #[default]
    Unset, // ""
}

impl WorkType {
    pub const ALL: [WorkType; 8] = [
        WorkType::Attendance,
        WorkType::DayOff,
        WorkType::Absence,
        WorkType::PaidLeave,
        WorkType::SpecialLeave,
        WorkType::CompensatoryLeave,
        WorkType::NoWork,
        WorkType::Unset,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            WorkType::Attendance => "10",
            WorkType::DayOff => "20",
            WorkType::Absence => "30",
            WorkType::PaidLeave => "40",
            WorkType::SpecialLeave => "50",
            WorkType::CompensatoryLeave => "60",
            WorkType::NoWork => "70",
            WorkType::Unset => "",
        }
    }

    /// Convert a selector code → enum. The empty string is a valid "unset" selection.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "10" => Some(WorkType::Attendance),
            "20" => Some(WorkType::DayOff),
            "30" => Some(WorkType::Absence),
            "40" => Some(WorkType::PaidLeave),
            "50" => Some(WorkType::SpecialLeave),
            "60" => Some(WorkType::CompensatoryLeave),
            "70" => Some(WorkType::NoWork),
            "" => Some(WorkType::Unset),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkType::Attendance => "出勤",
            WorkType::DayOff => "休日",
            WorkType::Absence => "欠勤",
            WorkType::PaidLeave => "有給休暇",
            WorkType::SpecialLeave => "特別休暇",
            WorkType::CompensatoryLeave => "代休",
            WorkType::NoWork => "稼働無し",
            WorkType::Unset => "",
        }
    }

    /// Rest days in the monthly totals (day off and every kind of leave).
    pub fn is_rest_day(&self) -> bool {
        matches!(
            self,
            WorkType::DayOff
                | WorkType::PaidLeave
                | WorkType::SpecialLeave
                | WorkType::CompensatoryLeave
        )
    }

    pub fn is_absence(&self) -> bool {
        matches!(self, WorkType::Absence)
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for WorkType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        WorkType::from_code(&value).ok_or_else(|| format!("invalid work type code '{value}'"))
    }
}

impl From<WorkType> for String {
    fn from(value: WorkType) -> Self {
        value.code().to_string()
    }
}
