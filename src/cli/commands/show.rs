use crate::cli::context::Context;
use crate::errors::AppResult;
use crate::models::DayRow;
use crate::ui::messages::header;
use crate::utils::colors::{RESET, color_for_work_type, highlight};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;
use chrono::NaiveTime;

fn time_cell(value: Option<NaiveTime>, enabled: bool, next_day: bool) -> String {
    let mut s = match (value, enabled) {
        (Some(t), _) => format_time(Some(t)),
        (None, true) => "--:--".to_string(),
        (None, false) => String::new(),
    };
    if next_day {
        s.push_str(" 翌");
    }
    s
}

fn number_cell(value: u32, enabled: bool) -> String {
    if enabled || value != 0 {
        value.to_string()
    } else {
        String::new()
    }
}

pub(crate) fn row_cells(row: &DayRow, with_contract: bool) -> Vec<String> {
    let mut cells = vec![
        format!("{}({})", row.day, row.weekday_label),
        if row.is_holiday { "祝".to_string() } else { String::new() },
        format!("{} {}", row.work_type.code(), row.work_type.label())
            .trim()
            .to_string(),
        time_cell(row.start_time.value, row.start_time.enabled, row.start_next_day),
        time_cell(row.end_time.value, row.end_time.enabled, row.end_next_day),
        number_cell(row.break_minutes.value, row.break_minutes.enabled),
        number_cell(u32::from(row.paid_leave.value), row.paid_leave.enabled),
        row.preset.value.clone().unwrap_or_default(),
    ];
    if with_contract {
        cells.push(
            row.contract
                .as_ref()
                .and_then(|c| c.value.clone())
                .unwrap_or_default(),
        );
    }
    cells
}

pub fn handle(ctx: &Context) -> AppResult<()> {
    let editor = ctx.open_editor()?;
    let calendar = editor.calendar();
    let with_contract = calendar.rows.iter().any(|r| r.contract.is_some());

    let mut columns = vec![
        Column::new("Day", 6),
        Column::new("Hol", 3),
        Column::new("Type", 12),
        Column::new("Start", 8),
        Column::new("End", 8),
        Column::new("Break", 5),
        Column::new("Paid", 4),
        Column::new("Preset", 10),
    ];
    if with_contract {
        columns.push(Column::new("Contract", 10));
    }

    let mut table = Table::new(columns);
    for row in &calendar.rows {
        table.add_row(row_cells(row, with_contract));
    }

    header(format!("Timecard {}", calendar.month));
    let lines = table.render_lines();
    println!("{}", lines[0]);
    for (row, line) in calendar.rows.iter().zip(lines.iter().skip(1)) {
        if row.highlighted {
            println!("{}", highlight(line));
        } else {
            println!("{}{}{}", color_for_work_type(row.work_type), line, RESET);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::row_state::RowStateLogic;
    use crate::models::WorkType;
    use crate::utils::time::parse_time;

    #[test]
    fn attendance_row_cells() {
        let mut row = DayRow::new(3, "月", false);
        RowStateLogic::apply(&mut row, WorkType::Attendance);
        row.start_time.value = parse_time("22:00");
        row.end_time.value = parse_time("07:00");
        row.end_next_day = true;
        let cells = row_cells(&row, false);
        assert_eq!(cells[0], "3(月)");
        assert_eq!(cells[2], "10 出勤");
        assert_eq!(cells[3], "22:00");
        assert_eq!(cells[4], "07:00 翌");
        assert_eq!(cells[5], "0");
        assert_eq!(cells[6], "");
    }

    #[test]
    fn unset_row_shows_blank_cells() {
        let row = DayRow::new(4, "土", true);
        let cells = row_cells(&row, false);
        assert_eq!(cells[1], "祝");
        assert_eq!(cells[2], "");
        assert_eq!(cells[3], "");
    }
}
