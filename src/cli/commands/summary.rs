use crate::cli::context::Context;
use crate::core::calculator::MonthlySummary;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::time::format_minutes;

pub fn handle(ctx: &Context) -> AppResult<()> {
    let editor = ctx.open_editor()?;
    let calendar = editor.calendar();
    let s = MonthlySummary::from_rows(&calendar.rows);

    header(format!("Summary {}", calendar.month));
    println!("Attendance days   : {}", s.attendance_days);
    println!("Absence days      : {}", s.absence_days);
    println!("Rest days         : {}", s.rest_days);
    println!("Paid leave days   : {}", s.paid_leave_days);
    println!("No-work days      : {}", s.no_work_days);
    println!("Total work time   : {}", format_minutes(s.total_work_minutes));
    println!("Holiday work time : {}", format_minutes(s.holiday_work_minutes));
    Ok(())
}
