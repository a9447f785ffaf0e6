use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::{AppError, AppResult};
use crate::models::Calendar;
use crate::ui::messages::success;
use crate::utils::date;

/// Create the calendar file for a month.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::New {
        month,
        holidays,
        contracts,
        force,
    } = cmd
    {
        let (year, m) = date::parse_month(month)?;

        if ctx.calendar_path.exists() && !*force {
            return Err(AppError::Calendar(format!(
                "{} already exists (use --force to replace it)",
                ctx.calendar_path.display()
            )));
        }

        let calendar = Calendar::for_month(year, m, holidays, *contracts)?;
        if let Some(bad) = holidays.iter().find(|d| calendar.row(**d).is_none()) {
            return Err(AppError::DayNotFound(*bad));
        }
        calendar.save(&ctx.calendar_path)?;

        ctx.audit(
            "new",
            &calendar.month,
            &format!("{} rows, {} holiday(s)", calendar.rows.len(), holidays.len()),
        );
        success(format!(
            "Calendar {} created at {}",
            calendar.month,
            ctx.calendar_path.display()
        ));
    }
    Ok(())
}
