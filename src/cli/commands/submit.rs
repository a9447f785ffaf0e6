use crate::cli::context::Context;
use crate::core::SubmitDecision;
use crate::core::submit::SubmitLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, success};

/// Validate and store the calendar. Failing rows stay highlighted in the
/// calendar file and the command exits with an error.
pub fn handle(ctx: &Context) -> AppResult<()> {
    let mut editor = ctx.open_editor()?;
    let mut pool = ctx.open_db()?;

    let result = SubmitLogic::apply(&mut pool, &mut editor)?;
    ctx.save_editor(&editor)?;

    match result.decision() {
        SubmitDecision::Prevent => {
            if let Some(text) = result.alert_text() {
                error(text);
            }
            Err(AppError::ValidationFailed(result.errors.len()))
        }
        SubmitDecision::Proceed => {
            success(format!(
                "Timecard {} submitted ({} rows).",
                editor.calendar().month,
                editor.calendar().rows.len()
            ));
            Ok(())
        }
    }
}
