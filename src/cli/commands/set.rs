use crate::cli::context::{Context, require_row};
use crate::cli::parser::Commands;
use crate::core::row_state::RowStateLogic;
use crate::core::{DependentsNotifier, PresetSelectorSync, RowAccess};
use crate::errors::{AppError, AppResult};
use crate::models::{Field, TimeField, WorkType};
use crate::ui::messages::success;
use crate::utils::time::parse_optional_time;

fn ensure_enabled<R: RowAccess + ?Sized>(row: &R, field: Field) -> AppResult<()> {
    if row.is_enabled(field) {
        Ok(())
    } else {
        Err(AppError::FieldDisabled {
            day: row.day(),
            field: field.name().to_string(),
        })
    }
}

/// Edit a single row: contract first, then work type, then the inputs it enables.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Set {
        day,
        work_type,
        start,
        end,
        break_minutes,
        paid_leave,
        start_next_day,
        end_next_day,
        contract,
    } = cmd
    {
        let mut editor = ctx.open_editor()?;
        require_row(&editor, *day)?;

        // Parse everything before touching the row.
        let work_type = work_type
            .as_deref()
            .map(|c| WorkType::from_code(c).ok_or_else(|| AppError::InvalidWorkType(c.to_string())))
            .transpose()?;
        let start = start.as_deref().map(parse_optional_time).transpose()?;
        let end = end.as_deref().map(parse_optional_time).transpose()?;
        if let Some(flag) = paid_leave
            && *flag > 1
        {
            return Err(AppError::InvalidValue {
                field: "paid_leave".to_string(),
                value: flag.to_string(),
            });
        }

        let row = editor.row_mut(*day).ok_or(AppError::DayNotFound(*day))?;

        if let Some(c) = contract {
            if !row.has_contract_selector() {
                return Err(AppError::Calendar(format!("day {day} has no contract selector")));
            }
            let selection = Some(c.trim().to_string()).filter(|s| !s.is_empty());
            if row.contract() != selection.as_deref() {
                row.set_contract(selection);
                PresetSelectorSync.notify_dependents_changed(row);
            }
        }

        if let Some(wt) = work_type {
            RowStateLogic::apply(row, wt);
        }

        if let Some(t) = start {
            ensure_enabled(row, Field::StartTime)?;
            row.set_time(TimeField::Start, t);
        }
        if let Some(t) = end {
            ensure_enabled(row, Field::EndTime)?;
            row.set_time(TimeField::End, t);
        }
        if let Some(m) = break_minutes {
            ensure_enabled(row, Field::BreakMinutes)?;
            row.set_break_minutes(*m);
        }
        if let Some(flag) = paid_leave {
            ensure_enabled(row, Field::PaidLeave)?;
            row.set_paid_leave(*flag);
        }
        if let Some(v) = start_next_day {
            row.set_next_day(TimeField::Start, *v);
        }
        if let Some(v) = end_next_day {
            row.set_next_day(TimeField::End, *v);
        }

        ctx.save_editor(&editor)?;
        success(format!("Day {} updated.", day));
    }
    Ok(())
}
