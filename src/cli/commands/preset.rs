use crate::cli::context::{Context, require_row};
use crate::cli::parser::Commands;
use crate::core::RowAccess;
use crate::errors::{AppError, AppResult};
use crate::models::Field;
use crate::models::preset::find_preset;
use crate::ui::messages::{info, success};

/// Apply a named preset to one row. An empty name is the blank option.
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Preset { day, name } = cmd {
        let mut editor = ctx.open_editor()?;
        let row = require_row(&editor, *day)?;

        if name.trim().is_empty() {
            info("No preset selected; row left unchanged.");
            return Ok(());
        }

        if !row.is_enabled(Field::Preset) {
            return Err(AppError::FieldDisabled {
                day: *day,
                field: Field::Preset.name().to_string(),
            });
        }

        let row_contract = row.has_contract_selector().then(|| row.contract());
        let preset = find_preset(&ctx.cfg.presets, name.trim(), row_contract)
            .ok_or_else(|| AppError::UnknownPreset(name.clone()))?;

        editor.select_preset(*day, Some(preset));
        ctx.save_editor(&editor)?;
        success(format!("Preset '{}' applied to day {}.", preset.name, day));
    }
    Ok(())
}
