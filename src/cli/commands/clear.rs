use crate::cli::context::Context;
use crate::core::PresetSelectorSync;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(ctx: &Context) -> AppResult<()> {
    let mut editor = ctx.open_editor()?;
    let mut confirm = ctx.confirmer();

    if !editor.clear_all(confirm.as_mut(), &mut PresetSelectorSync) {
        info("Operation cancelled.");
        return Ok(());
    }

    ctx.save_editor(&editor)?;
    let month = editor.calendar().month.clone();
    ctx.audit("clear", &month, "all rows cleared");
    success(format!("All rows of {} cleared.", month));
    Ok(())
}
