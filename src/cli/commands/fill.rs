use crate::cli::context::Context;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(ctx: &Context) -> AppResult<()> {
    let mut editor = ctx.open_editor()?;
    let mut confirm = ctx.confirmer();

    if !editor.fill_all(confirm.as_mut()) {
        info("Operation cancelled.");
        return Ok(());
    }

    ctx.save_editor(&editor)?;
    let month = editor.calendar().month.clone();
    ctx.audit("fill", &month, "bulk fill applied");
    success(format!("All rows of {} filled.", month));
    Ok(())
}
