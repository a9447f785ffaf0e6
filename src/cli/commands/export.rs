use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let editor = ctx.open_editor()?;
        let mut confirm = ctx.confirmer();
        ExportLogic::export(editor.calendar(), format.clone(), file, *force, confirm.as_mut())?;
    }
    Ok(())
}
