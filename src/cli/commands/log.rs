use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Log { print } = cmd
        && *print
    {
        let mut pool = ctx.open_db()?;
        LogLogic::print_log(&mut pool)?;
    }
    Ok(())
}
