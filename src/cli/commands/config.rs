use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        println!("📄 Current configuration ({}):\n", ctx.config_path.display());
        println!("{}", serde_yaml::to_string(&ctx.cfg)?);
    }
    Ok(())
}
