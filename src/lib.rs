//! rTimecard library root.
//! Exposes the timecard calendar editor core, its storage and the CLI front end.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::context::Context;
use cli::parser::{Cli, Commands};
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::New { .. } => cli::commands::new::handle(&cli.command, ctx),
        Commands::Show => cli::commands::show::handle(ctx),
        Commands::Set { .. } => cli::commands::set::handle(&cli.command, ctx),
        Commands::Preset { .. } => cli::commands::preset::handle(&cli.command, ctx),
        Commands::Fill => cli::commands::fill::handle(ctx),
        Commands::Clear => cli::commands::clear::handle(ctx),
        Commands::Submit => cli::commands::submit::handle(ctx),
        Commands::Summary => cli::commands::summary::handle(ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once and path overrides are resolved here.
    let ctx = Context::from_cli(&cli)?;

    dispatch(&cli, &ctx)
}
