use crate::cli::context::Context;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (only when missing)
///  - the SQLite database and all pending migrations
pub fn handle(ctx: &Context) -> AppResult<()> {
    if ctx.config_path.exists() {
        println!("📄 Config file : {} (kept)", ctx.config_path.display());
    } else {
        ctx.cfg.save_to(&ctx.config_path)?;
        println!("📄 Config file : {}", ctx.config_path.display());
    }

    let (_, applied) = DbPool::open(&ctx.db_path)?;
    println!("🗄️  Database   : {}", ctx.db_path.display());
    if applied.is_empty() {
        info("Database schema already up to date.");
    } else {
        info(format!("Applied migrations: {}", applied.join(", ")));
    }

    ctx.audit(
        "init",
        "",
        &format!("Database initialized at {}", ctx.db_path.display()),
    );
    success("rTimecard initialization completed!");
    Ok(())
}
