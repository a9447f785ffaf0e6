use super::parser::Cli;
use super::prompt::StdinConfirm;
use crate::config::Config;
use crate::core::fill::FillHook;
use crate::core::{
    AlwaysConfirm, Confirm, DependentsNotifier, EditorOptions, PresetSelectorSync, RowAccess,
    TimecardCalendar,
};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{Calendar, DayRow};
use crate::ui::messages::warning;
use std::path::PathBuf;

/// Resolved configuration and file locations for one invocation.
pub struct Context {
    pub cfg: Config,
    pub config_path: PathBuf,
    pub db_path: PathBuf,
    pub calendar_path: PathBuf,
    pub assume_yes: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> AppResult<Self> {
        let config_path = cli.config.clone().unwrap_or_else(Config::config_file);
        let cfg = Config::load_from(&config_path)?;
        let db_path = cli.db.clone().unwrap_or_else(|| cfg.database_path());
        let calendar_path = cli.calendar.clone().unwrap_or_else(|| cfg.calendar_path());

        Ok(Self {
            cfg,
            config_path,
            db_path,
            calendar_path,
            assume_yes: cli.yes,
        })
    }

    pub fn confirmer(&self) -> Box<dyn Confirm> {
        if self.assume_yes {
            Box::new(AlwaysConfirm)
        } else {
            Box::new(StdinConfirm)
        }
    }

    /// Loads the calendar and binds an editor to it, with the contract
    /// auto-selection hook when `auto_contract` is configured.
    pub fn open_editor(&self) -> AppResult<TimecardCalendar> {
        let calendar = Calendar::load(&self.calendar_path)?;
        let mut options = EditorOptions::from_config(&self.cfg)?;
        if let Some(contract) = self.cfg.auto_contract.clone() {
            options = options.with_fill_hook(auto_contract_hook(contract));
        }
        Ok(TimecardCalendar::new(calendar, options))
    }

    pub fn save_editor(&self, editor: &TimecardCalendar) -> AppResult<()> {
        editor.calendar().save(&self.calendar_path)
    }

    pub fn open_db(&self) -> AppResult<DbPool> {
        let (pool, _) = DbPool::open(&self.db_path)?;
        Ok(pool)
    }

    /// Best-effort audit entry; failures only produce a warning.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        let res = self
            .open_db()
            .and_then(|pool| ttlog(&pool.conn, operation, target, message));
        if let Err(e) = res {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}

pub fn require_row(editor: &TimecardCalendar, day: u32) -> AppResult<&DayRow> {
    editor.row(day).ok_or(AppError::DayNotFound(day))
}

fn auto_contract_hook(contract: String) -> FillHook {
    Box::new(move |row: &mut dyn RowAccess| {
        if row.has_contract_selector() && row.contract().is_none() {
            row.set_contract(Some(contract.clone()));
            PresetSelectorSync.notify_dependents_changed(row);
        }
    })
}
