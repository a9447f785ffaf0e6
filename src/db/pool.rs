//! SQLite connection wrapper (lightweight for CLI usage).

use super::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Opens the database file, creating it and its directory when missing,
    /// and applies pending migrations. Returns the names of the migrations
    /// applied by this call.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<(Self, Vec<&'static str>)> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        let applied = run_pending_migrations(&conn)?;
        Ok((Self { conn }, applied))
    }

    /// Private, fully migrated in-memory database.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        run_pending_migrations(&conn)?;
        Ok(Self { conn })
    }
}
