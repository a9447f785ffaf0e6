use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Schema steps, applied in order. `PRAGMA user_version` records how many ran.
const MIGRATIONS: &[(&str, &str)] = &[
    (
        "create_log",
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    ),
    (
        "create_timecards",
        r#"
        CREATE TABLE IF NOT EXISTS timecards (
            id                  INTEGER PRIMARY KEY AUTOINCREMENT,
            month               TEXT NOT NULL,
            day                 INTEGER NOT NULL,
            work_type           TEXT NOT NULL DEFAULT '',
            start_time          TEXT NOT NULL DEFAULT '',
            start_time_next_day INTEGER NOT NULL DEFAULT 0,
            end_time            TEXT NOT NULL DEFAULT '',
            end_time_next_day   INTEGER NOT NULL DEFAULT 0,
            break_minutes       INTEGER NOT NULL DEFAULT 0,
            paid_leave          INTEGER NOT NULL DEFAULT 0,
            contract            TEXT,
            work_minutes        INTEGER NOT NULL DEFAULT 0,
            submitted_at        TEXT NOT NULL,
            UNIQUE(month, day)
        );

        CREATE INDEX IF NOT EXISTS idx_timecards_month ON timecards(month);
        "#,
    ),
];

fn current_version(conn: &Connection) -> AppResult<usize> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    usize::try_from(v).map_err(|_| AppError::Migration(format!("invalid schema version {v}")))
}

/// Apply every migration newer than the database's schema version.
/// Returns the names of the migrations applied.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    let start = current_version(conn)?;
    if start > MIGRATIONS.len() {
        return Err(AppError::Migration(format!(
            "database schema version {start} is newer than this program ({})",
            MIGRATIONS.len()
        )));
    }

    let mut applied = Vec::new();
    for (idx, (name, sql)) in MIGRATIONS.iter().enumerate().skip(start) {
        conn.execute_batch(sql)
            .map_err(|e| AppError::Migration(format!("{name}: {e}")))?;
        conn.pragma_update(None, "user_version", (idx + 1) as i64)?;
        applied.push(*name);
    }
    Ok(applied)
}
