use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// Prepare a freshly opened connection: wait on a locked file instead of
/// failing at once, then bring the schema (slots + log) up to date.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    run_pending_migrations(conn)?;
    Ok(())
}
