use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        [chrono::Local::now().to_rfc3339().as_str(), version, message],
    )?;
    Ok(())
}

/// Key-value slots holding the serialized collections.
fn create_slots_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            key    TEXT PRIMARY KEY,
            value  TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn migrate_add_slot_timestamp(conn: &Connection) -> Result<()> {
    let version = "20250310_0002_slot_updated_at";

    if is_applied(conn, version)? {
        return Ok(());
    }

    if !table_has_column(conn, "slots", "updated_at")? {
        conn.execute(
            "ALTER TABLE slots ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
            [],
        )?;
    }

    mark_applied(conn, version, "Added updated_at to slots")?;
    success(format!(
        "Migration applied: {} → added 'updated_at' to slots table",
        version
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db() and every time the store is opened.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Slots table
    if !table_exists(conn, "slots")? {
        create_slots_table(conn)?;
        mark_applied(conn, "20250301_0001_create_slots", "Created slots table")?;
    }

    // 3) Incremental upgrades
    migrate_add_slot_timestamp(conn)?;

    Ok(())
}
