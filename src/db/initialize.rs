//! Per-connection setup, run every time a database is opened.

use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::time::Duration;

/// How long a writer waits on a lock held by another process (e.g. the CLI
/// writing while `serve` runs against the same file) before failing.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Configure the connection, then bring the schema up to date.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    run_pending_migrations(conn)?;
    Ok(())
}
