use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension, Result};
use tracing::{info, warn};

const UNIQUE_INDEX: &str = "diet_user_id_date_uidx";

/// Check if the `diet` table exists.
fn diet_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='diet'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the (user_id, date) uniqueness index exists.
fn unique_index_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='index' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([UNIQUE_INDEX], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `diet` table with the current schema.
fn create_diet_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS diet (
            id            INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
            user_id       INTEGER NOT NULL,
            date          INTEGER NOT NULL,
            morning       TEXT,
            pre_breakfast TEXT,
            breakfast     TEXT,
            noon          TEXT,
            lunch         TEXT,
            evening       TEXT,
            dinner        TEXT,
            post_dinner   TEXT,
            night         TEXT
        );

        CREATE INDEX IF NOT EXISTS diet_user_id_date_idx ON diet (date, user_id);
        CREATE UNIQUE INDEX IF NOT EXISTS diet_user_id_date_uidx ON diet (user_id, date);
        "#,
    )?;
    Ok(())
}

/// Older databases were created without the (user_id, date) uniqueness
/// constraint. Add it, unless duplicates already exist.
fn migrate_add_unique_person_date(conn: &Connection) -> AppResult<()> {
    if unique_index_exists(conn)? {
        return Ok(());
    }

    let duplicates: i64 = conn.query_row(
        "SELECT COUNT(*) FROM (
             SELECT user_id, date FROM diet
             GROUP BY user_id, date
             HAVING COUNT(*) > 1
         )",
        [],
        |row| row.get(0),
    )?;

    if duplicates > 0 {
        warn!(duplicates, "diet table holds duplicate (person, date) rows");
        return Err(AppError::Migration(format!(
            "{} (person, date) pairs have more than one record; \
             remove the duplicates before upgrading",
            duplicates
        )));
    }

    conn.execute_batch(
        "CREATE UNIQUE INDEX IF NOT EXISTS diet_user_id_date_uidx ON diet (user_id, date);",
    )?;
    info!("added unique (person, date) index to diet table");
    Ok(())
}

/// Bring the schema up to date. Idempotent.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    if !diet_table_exists(conn)? {
        info!("creating diet table");
        create_diet_table(conn)?;
        return Ok(());
    }

    migrate_add_unique_person_date(conn)?;
    Ok(())
}
