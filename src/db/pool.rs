//! Owned SQLite handle with an explicit open/close lifecycle.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct DbPool {
    conn: Connection,
}

impl DbPool {
    /// Open (or create) the database file and bring its schema up to date.
    /// Safe to call repeatedly on the same path.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let conn = Connection::open(path)?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Release the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> AppResult<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
