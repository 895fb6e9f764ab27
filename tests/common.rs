#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use dietlog::core::store::DietStore;
use dietlog::db::pool::DbPool;
use dietlog::models::record::Record;
use dietlog::models::slot::Slot;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn dtl() -> Command {
    cargo_bin_cmd!("dietlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dietlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

pub fn memory_store() -> DietStore {
    DietStore::new(DbPool::open_in_memory().expect("open in-memory db"))
}

pub fn breakfast(person: &str, date: &str, food: &str) -> Record {
    Record::new(person, date).with_slot(Slot::Breakfast, food)
}

pub fn count_rows(db_path: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM diet", [], |row| row.get(0))
        .expect("count rows")
}
