use crate::errors::{AppError, AppResult};
use crate::models::person::{code_to_name, name_to_code};
use crate::models::record::Record;
use crate::utils::date::{iso_to_storage_int, storage_int_to_iso};
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};

const COLUMNS: &str = "user_id, date, morning, pre_breakfast, breakfast, noon, lunch, evening, dinner, post_dinner, night";
const ROW_PLACEHOLDERS: &str = "(?,?,?,?,?,?,?,?,?,?,?)";
const VALUES_PER_ROW: usize = 11;

/// Rows per INSERT statement, keeping bound parameters well under
/// SQLite's per-statement limit.
pub const INSERT_CHUNK_ROWS: usize = 500;

/// A record in storage form: person code and `YYYYMMDD` date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub id: i64,
    pub user_id: i64,
    pub date: i64,
    pub slots: [String; 9],
}

impl StoredRecord {
    pub fn encode(record: &Record) -> AppResult<Self> {
        Ok(Self {
            id: record.id,
            user_id: name_to_code(&record.person)?,
            date: iso_to_storage_int(&record.date)?,
            slots: record.slots().map(str::to_string),
        })
    }

    pub fn decode(self) -> AppResult<Record> {
        let [
            morning,
            pre_breakfast,
            breakfast,
            noon,
            lunch,
            evening,
            dinner,
            post_dinner,
            night,
        ] = self.slots;

        Ok(Record {
            id: self.id,
            person: code_to_name(self.user_id)?.to_string(),
            date: storage_int_to_iso(self.date)?,
            morning,
            pre_breakfast,
            breakfast,
            noon,
            lunch,
            evening,
            dinner,
            post_dinner,
            night,
        })
    }

    fn push_values(&self, out: &mut Vec<Value>) {
        out.push(Value::Integer(self.user_id));
        out.push(Value::Integer(self.date));
        out.extend(self.slots.iter().cloned().map(Value::Text));
    }
}

/// Slot columns are nullable in databases created by older builds.
fn slot(row: &Row, column: &str) -> rusqlite::Result<String> {
    Ok(row.get::<_, Option<String>>(column)?.unwrap_or_default())
}

pub fn map_row(row: &Row) -> rusqlite::Result<StoredRecord> {
    Ok(StoredRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date: row.get("date")?,
        slots: [
            slot(row, "morning")?,
            slot(row, "pre_breakfast")?,
            slot(row, "breakfast")?,
            slot(row, "noon")?,
            slot(row, "lunch")?,
            slot(row, "evening")?,
            slot(row, "dinner")?,
            slot(row, "post_dinner")?,
            slot(row, "night")?,
        ],
    })
}

/// Map a unique-index failure to `ConstraintViolation`, anything else to `Db`.
pub fn map_write_error(e: rusqlite::Error) -> AppError {
    match e {
        rusqlite::Error::SqliteFailure(err, msg)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::ConstraintViolation {
                detail: msg.unwrap_or_else(|| err.to_string()),
            }
        }
        other => AppError::Db(other),
    }
}

/// Insert already-encoded records with multi-row INSERT statements.
/// Callers wanting all-or-nothing semantics pass a transaction.
pub fn insert_records(conn: &Connection, records: &[StoredRecord]) -> AppResult<()> {
    for chunk in records.chunks(INSERT_CHUNK_ROWS) {
        let placeholders = vec![ROW_PLACEHOLDERS; chunk.len()].join(",");
        let sql = format!("INSERT INTO diet ({}) VALUES {}", COLUMNS, placeholders);

        let mut values = Vec::with_capacity(chunk.len() * VALUES_PER_ROW);
        for r in chunk {
            r.push_values(&mut values);
        }

        conn.execute(&sql, params_from_iter(values))
            .map_err(map_write_error)?;
    }
    Ok(())
}

/// Rows with `from <= date <= to`, in row order.
pub fn load_range(conn: &Connection, from: i64, to: i64) -> AppResult<Vec<StoredRecord>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM diet
         WHERE date >= ?1 AND date <= ?2
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(params![from, to], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_by_id(conn: &Connection, id: i64) -> AppResult<Option<StoredRecord>> {
    let row = conn
        .query_row("SELECT * FROM diet WHERE id = ?1", [id], map_row)
        .optional()?;
    Ok(row)
}

/// Replace every column except id. Returns the number of rows affected.
pub fn update_record(conn: &Connection, r: &StoredRecord) -> AppResult<usize> {
    let [
        morning,
        pre_breakfast,
        breakfast,
        noon,
        lunch,
        evening,
        dinner,
        post_dinner,
        night,
    ] = &r.slots;

    let affected = conn
        .execute(
            "UPDATE diet
             SET user_id = ?1, date = ?2,
                 morning = ?3, pre_breakfast = ?4, breakfast = ?5,
                 noon = ?6, lunch = ?7, evening = ?8,
                 dinner = ?9, post_dinner = ?10, night = ?11
             WHERE id = ?12",
            params![
                r.user_id,
                r.date,
                morning,
                pre_breakfast,
                breakfast,
                noon,
                lunch,
                evening,
                dinner,
                post_dinner,
                night,
                r.id,
            ],
        )
        .map_err(map_write_error)?;
    Ok(affected)
}

pub fn delete_record(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM diet WHERE id = ?1", [id])?)
}
