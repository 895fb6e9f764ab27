//! Record store: CRUD over the `diet` table in external record form.
//!
//! Every operation is a single synchronous call on the owned connection.
//! "Not found" is `Ok(None)` (or a no-op for delete), never an error.
//! Nothing is logged here; failures are returned to the caller.

use crate::db::pool::DbPool;
use crate::db::queries::{self, StoredRecord};
use crate::errors::{AppError, AppResult};
use crate::models::record::Record;
use crate::utils::date::{MAX_STORAGE_DATE, date_to_storage_int, today};
use chrono::{Datelike, Days, NaiveDate};
use std::path::Path;

pub struct DietStore {
    pool: DbPool,
}

impl DietStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open or create the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        Ok(Self::new(DbPool::open(path)?))
    }

    pub fn close(self) -> AppResult<()> {
        self.pool.close()
    }

    /// Insert every record, or none of them.
    ///
    /// All records are encoded before any SQL runs, so an unknown person or a
    /// malformed date aborts the batch untouched. The inserts share one
    /// transaction, so a duplicate (person, date) also leaves nothing behind.
    pub fn create_batch(&mut self, records: &[Record]) -> AppResult<()> {
        let encoded = records
            .iter()
            .map(StoredRecord::encode)
            .collect::<AppResult<Vec<_>>>()?;

        if encoded.is_empty() {
            return Ok(());
        }

        let tx = self.pool.conn().unchecked_transaction()?;
        queries::insert_records(&tx, &encoded)?;
        tx.commit()?;
        Ok(())
    }

    /// Records dated within `[today, today + window_days]`.
    pub fn read_range(&self, window_days: u32) -> AppResult<Vec<Record>> {
        self.read_range_from(today(), window_days)
    }

    /// Records dated within `[from, from + window_days]`, in row order.
    /// The upper bound is clamped to the last storable date.
    /// A row that fails to decode fails the whole read.
    pub fn read_range_from(&self, from: NaiveDate, window_days: u32) -> AppResult<Vec<Record>> {
        let to = match from.checked_add_days(Days::new(u64::from(window_days))) {
            Some(till) if till.year() <= 9999 => date_to_storage_int(till)?,
            _ => MAX_STORAGE_DATE,
        };

        let rows = queries::load_range(self.pool.conn(), date_to_storage_int(from)?, to)?;

        rows.into_iter().map(StoredRecord::decode).collect()
    }

    pub fn read_by_id(&self, id: i64) -> AppResult<Option<Record>> {
        queries::load_by_id(self.pool.conn(), id)?
            .map(StoredRecord::decode)
            .transpose()
    }

    /// Replace person, date and all slots of record `record.id`.
    ///
    /// Returns the record as written, or `None` when no row has that id.
    pub fn update_by_id(&mut self, record: &Record) -> AppResult<Option<Record>> {
        let encoded = StoredRecord::encode(record)?;

        match queries::update_record(self.pool.conn(), &encoded)? {
            0 => Ok(None),
            1 => Ok(Some(encoded.decode()?)),
            // must not happen: id is the primary key
            affected => Err(AppError::AnomalousUpdate {
                id: record.id,
                affected,
            }),
        }
    }

    /// Delete record `id`. Deleting a missing id succeeds.
    pub fn delete_by_id(&mut self, id: i64) -> AppResult<()> {
        queries::delete_record(self.pool.conn(), id)?;
        Ok(())
    }
}
