//! Snapshot store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist the placement snapshot under the fixed storage key.
//! - Degrade corrupt stored documents to "absent" instead of failing loads.
//!
//! # Invariants
//! - `save` overwrites unconditionally; there is no merge or versioning.
//! - `load` only errors on storage transport failures, never on content.

use crate::db::DbError;
use crate::model::snapshot::Snapshot;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key the snapshot document is stored under.
///
/// Matches the document contract of earlier builds; changing it orphans
/// every previously saved ranking.
pub const STORAGE_KEY: &str = "tierListState";

pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level store error. Content problems never surface here.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Durable storage seam for placement snapshots.
pub trait SnapshotStore {
    /// Serializes and stores the snapshot, replacing any prior value.
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()>;

    /// Retrieves the stored snapshot.
    ///
    /// `Ok(None)` when nothing is stored or the stored text does not match
    /// the expected shape; callers treat both identically.
    fn load(&self) -> StoreResult<Option<Snapshot>>;
}

/// `local_store`-table-backed snapshot store.
pub struct SqliteSnapshotStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSnapshotStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl SnapshotStore for SqliteSnapshotStore<'_> {
    fn save(&self, snapshot: &Snapshot) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO local_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![STORAGE_KEY, snapshot.to_json_string()],
        )?;
        debug!("event=snapshot_save module=store status=ok key={STORAGE_KEY}");
        Ok(())
    }

    fn load(&self) -> StoreResult<Option<Snapshot>> {
        let stored: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM local_store WHERE key = ?1;",
                [STORAGE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(text) = stored else {
            debug!("event=snapshot_load module=store status=absent key={STORAGE_KEY}");
            return Ok(None);
        };

        match Snapshot::from_json_str(&text) {
            Some(snapshot) => Ok(Some(snapshot)),
            None => {
                warn!(
                    "event=snapshot_load module=store status=corrupt key={STORAGE_KEY} len={}",
                    text.len()
                );
                Ok(None)
            }
        }
    }
}
