//! Key-value slot repository contracts and backends.
//!
//! # Responsibility
//! - Provide the single persisted slot the task sequence is mirrored to.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `write` replaces the whole slot value; readers never observe partial
//!   payloads.
//! - SQLite-backed construction requires a fully migrated connection.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SlotResult<T> = Result<T, SlotError>;

/// Error for slot persistence operations.
#[derive(Debug)]
pub enum SlotError {
    /// Underlying SQLite/bootstrap error.
    Db(DbError),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing from the connected database.
    MissingRequiredTable(&'static str),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for SlotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Storage contract for the persisted slot.
///
/// The task store is generic over this trait so tests run against the
/// in-memory backend while the device uses SQLite.
pub trait SlotStore {
    /// Reads the current slot value; `None` when the slot was never written.
    fn read(&self, key: &str) -> SlotResult<Option<String>>;
    /// Replaces the slot value, overwriting any previous one.
    fn write(&mut self, key: &str, value: &str) -> SlotResult<()>;
}

impl<S: SlotStore + ?Sized> SlotStore for Box<S> {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> SlotResult<()> {
        (**self).write(key, value)
    }
}

/// SQLite-backed slot store over the device database.
pub struct SqliteSlotStore {
    conn: Connection,
}

impl SqliteSlotStore {
    /// Constructs a store from a migrated, ready connection.
    ///
    /// The connection is owned because view-facing callers hold the store
    /// for the whole process lifetime.
    ///
    /// # Errors
    /// - `UninitializedConnection` when migrations were never applied.
    /// - `MissingRequiredTable` when the `slots` table is absent.
    pub fn try_new(conn: Connection) -> SlotResult<Self> {
        ensure_connection_ready(&conn)?;
        Ok(Self { conn })
    }
}

impl SlotStore for SqliteSlotStore {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM slots WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }
}

/// In-memory slot store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> SlotResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> SlotResult<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn ensure_connection_ready(conn: &Connection) -> SlotResult<()> {
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(SlotError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let has_slots: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'slots'
        );",
        [],
        |row| row.get(0),
    )?;
    if has_slots == 0 {
        return Err(SlotError::MissingRequiredTable("slots"));
    }

    Ok(())
}
