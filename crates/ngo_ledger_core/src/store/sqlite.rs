//! SQLite-backed world-state store.
//!
//! # Invariants
//! - One row per key in `world_state`; writes are upserts.
//! - The connection must come from `db::open_db*` so the schema exists.

use super::{LedgerStore, StoreResult};
use rusqlite::{params, Connection, OptionalExtension};

/// World-state store over a migrated SQLite connection.
pub struct SqliteLedgerStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLedgerStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl LedgerStore for SqliteLedgerStore<'_> {
    fn get_state(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM world_state WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn put_state(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO world_state (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM world_state WHERE key = ?1;", [key])?;
        Ok(())
    }
}
