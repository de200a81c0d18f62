//! World-state store boundary.
//!
//! # Responsibility
//! - Define the four host primitives the ledger core consumes.
//! - Provide local stand-ins for the host store (memory and SQLite).
//!
//! # Invariants
//! - `put_state` is an unconditional upsert.
//! - `get_state` returns `None` for absent keys; it never invents values.
//! - Stores add no caching, batching or retries on top of the host.

use crate::db::DbError;
use crate::key::{self, KeyError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryLedgerStore;
pub use sqlite::SqliteLedgerStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure surfaced by the world-state store.
#[derive(Debug)]
pub enum StoreError {
    /// Key could not be built or validated.
    Key(KeyError),
    /// SQLite-backed store failure.
    Db(DbError),
    /// Failure reported by an external host binding.
    Host(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Key(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::Host(message) => write!(f, "{message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Key(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::Host(_) => None,
        }
    }
}

impl From<KeyError> for StoreError {
    fn from(value: KeyError) -> Self {
        Self::Key(value)
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

/// Key-value primitives provided by the host ledger runtime.
pub trait LedgerStore {
    /// Point read. `None` when the key is absent.
    fn get_state(&self, key: &str) -> StoreResult<Option<String>>;

    /// Unconditional upsert.
    fn put_state(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    fn delete_state(&mut self, key: &str) -> StoreResult<()>;

    /// Builds a composite key. Host bindings may override this with their own
    /// encoder as long as it stays collision-free.
    fn composite_key(&self, namespace: &str, parts: &[&str]) -> StoreResult<String> {
        Ok(key::composite_key(namespace, parts)?)
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for &mut S {
    fn get_state(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_state(key)
    }

    fn put_state(&mut self, key: &str, value: &str) -> StoreResult<()> {
        (**self).put_state(key, value)
    }

    fn delete_state(&mut self, key: &str) -> StoreResult<()> {
        (**self).delete_state(key)
    }

    fn composite_key(&self, namespace: &str, parts: &[&str]) -> StoreResult<String> {
        (**self).composite_key(namespace, parts)
    }
}
