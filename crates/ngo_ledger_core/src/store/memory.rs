//! In-memory world-state store.

use super::{LedgerStore, StoreResult};
use std::collections::BTreeMap;

/// Ordered in-memory store, used by tests and ephemeral hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedgerStore {
    state: BTreeMap<String, String>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns stored keys in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.state.keys().map(String::as_str)
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn get_state(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.state.get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.state.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> StoreResult<()> {
        self.state.remove(key);
        Ok(())
    }
}
