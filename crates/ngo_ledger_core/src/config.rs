//! Host configuration for running the ledger core outside a ledger peer.
//!
//! # Responsibility
//! - Describe which world-state store backs invocations.
//! - Carry logging settings applied once at host startup.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Without overrides the host uses an in-memory store and no file logging.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Environment variable selecting a SQLite world-state file.
pub const ENV_DB_PATH: &str = "NGO_LEDGER_DB";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "NGO_LEDGER_LOG_LEVEL";
/// Environment variable enabling file logging under a directory.
pub const ENV_LOG_DIR: &str = "NGO_LEDGER_LOG_DIR";

/// World-state backend used by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Ephemeral state, discarded with the process.
    Memory,
    /// SQLite world-state file.
    Sqlite(PathBuf),
}

/// Resolved host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub store: StoreBackend,
    pub log_level: String,
    /// File logging is enabled only when set.
    pub log_dir: Option<PathBuf>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            store: StoreBackend::Memory,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl HostConfig {
    /// Builds configuration from process environment over defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup over defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = value(ENV_DB_PATH) {
            config.store = StoreBackend::Sqlite(PathBuf::from(path));
        }
        if let Some(level) = value(ENV_LOG_LEVEL) {
            config.log_level = level;
        }
        config.log_dir = value(ENV_LOG_DIR).map(PathBuf::from);
        config
    }
}
