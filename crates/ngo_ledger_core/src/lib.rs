//! Core ledger logic for NGO donation tracking.
//! This crate owns the key layout and every state transition over the host
//! world-state store.

pub mod config;
pub mod db;
pub mod invoke;
pub mod key;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::{HostConfig, StoreBackend};
pub use invoke::{dispatch, init, invoke, ErrorKind, InvokeError, Operation, Response};
pub use key::{composite_key, simple_key, split_composite_key, CompositeKey, KeyError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::entity::{EntityKind, DONATION_NAMESPACE, DONATION_REQUEST_NAMESPACE};
pub use model::request::{Donate, DonationRequestRef, NgoRef, RegisterNgo, WriteDonationRequest};
pub use service::entity_service::{EntityService, ServiceError, ServiceResult};
pub use store::{LedgerStore, MemoryLedgerStore, SqliteLedgerStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
