//! Core use-case services.
//!
//! # Responsibility
//! - Turn typed ledger requests into store reads and writes.
//! - Keep the invoke boundary decoupled from key layout and store details.

pub mod entity_service;
