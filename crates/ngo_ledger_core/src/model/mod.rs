//! Domain vocabulary for ledger entities.
//!
//! # Responsibility
//! - Name the entities stored in the ledger and their key namespaces.
//! - Define named-field request shapes for every ledger operation.
//!
//! # Invariants
//! - Entity values are opaque strings; this crate never interprets them.
//! - Positional argument order is decided once, in the invoke layer.

pub mod entity;
pub mod request;
