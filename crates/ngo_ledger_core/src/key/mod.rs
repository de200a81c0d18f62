//! Key derivation for the flat ledger key space.
//!
//! # Responsibility
//! - Map logical entity identities to physical store keys.
//! - Keep simple keys (NGO ids) and composite keys from ever colliding.
//!
//! # Invariants
//! - Composite keys always start with `COMPOSITE_KEY_DELIMITER`.
//! - Simple keys are non-empty and never start with `COMPOSITE_KEY_DELIMITER`.
//! - Identical `(namespace, parts)` tuples encode to identical keys; distinct
//!   tuples never share a key.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod codec;

pub use codec::{composite_key, simple_key, split_composite_key, CompositeKey};

/// Separator between composite key segments.
pub const COMPOSITE_KEY_DELIMITER: char = '\u{0}';

pub type KeyResult<T> = Result<T, KeyError>;

/// Key construction and parsing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Composite key namespace was empty.
    EmptyNamespace,
    /// Simple key was empty.
    EmptyKey,
    /// Simple key starts with the composite key delimiter.
    ReservedPrefix(String),
    /// Stored key could not be decoded as a composite key.
    Malformed(String),
}

impl Display for KeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyNamespace => write!(f, "composite key namespace must not be empty"),
            Self::EmptyKey => write!(f, "key must not be empty"),
            Self::ReservedPrefix(key) => write!(
                f,
                "key `{}` starts with the reserved composite key prefix",
                key.escape_default()
            ),
            Self::Malformed(details) => write!(f, "malformed composite key: {details}"),
        }
    }
}

impl Error for KeyError {}
