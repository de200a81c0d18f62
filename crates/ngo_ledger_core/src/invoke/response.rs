//! Uniform invocation response envelope.

use serde::{Deserialize, Serialize};

/// Failure category reported on error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Argument count did not match the operation.
    Arity,
    /// Existence precondition failed.
    NotFound,
    /// Function name is not a known operation.
    UnknownOperation,
    /// World-state store failed.
    HostStore,
    /// Caller-supplied id cannot be used as a key.
    InvalidKey,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arity => "arity",
            Self::NotFound => "not_found",
            Self::UnknownOperation => "unknown_operation",
            Self::HostStore => "host_store",
            Self::InvalidKey => "invalid_key",
        }
    }
}

/// Tagged outcome of one invocation.
///
/// Serialized as `{"status":"success","payload":...}` or
/// `{"status":"error","kind":...,"message":...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    Success { payload: String },
    Error { kind: ErrorKind, message: String },
}

impl Response {
    pub fn success(payload: impl Into<String>) -> Self {
        Self::Success {
            payload: payload.into(),
        }
    }

    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::Error {
            kind,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Error category, `None` for success.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Error { kind, .. } => Some(*kind),
        }
    }

    /// Human-readable payload or error message.
    pub fn message(&self) -> &str {
        match self {
            Self::Success { payload } => payload,
            Self::Error { message, .. } => message,
        }
    }
}
