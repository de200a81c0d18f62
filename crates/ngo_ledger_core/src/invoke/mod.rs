//! Host-facing invoke boundary.
//!
//! # Responsibility
//! - Map a function name plus positional string arguments to one ledger
//!   operation and run it against the supplied store.
//! - Fold every outcome into a tagged `Response`.
//!
//! # Invariants
//! - Unknown names and arity mismatches never touch the store.
//! - No failure escapes as a panic; every error becomes an error response.
//! - Invocations are independent; nothing is carried between calls.

use crate::logging::log_field;
use crate::service::entity_service::{EntityService, ServiceError};
use crate::store::LedgerStore;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

pub mod operation;
pub mod response;

pub use operation::{ArityError, Operation, OperationRequest};
pub use response::{ErrorKind, Response};

/// Payload returned by the lifecycle `init` call.
pub const INIT_PAYLOAD: &str = "NGO Chaincode Initialized";

pub type InvokeResult<T> = Result<T, InvokeError>;

/// Invocation failure before it is folded into a `Response`.
#[derive(Debug)]
pub enum InvokeError {
    UnknownOperation(String),
    Arity(ArityError),
    Service(ServiceError),
}

impl InvokeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownOperation(_) => ErrorKind::UnknownOperation,
            Self::Arity(_) => ErrorKind::Arity,
            Self::Service(ServiceError::NotFound { .. }) => ErrorKind::NotFound,
            Self::Service(ServiceError::InvalidKey(_)) => ErrorKind::InvalidKey,
            Self::Service(ServiceError::Store(_)) => ErrorKind::HostStore,
        }
    }
}

impl Display for InvokeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOperation(name) => write!(f, "Invalid function name: {name}"),
            Self::Arity(err) => write!(f, "{err}"),
            Self::Service(err) => write!(f, "{err}"),
        }
    }
}

impl Error for InvokeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownOperation(_) => None,
            Self::Arity(err) => Some(err),
            Self::Service(err) => Some(err),
        }
    }
}

impl From<ArityError> for InvokeError {
    fn from(value: ArityError) -> Self {
        Self::Arity(value)
    }
}

impl From<ServiceError> for InvokeError {
    fn from(value: ServiceError) -> Self {
        Self::Service(value)
    }
}

impl From<InvokeResult<String>> for Response {
    fn from(value: InvokeResult<String>) -> Self {
        match value {
            Ok(payload) => Self::success(payload),
            Err(err) => Self::error(err.kind(), err.to_string()),
        }
    }
}

/// Lifecycle call run once when the ledger code is instantiated.
///
/// Performs no state access and always succeeds.
pub fn init() -> Response {
    info!(
        "event=ledger_init module=invoke status=ok version={}",
        crate::core_version()
    );
    Response::success(INIT_PAYLOAD)
}

/// Runs one named operation against `store`.
pub fn invoke<S: LedgerStore>(store: &mut S, function: &str, args: &[String]) -> Response {
    let started_at = Instant::now();
    let result = dispatch(store, function, args);

    match &result {
        Ok(_) => info!(
            "event=invoke module=invoke status=ok function={} duration_ms={}",
            log_field(function),
            started_at.elapsed().as_millis()
        ),
        Err(err) => warn!(
            "event=invoke module=invoke status=error function={} error_kind={} duration_ms={} error={}",
            log_field(function),
            err.kind().as_str(),
            started_at.elapsed().as_millis(),
            log_field(&err.to_string())
        ),
    }

    Response::from(result)
}

/// Resolves, parses and executes one invocation without folding the result.
pub fn dispatch<S: LedgerStore>(
    store: &mut S,
    function: &str,
    args: &[String],
) -> InvokeResult<String> {
    let operation = Operation::from_name(function)
        .ok_or_else(|| InvokeError::UnknownOperation(function.to_string()))?;
    let request = operation.parse_args(args)?;
    let mut service = EntityService::new(store);
    Ok(request.execute(&mut service)?)
}
