//! Entity lifecycle service over the world-state store.
//!
//! # Responsibility
//! - Implement the NGO, donation request and donation use-cases.
//! - Derive every physical key through the key codec.
//!
//! # Invariants
//! - Create paths (`register_ngo`, `create_donation_request`, `donate`)
//!   overwrite unconditionally.
//! - Update, delete and query paths require an existing record, where a
//!   stored empty string counts as absent.
//! - The service holds no state between calls beyond its store handle.

use crate::key::{simple_key, KeyError};
use crate::logging::log_field;
use crate::model::entity::{EntityKind, DONATION_NAMESPACE, DONATION_REQUEST_NAMESPACE};
use crate::model::request::{
    Donate, DonationRequestRef, NgoRef, RegisterNgo, WriteDonationRequest,
};
use crate::store::{LedgerStore, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for entity use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Existence precondition failed.
    NotFound { entity: EntityKind, id: String },
    /// Caller-supplied id cannot be used as a key.
    InvalidKey(KeyError),
    /// World-state store failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { entity, id } => write!(f, "{} not found: {id}", entity.label()),
            Self::InvalidKey(err) => write!(f, "invalid key: {err}"),
            Self::Store(err) => write!(f, "ledger store failure: {err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound { .. } => None,
            Self::InvalidKey(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::Key(err) => Self::InvalidKey(err),
            other => Self::Store(other),
        }
    }
}

impl From<KeyError> for ServiceError {
    fn from(value: KeyError) -> Self {
        Self::InvalidKey(value)
    }
}

/// Returns whether a stored value counts as an existing record.
pub fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

/// Use-case service for ledger entities.
pub struct EntityService<S: LedgerStore> {
    store: S,
}

impl<S: LedgerStore> EntityService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Registers or overwrites an NGO record.
    pub fn register_ngo(&mut self, request: &RegisterNgo) -> ServiceResult<String> {
        let key = simple_key(&request.ngo_id)?;
        self.store.put_state(key, &request.info)?;

        info!(
            "event=ngo_register module=service status=ok ngo_id={}",
            log_field(&request.ngo_id)
        );
        Ok(format!("NGO registered successfully: {}", request.ngo_id))
    }

    /// Returns stored NGO info.
    pub fn query_ngo(&self, request: &NgoRef) -> ServiceResult<String> {
        let key = simple_key(&request.ngo_id)?;
        self.existing_state(key, EntityKind::Ngo, &request.ngo_id)
    }

    /// Creates or overwrites a donation request without an existence check.
    pub fn create_donation_request(
        &mut self,
        request: &WriteDonationRequest,
    ) -> ServiceResult<String> {
        let key = self.donation_request_key(&request.ngo_id, &request.request_id)?;
        self.store.put_state(&key, &request.info)?;

        info!(
            "event=donation_request_create module=service status=ok ngo_id={} request_id={}",
            log_field(&request.ngo_id),
            log_field(&request.request_id)
        );
        Ok(format!(
            "Donation request created successfully: {}",
            request.request_id
        ))
    }

    /// Replaces an existing donation request.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no non-empty record exists.
    pub fn update_donation_request(
        &mut self,
        request: &WriteDonationRequest,
    ) -> ServiceResult<String> {
        let key = self.donation_request_key(&request.ngo_id, &request.request_id)?;
        self.existing_state(&key, EntityKind::DonationRequest, &request.request_id)?;
        self.store.put_state(&key, &request.info)?;

        info!(
            "event=donation_request_update module=service status=ok ngo_id={} request_id={}",
            log_field(&request.ngo_id),
            log_field(&request.request_id)
        );
        Ok(format!(
            "Donation request updated successfully: {}",
            request.request_id
        ))
    }

    /// Deletes an existing donation request.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` when no non-empty record exists, including a
    ///   repeated delete of the same record.
    pub fn delete_donation_request(
        &mut self,
        request: &DonationRequestRef,
    ) -> ServiceResult<String> {
        let key = self.donation_request_key(&request.ngo_id, &request.request_id)?;
        self.existing_state(&key, EntityKind::DonationRequest, &request.request_id)?;
        self.store.delete_state(&key)?;

        info!(
            "event=donation_request_delete module=service status=ok ngo_id={} request_id={}",
            log_field(&request.ngo_id),
            log_field(&request.request_id)
        );
        Ok(format!(
            "Donation request deleted successfully: {}",
            request.request_id
        ))
    }

    /// Returns stored donation request info.
    pub fn query_donation_request(&self, request: &DonationRequestRef) -> ServiceResult<String> {
        let key = self.donation_request_key(&request.ngo_id, &request.request_id)?;
        self.existing_state(&key, EntityKind::DonationRequest, &request.request_id)
    }

    /// Records or overwrites a donation amount.
    pub fn donate(&mut self, request: &Donate) -> ServiceResult<String> {
        let key = self.store.composite_key(
            DONATION_NAMESPACE,
            &[request.ngo_id.as_str(), request.donation_id.as_str()],
        )?;
        self.store.put_state(&key, &request.amount)?;

        info!(
            "event=donation_record module=service status=ok ngo_id={} donation_id={}",
            log_field(&request.ngo_id),
            log_field(&request.donation_id)
        );
        Ok(format!("Donation made successfully: {}", request.donation_id))
    }

    fn donation_request_key(&self, ngo_id: &str, request_id: &str) -> ServiceResult<String> {
        Ok(self
            .store
            .composite_key(DONATION_REQUEST_NAMESPACE, &[ngo_id, request_id])?)
    }

    fn existing_state(&self, key: &str, entity: EntityKind, id: &str) -> ServiceResult<String> {
        match self.store.get_state(key)? {
            Some(value) if is_present(Some(value.as_str())) => Ok(value),
            _ => {
                debug!(
                    "event=state_lookup module=service status=missing entity={} id={}",
                    entity.label(),
                    log_field(id)
                );
                Err(ServiceError::NotFound {
                    entity,
                    id: id.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{is_present, EntityService, ServiceError};
    use crate::key::KeyError;
    use crate::model::entity::EntityKind;
    use crate::model::request::{NgoRef, RegisterNgo};
    use crate::store::{LedgerStore, MemoryLedgerStore};

    #[test]
    fn empty_and_absent_values_are_not_present() {
        assert!(!is_present(None));
        assert!(!is_present(Some("")));
        assert!(is_present(Some(" ")));
    }

    #[test]
    fn register_rejects_empty_ngo_id_without_writing() {
        let mut service = EntityService::new(MemoryLedgerStore::new());
        let err = service
            .register_ngo(&RegisterNgo {
                ngo_id: String::new(),
                info: "info".to_string(),
            })
            .expect_err("empty id must fail");
        assert!(matches!(err, ServiceError::InvalidKey(KeyError::EmptyKey)));
        assert!(service.store().is_empty());
    }

    #[test]
    fn stored_empty_value_reads_as_not_found() {
        let mut store = MemoryLedgerStore::new();
        store.put_state("ngo1", "").expect("seed empty");
        let service = EntityService::new(store);

        let err = service
            .query_ngo(&NgoRef {
                ngo_id: "ngo1".to_string(),
            })
            .expect_err("empty value must be treated as absent");
        assert!(matches!(
            err,
            ServiceError::NotFound { entity: EntityKind::Ngo, ref id } if id == "ngo1"
        ));
        assert_eq!(err.to_string(), "NGO not found: ngo1");
    }
}
