//! Ledger operation table and positional argument parsing.
//!
//! This is the only place that knows the positional order of invocation
//! arguments. Create/update/donate take the entity id first and the NGO id
//! second; delete/query take the NGO id first. The order is kept for wire
//! compatibility with existing callers.

use crate::model::request::{
    Donate, DonationRequestRef, NgoRef, RegisterNgo, WriteDonationRequest,
};
use crate::service::entity_service::{EntityService, ServiceResult};
use crate::store::LedgerStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Argument count mismatch for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArityError {
    pub operation: Operation,
    pub actual: usize,
}

impl ArityError {
    pub fn expected(&self) -> usize {
        self.operation.arity()
    }
}

impl Display for ArityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.operation.usage())
    }
}

impl Error for ArityError {}

/// Named ledger operation accepted by the invoke boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    RegisterNgo,
    CreateDonationRequest,
    UpdateDonationRequest,
    DeleteDonationRequest,
    Donate,
    QueryNgo,
    QueryDonationRequest,
}

const ALL_OPERATIONS: &[Operation] = &[
    Operation::RegisterNgo,
    Operation::CreateDonationRequest,
    Operation::UpdateDonationRequest,
    Operation::DeleteDonationRequest,
    Operation::Donate,
    Operation::QueryNgo,
    Operation::QueryDonationRequest,
];

impl Operation {
    /// Every supported operation in declaration order.
    pub fn all() -> &'static [Operation] {
        ALL_OPERATIONS
    }

    /// Case-sensitive lookup by invocation function name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_OPERATIONS
            .iter()
            .copied()
            .find(|operation| operation.name() == name)
    }

    /// Stable invocation function name.
    pub fn name(self) -> &'static str {
        match self {
            Self::RegisterNgo => "registerNGO",
            Self::CreateDonationRequest => "createDonationRequest",
            Self::UpdateDonationRequest => "updateDonationRequest",
            Self::DeleteDonationRequest => "deleteDonationRequest",
            Self::Donate => "donate",
            Self::QueryNgo => "queryNGO",
            Self::QueryDonationRequest => "queryDonationRequest",
        }
    }

    /// Required positional argument count.
    pub fn arity(self) -> usize {
        match self {
            Self::QueryNgo => 1,
            Self::RegisterNgo | Self::DeleteDonationRequest | Self::QueryDonationRequest => 2,
            Self::CreateDonationRequest | Self::UpdateDonationRequest | Self::Donate => 3,
        }
    }

    /// Message returned on arity mismatch.
    pub fn usage(self) -> &'static str {
        match self {
            Self::RegisterNgo => "Expected 2 arguments: NGO ID and NGO Information",
            Self::CreateDonationRequest => {
                "Expected 3 arguments: Donation ID, NGO ID, and Donation Request Information"
            }
            Self::UpdateDonationRequest => {
                "Expected 3 arguments: Donation ID, NGO ID, and Updated Donation Request Information"
            }
            Self::DeleteDonationRequest | Self::QueryDonationRequest => {
                "Expected 2 arguments: NGO ID and Donation ID"
            }
            Self::Donate => "Expected 3 arguments: Donation ID, NGO ID, and Donation Amount",
            Self::QueryNgo => "Expected 1 argument: NGO ID",
        }
    }

    /// Parses positional arguments into this operation's typed request.
    pub fn parse_args(self, args: &[String]) -> Result<OperationRequest, ArityError> {
        let request = match self {
            Self::RegisterNgo => {
                let [ngo_id, info] = self.exact_args::<2>(args)?;
                OperationRequest::RegisterNgo(RegisterNgo { ngo_id, info })
            }
            Self::CreateDonationRequest => {
                let [request_id, ngo_id, info] = self.exact_args::<3>(args)?;
                OperationRequest::CreateDonationRequest(WriteDonationRequest {
                    request_id,
                    ngo_id,
                    info,
                })
            }
            Self::UpdateDonationRequest => {
                let [request_id, ngo_id, info] = self.exact_args::<3>(args)?;
                OperationRequest::UpdateDonationRequest(WriteDonationRequest {
                    request_id,
                    ngo_id,
                    info,
                })
            }
            Self::DeleteDonationRequest => {
                let [ngo_id, request_id] = self.exact_args::<2>(args)?;
                OperationRequest::DeleteDonationRequest(DonationRequestRef { ngo_id, request_id })
            }
            Self::Donate => {
                let [donation_id, ngo_id, amount] = self.exact_args::<3>(args)?;
                OperationRequest::Donate(Donate {
                    donation_id,
                    ngo_id,
                    amount,
                })
            }
            Self::QueryNgo => {
                let [ngo_id] = self.exact_args::<1>(args)?;
                OperationRequest::QueryNgo(NgoRef { ngo_id })
            }
            Self::QueryDonationRequest => {
                let [ngo_id, request_id] = self.exact_args::<2>(args)?;
                OperationRequest::QueryDonationRequest(DonationRequestRef { ngo_id, request_id })
            }
        };
        Ok(request)
    }

    fn exact_args<const N: usize>(self, args: &[String]) -> Result<[String; N], ArityError> {
        <[String; N]>::try_from(args.to_vec()).map_err(|_| ArityError {
            operation: self,
            actual: args.len(),
        })
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parsed, arity-checked request for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    RegisterNgo(RegisterNgo),
    CreateDonationRequest(WriteDonationRequest),
    UpdateDonationRequest(WriteDonationRequest),
    DeleteDonationRequest(DonationRequestRef),
    Donate(Donate),
    QueryNgo(NgoRef),
    QueryDonationRequest(DonationRequestRef),
}

impl OperationRequest {
    pub fn operation(&self) -> Operation {
        match self {
            Self::RegisterNgo(_) => Operation::RegisterNgo,
            Self::CreateDonationRequest(_) => Operation::CreateDonationRequest,
            Self::UpdateDonationRequest(_) => Operation::UpdateDonationRequest,
            Self::DeleteDonationRequest(_) => Operation::DeleteDonationRequest,
            Self::Donate(_) => Operation::Donate,
            Self::QueryNgo(_) => Operation::QueryNgo,
            Self::QueryDonationRequest(_) => Operation::QueryDonationRequest,
        }
    }

    /// Runs the request against `service` and returns the success payload.
    pub fn execute<S: LedgerStore>(&self, service: &mut EntityService<S>) -> ServiceResult<String> {
        match self {
            Self::RegisterNgo(request) => service.register_ngo(request),
            Self::CreateDonationRequest(request) => service.create_donation_request(request),
            Self::UpdateDonationRequest(request) => service.update_donation_request(request),
            Self::DeleteDonationRequest(request) => service.delete_donation_request(request),
            Self::Donate(request) => service.donate(request),
            Self::QueryNgo(request) => service.query_ngo(request),
            Self::QueryDonationRequest(request) => service.query_donation_request(request),
        }
    }
}
