//! Named-field request models for ledger operations.

/// Registers (or overwrites) an NGO record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterNgo {
    pub ngo_id: String,
    /// Opaque organization metadata.
    pub info: String,
}

/// Addresses one NGO record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgoRef {
    pub ngo_id: String,
}

/// Writes a donation request; shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteDonationRequest {
    pub request_id: String,
    pub ngo_id: String,
    /// Opaque request metadata.
    pub info: String,
}

/// Addresses one donation request record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationRequestRef {
    pub ngo_id: String,
    pub request_id: String,
}

/// Records a donation to an NGO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donate {
    pub donation_id: String,
    pub ngo_id: String,
    /// Opaque amount representation.
    pub amount: String,
}
