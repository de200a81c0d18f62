//! Ledger entity kinds and their key namespaces.

/// Composite key namespace for donation request records.
pub const DONATION_REQUEST_NAMESPACE: &str = "DonationRequest";
/// Composite key namespace for donation records.
pub const DONATION_NAMESPACE: &str = "Donation";

/// Logical entity stored in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Organization record keyed by its raw id.
    Ngo,
    /// Request record keyed by `(ngo_id, request_id)`.
    DonationRequest,
    /// Donation record keyed by `(ngo_id, donation_id)`.
    Donation,
}

impl EntityKind {
    /// Composite key namespace, or `None` for simple-keyed entities.
    pub fn namespace(self) -> Option<&'static str> {
        match self {
            Self::Ngo => None,
            Self::DonationRequest => Some(DONATION_REQUEST_NAMESPACE),
            Self::Donation => Some(DONATION_NAMESPACE),
        }
    }

    /// Human-readable label used in response messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ngo => "NGO",
            Self::DonationRequest => "Donation request",
            Self::Donation => "Donation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EntityKind;

    #[test]
    fn only_scoped_entities_have_namespaces() {
        assert_eq!(EntityKind::Ngo.namespace(), None);
        assert_eq!(
            EntityKind::DonationRequest.namespace(),
            Some("DonationRequest")
        );
        assert_eq!(EntityKind::Donation.namespace(), Some("Donation"));
    }
}
