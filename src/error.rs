//! Error types for domain operations.

/// Errors raised by geographic domains.
///
/// Query parameter derivation never fails, so the only failure kind is a
/// domain that cannot answer point-membership questions. It is a contract
/// violation by the caller and is never recovered inside the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("is_in_domain is not implemented for the {domain} domain")]
    CapabilityNotImplemented { domain: &'static str },
}

impl DomainError {
    pub fn not_implemented(domain: &'static str) -> Self {
        Self::CapabilityNotImplemented { domain }
    }

    /// Returns true if the error signals an absent membership test.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::CapabilityNotImplemented { .. })
    }
}
