//! Capability traits implemented by domain entities.
//!
//! Traits define the contract the search layer relies on:
//!
//! - [`GeographicDomain`] - query parameters plus optional point membership
//!
//! Mock implementations are auto-generated via `mockall` for testing.

pub mod geographic_domain;

pub use geographic_domain::GeographicDomain;

#[cfg(test)]
pub use geographic_domain::MockGeographicDomain;
