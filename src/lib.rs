//! # Station Domains
//!
//! Geographic domain descriptors used to parameterize station and data
//! download queries.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Domain variants, the capability trait and query parameters
//! - **Application Layer** ([`application`]) - Merging parameters into a search and post-filtering results
//!
//! ## Domains
//!
//! - Rectangular: a latitude/longitude bounding box
//! - Circular: an annulus around a center point
//! - Global: no geographic restriction
//!
//! Every domain describes itself as query parameters. Point membership
//! ([`domain::capabilities::GeographicDomain::is_in_domain`]) is optional and
//! reports [`DomainError::CapabilityNotImplemented`] when a domain does not
//! provide it.
//!
//! ## Configuration
//!
//! The command line tool reads its settings from environment variables via
//! [`config::Config`].

pub mod application;
pub mod config;
pub mod domain;
pub mod error;

pub use error::DomainError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{
        PostFilter, SearchParameters, SearchValue, StationSearch,
    };
    pub use crate::domain::capabilities::GeographicDomain;
    pub use crate::domain::entities::{CircularDomain, Domain, RectangularDomain, Station};
    pub use crate::domain::query_parameters::{QueryParameters, QueryStyle};
    pub use crate::error::DomainError;
}
