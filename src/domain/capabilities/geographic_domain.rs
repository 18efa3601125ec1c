//! Capability trait shared by every geographic domain.

use crate::domain::query_parameters::QueryParameters;
use crate::error::DomainError;

/// A geographic region of interest used to parameterize a station search.
///
/// Implementors must describe themselves as query parameters. Point
/// membership is optional: the provided [`is_in_domain`](Self::is_in_domain)
/// reports [`DomainError::CapabilityNotImplemented`] and should only be
/// overridden by domains that can answer it.
///
/// # Implementations
///
/// - [`crate::domain::entities::Domain`] - rectangular, circular and global domains
/// - Custom domains defined by callers
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait GeographicDomain: Send + Sync {
    /// Short name of the domain kind, used in errors and logs.
    fn kind(&self) -> &'static str;

    /// Returns the parameters to merge into the outgoing query.
    ///
    /// The key set is either the rectangular style
    /// (`min_latitude`, `max_latitude`, `min_longitude`, `max_longitude`),
    /// the circular style (`latitude`, `longitude`, `min_radius`, `max_radius`)
    /// or empty for no geographic restriction.
    fn get_query_parameters(&self) -> QueryParameters;

    /// Returns whether the point (in degrees) lies inside the domain.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::CapabilityNotImplemented`] unless overridden.
    fn is_in_domain(&self, latitude: f64, longitude: f64) -> Result<bool, DomainError> {
        let _ = (latitude, longitude);
        Err(DomainError::not_implemented(self.kind()))
    }
}
