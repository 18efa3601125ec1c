//! Geographic domains used to restrict station searches.

use crate::domain::capabilities::GeographicDomain;
use crate::domain::query_parameters::{
    LATITUDE, LONGITUDE, MAX_LATITUDE, MAX_LONGITUDE, MAX_RADIUS, MIN_LATITUDE, MIN_LONGITUDE,
    MIN_RADIUS, QueryParameters,
};
use serde::{Deserialize, Serialize};

/// An axis-aligned latitude/longitude bounding box, in degrees.
///
/// Bounds are not validated: `min_latitude > max_latitude` or values outside
/// the valid coordinate range are accepted and passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectangularDomain {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl RectangularDomain {
    pub fn new(min_latitude: f64, max_latitude: f64, min_longitude: f64, max_longitude: f64) -> Self {
        Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }
}

/// An annulus around a center point.
///
/// Radii are in degrees of arc from the center. Like [`RectangularDomain`],
/// nothing is validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularDomain {
    pub latitude: f64,
    pub longitude: f64,
    pub min_radius: f64,
    pub max_radius: f64,
}

impl CircularDomain {
    pub fn new(latitude: f64, longitude: f64, min_radius: f64, max_radius: f64) -> Self {
        Self {
            latitude,
            longitude,
            min_radius,
            max_radius,
        }
    }
}

/// A geographic region of interest for one download request.
///
/// The variant set is closed; [`GeographicDomain`] is the extension point for
/// anything more elaborate.
///
/// # Examples
///
/// ```
/// use station_domains::domain::entities::Domain;
/// use station_domains::domain::capabilities::GeographicDomain;
///
/// let domain = Domain::rectangular(-10.0, 10.0, -20.0, 20.0);
/// let params = domain.get_query_parameters();
/// assert_eq!(params.get("min_latitude"), Some(-10.0));
/// assert_eq!(params.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Domain {
    Rectangular(RectangularDomain),
    Circular(CircularDomain),
    Global,
}

impl Domain {
    pub fn rectangular(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self::Rectangular(RectangularDomain::new(
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        ))
    }

    pub fn circular(latitude: f64, longitude: f64, min_radius: f64, max_radius: f64) -> Self {
        Self::Circular(CircularDomain::new(
            latitude, longitude, min_radius, max_radius,
        ))
    }

    pub fn global() -> Self {
        Self::Global
    }
}

impl From<RectangularDomain> for Domain {
    fn from(domain: RectangularDomain) -> Self {
        Self::Rectangular(domain)
    }
}

impl From<CircularDomain> for Domain {
    fn from(domain: CircularDomain) -> Self {
        Self::Circular(domain)
    }
}

impl GeographicDomain for Domain {
    fn kind(&self) -> &'static str {
        match self {
            Domain::Rectangular(_) => "rectangular",
            Domain::Circular(_) => "circular",
            Domain::Global => "global",
        }
    }

    fn get_query_parameters(&self) -> QueryParameters {
        match self {
            Domain::Rectangular(r) => QueryParameters::new()
                .with(MIN_LATITUDE, r.min_latitude)
                .with(MAX_LATITUDE, r.max_latitude)
                .with(MIN_LONGITUDE, r.min_longitude)
                .with(MAX_LONGITUDE, r.max_longitude),
            Domain::Circular(c) => QueryParameters::new()
                .with(LATITUDE, c.latitude)
                .with(LONGITUDE, c.longitude)
                .with(MIN_RADIUS, c.min_radius)
                .with(MAX_RADIUS, c.max_radius),
            Domain::Global => QueryParameters::new(),
        }
    }

    // Membership is left to the provided implementation: none of the
    // variants answer it yet.
}
