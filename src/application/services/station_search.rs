//! Station search preparation and client-side post-filtering.

use crate::domain::capabilities::GeographicDomain;
use crate::domain::entities::Station;
use crate::domain::query_parameters::serialize_number;
use crate::error::DomainError;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// A single value in an outgoing station query.
///
/// Numbers stay `f64` so domain bounds reach the query exactly as supplied,
/// including NaN and infinities.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SearchValue {
    Number(#[serde(serialize_with = "serialize_number")] f64),
    Text(String),
}

impl SearchValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            SearchValue::Number(value) => Some(*value),
            SearchValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SearchValue::Text(value) => Some(value),
            SearchValue::Number(_) => None,
        }
    }
}

impl From<f64> for SearchValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for SearchValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SearchValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Parameters of an outgoing station query.
pub type SearchParameters = BTreeMap<String, SearchValue>;

/// Result of applying a domain's membership test to search results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "filter", content = "stations", rename_all = "snake_case")]
pub enum PostFilter {
    /// The domain answered membership; only stations inside it are kept.
    Applied(Vec<Station>),
    /// The domain has no membership test; every station is kept.
    Unavailable(Vec<Station>),
}

impl PostFilter {
    pub fn stations(&self) -> &[Station] {
        match self {
            PostFilter::Applied(stations) | PostFilter::Unavailable(stations) => stations,
        }
    }

    pub fn into_stations(self) -> Vec<Station> {
        match self {
            PostFilter::Applied(stations) | PostFilter::Unavailable(stations) => stations,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, PostFilter::Applied(_))
    }
}

/// Prepares one station search for a single geographic domain.
///
/// Holds the domain for the duration of the request. Nothing here performs
/// network I/O: the caller executes the query with the merged parameters and
/// hands the discovered stations back for optional post-filtering.
pub struct StationSearch<D: GeographicDomain> {
    domain: D,
}

impl<D: GeographicDomain> StationSearch<D> {
    /// Creates a new station search.
    pub fn new(domain: D) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> &D {
        &self.domain
    }

    /// Merges the domain's query parameters into `base`.
    ///
    /// Domain parameters replace base entries with the same name. An empty
    /// domain mapping leaves `base` untouched, which omits geographic
    /// filtering from the query entirely.
    pub fn query_parameters(&self, mut base: SearchParameters) -> SearchParameters {
        let params = self.domain.get_query_parameters();

        debug!(
            domain = self.domain.kind(),
            style = ?params.style(),
            count = params.len(),
            "Merging domain query parameters"
        );

        for (name, value) in params.iter() {
            base.insert(name.to_string(), SearchValue::Number(value));
        }

        base
    }

    /// Keeps the stations that lie inside the domain.
    ///
    /// A domain without a membership test yields [`PostFilter::Unavailable`]
    /// with every station kept, instead of failing the whole search.
    ///
    /// # Errors
    ///
    /// Any error other than [`DomainError::CapabilityNotImplemented`] is
    /// propagated to the caller.
    pub fn post_filter(&self, stations: Vec<Station>) -> Result<PostFilter, DomainError> {
        let mut kept = Vec::with_capacity(stations.len());

        for station in &stations {
            match self.domain.is_in_domain(station.latitude, station.longitude) {
                Ok(true) => kept.push(station.clone()),
                Ok(false) => {}
                Err(e) if e.is_not_implemented() => {
                    debug!(
                        domain = self.domain.kind(),
                        "Post-filtering unavailable, keeping all {} stations",
                        stations.len()
                    );
                    return Ok(PostFilter::Unavailable(stations));
                }
                Err(e) => return Err(e),
            }
        }

        debug!(
            domain = self.domain.kind(),
            kept = kept.len(),
            dropped = stations.len() - kept.len(),
            "Post-filter applied"
        );

        Ok(PostFilter::Applied(kept))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::capabilities::MockGeographicDomain;
    use crate::domain::entities::Domain;
    use crate::domain::query_parameters::{LATITUDE, MAX_RADIUS, QueryParameters};

    fn stations() -> Vec<Station> {
        vec![
            Station::new("IU", "ANMO", 34.9459, -106.4572),
            Station::new("GE", "WLF", 49.6646, 6.1526),
            Station::new("II", "KDAK", 57.7828, -152.5835),
        ]
    }

    #[test]
    fn test_query_parameters_merge_overrides_base() {
        let mut mock = MockGeographicDomain::new();
        mock.expect_kind().return_const("mock");
        mock.expect_get_query_parameters().times(1).returning(|| {
            QueryParameters::new()
                .with(LATITUDE, 12.0)
                .with(MAX_RADIUS, 30.0)
        });

        let search = StationSearch::new(mock);

        let mut base = SearchParameters::new();
        base.insert("network".to_string(), "IU".into());
        base.insert("latitude".to_string(), 0.0.into());

        let merged = search.query_parameters(base);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged["network"].as_str(), Some("IU"));
        assert_eq!(merged["latitude"].as_f64(), Some(12.0));
        assert_eq!(merged["max_radius"].as_f64(), Some(30.0));
    }

    #[test]
    fn test_query_parameters_keep_non_finite_values() {
        let search = StationSearch::new(Domain::circular(f64::NAN, 0.0, 0.0, f64::INFINITY));

        let merged = search.query_parameters(SearchParameters::new());

        assert_eq!(merged.len(), 4);
        assert!(merged["latitude"].as_f64().is_some_and(f64::is_nan));
        assert_eq!(merged["longitude"].as_f64(), Some(0.0));
        assert_eq!(merged["min_radius"].as_f64(), Some(0.0));
        assert_eq!(merged["max_radius"].as_f64(), Some(f64::INFINITY));

        let json = serde_json::to_value(&merged).unwrap();
        assert_eq!(json["latitude"], "NaN");
        assert_eq!(json["max_radius"], "inf");
    }

    #[test]
    fn test_query_parameters_empty_domain_keeps_base() {
        let mut mock = MockGeographicDomain::new();
        mock.expect_kind().return_const("mock");
        mock.expect_get_query_parameters()
            .returning(QueryParameters::new);

        let search = StationSearch::new(mock);

        let mut base = SearchParameters::new();
        base.insert("channel".to_string(), "BH?".into());

        let merged = search.query_parameters(base.clone());
        assert_eq!(merged, base);
    }

    #[test]
    fn test_post_filter_applied() {
        let mut mock = MockGeographicDomain::new();
        mock.expect_kind().return_const("mock");
        mock.expect_is_in_domain()
            .times(3)
            .returning(|lat, _lon| Ok(lat > 40.0));

        let search = StationSearch::new(mock);
        let result = search.post_filter(stations()).unwrap();

        assert!(result.is_applied());
        let codes: Vec<String> = result.stations().iter().map(Station::code).collect();
        assert_eq!(codes, vec!["GE.WLF", "II.KDAK"]);
    }

    #[test]
    fn test_post_filter_unavailable_keeps_everything() {
        let mut mock = MockGeographicDomain::new();
        mock.expect_kind().return_const("mock");
        mock.expect_is_in_domain()
            .times(1)
            .returning(|_, _| Err(DomainError::not_implemented("mock")));

        let search = StationSearch::new(mock);
        let result = search.post_filter(stations()).unwrap();

        assert!(!result.is_applied());
        assert_eq!(result.into_stations(), stations());
    }

    #[test]
    fn test_post_filter_discards_partial_answers_when_unavailable() {
        let mut mock = MockGeographicDomain::new();
        mock.expect_kind().return_const("mock");

        let mut calls = 0;
        mock.expect_is_in_domain().times(2).returning(move |_, _| {
            calls += 1;
            if calls == 1 {
                Ok(false)
            } else {
                Err(DomainError::not_implemented("mock"))
            }
        });

        let search = StationSearch::new(mock);
        let result = search.post_filter(stations()).unwrap();

        assert_eq!(result, PostFilter::Unavailable(stations()));
    }

    #[test]
    fn test_post_filter_empty_input() {
        let mut mock = MockGeographicDomain::new();
        mock.expect_kind().return_const("mock");
        mock.expect_is_in_domain().never();

        let search = StationSearch::new(mock);
        let result = search.post_filter(Vec::new()).unwrap();

        assert_eq!(result, PostFilter::Applied(Vec::new()));
    }

    #[test]
    fn test_post_filter_serializes_tagged() {
        let filter = PostFilter::Unavailable(vec![Station::new("IU", "ANMO", 1.0, 2.0)]);
        let json = serde_json::to_value(&filter).unwrap();

        assert_eq!(json["filter"], "unavailable");
        assert_eq!(json["stations"][0]["station"], "ANMO");
    }
}
