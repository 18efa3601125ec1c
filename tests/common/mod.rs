#![allow(dead_code)]

use station_domains::prelude::*;

pub fn sample_stations() -> Vec<Station> {
    vec![
        Station::new("IU", "ANMO", 34.9459, -106.4572),
        Station::new("GE", "WLF", 49.6646, 6.1526),
        Station::new("II", "KDAK", 57.7828, -152.5835),
        Station::new("IU", "SNZO", -41.3087, 174.7043),
    ]
}

/// Caller-defined bounding box that answers point membership.
pub struct FilteringBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl GeographicDomain for FilteringBox {
    fn kind(&self) -> &'static str {
        "filtering_box"
    }

    fn get_query_parameters(&self) -> QueryParameters {
        Domain::rectangular(
            self.min_latitude,
            self.max_latitude,
            self.min_longitude,
            self.max_longitude,
        )
        .get_query_parameters()
    }

    fn is_in_domain(&self, latitude: f64, longitude: f64) -> Result<bool, DomainError> {
        Ok((self.min_latitude..=self.max_latitude).contains(&latitude)
            && (self.min_longitude..=self.max_longitude).contains(&longitude))
    }
}
