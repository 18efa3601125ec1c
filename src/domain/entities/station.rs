//! Station coordinates returned by a search.

use serde::{Deserialize, Serialize};

/// A station location discovered by a search, in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub network: String,
    pub station: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Station {
    pub fn new(
        network: impl Into<String>,
        station: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            network: network.into(),
            station: station.into(),
            latitude,
            longitude,
        }
    }

    /// Returns the `NET.STA` code.
    pub fn code(&self) -> String {
        format!("{}.{}", self.network, self.station)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_code() {
        let station = Station::new("IU", "ANMO", 34.9459, -106.4572);
        assert_eq!(station.code(), "IU.ANMO");
    }

    #[test]
    fn test_station_deserialize() {
        let station: Station = serde_json::from_str(
            r#"{"network":"GE","station":"WLF","latitude":49.66,"longitude":6.15}"#,
        )
        .unwrap();

        assert_eq!(station.network, "GE");
        assert_eq!(station.latitude, 49.66);
    }
}
