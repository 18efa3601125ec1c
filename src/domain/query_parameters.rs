//! Query parameters emitted by geographic domains.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::BTreeMap;

pub const MIN_LATITUDE: &str = "min_latitude";
pub const MAX_LATITUDE: &str = "max_latitude";
pub const MIN_LONGITUDE: &str = "min_longitude";
pub const MAX_LONGITUDE: &str = "max_longitude";

pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const MIN_RADIUS: &str = "min_radius";
pub const MAX_RADIUS: &str = "max_radius";

const RECTANGULAR_KEYS: [&str; 4] = [MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE];
const CIRCULAR_KEYS: [&str; 4] = [LATITUDE, LONGITUDE, MAX_RADIUS, MIN_RADIUS];

/// Query style recognized by the downstream station service.
///
/// The rectangular and circular key sets are mutually exclusive. An empty
/// parameter set means no geographic restriction at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStyle {
    Rectangular,
    Circular,
    Unrestricted,
    /// Key set produced by a custom domain that matches neither style.
    Custom,
}

/// Mapping from query parameter name to its numeric value.
///
/// Keys are kept sorted so serialized output is stable. Values are never
/// validated, so non-finite numbers are carried as-is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameters(BTreeMap<&'static str, f64>);

impl QueryParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value under the same name.
    pub fn with(mut self, name: &'static str, value: f64) -> Self {
        self.0.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    /// Classifies the key set into one of the accepted query styles.
    pub fn style(&self) -> QueryStyle {
        if self.0.is_empty() {
            return QueryStyle::Unrestricted;
        }

        let keys: Vec<&str> = self.0.keys().copied().collect();
        if keys == RECTANGULAR_KEYS {
            QueryStyle::Rectangular
        } else if keys == CIRCULAR_KEYS {
            QueryStyle::Circular
        } else {
            QueryStyle::Custom
        }
    }
}

impl Serialize for QueryParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, &Number(*value))?;
        }
        map.end()
    }
}

/// Serializes a parameter value without losing non-finite numbers.
///
/// JSON has no NaN or infinity, so those are written as `"NaN"`, `"inf"` and
/// `"-inf"` instead of collapsing to `null`.
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

struct Number(f64);

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_number(&self.0, serializer)
    }
}

impl FromIterator<(&'static str, f64)> for QueryParameters {
    fn from_iter<I: IntoIterator<Item = (&'static str, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
