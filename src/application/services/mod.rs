//! Services for the application layer.

pub mod station_search;

pub use station_search::{PostFilter, SearchParameters, SearchValue, StationSearch};
