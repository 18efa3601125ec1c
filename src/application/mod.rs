//! Application layer services.
//!
//! Services consume the domain capability traits and provide the API a
//! download client uses around its station search.
//!
//! # Available Services
//!
//! - [`services::station_search::StationSearch`] - Query parameter merging and post-filtering

pub mod services;
