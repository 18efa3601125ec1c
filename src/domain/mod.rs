//! Domain layer: geographic regions and the capability they expose.
//!
//! # Architecture
//!
//! - [`entities`] - Domain variants and station points
//! - [`capabilities`] - The [`capabilities::GeographicDomain`] trait
//! - [`query_parameters`] - Parameter mapping and query style classification
//!
//! # Design Principles
//!
//! - No I/O: every operation is pure and synchronous
//! - Constructors never validate; bounds are the caller's responsibility
//! - Point membership is optional and fails loudly when absent

pub mod capabilities;
pub mod entities;
pub mod query_parameters;
