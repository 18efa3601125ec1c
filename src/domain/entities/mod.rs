//! Core domain entities.
//!
//! Entities are immutable value objects set once at construction.
//!
//! # Entity Types
//!
//! - [`Domain`] - Rectangular, circular or global region of interest
//! - [`Station`] - A station location returned by a search

pub mod domain;
pub mod station;

pub use domain::{CircularDomain, Domain, RectangularDomain};
pub use station::Station;
