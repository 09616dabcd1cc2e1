//! Geopin Core - Domain models, errors, and configuration
//!
//! This crate contains the coordinate and datum types shared by the
//! formatter and the command-line controller.

pub mod config;
pub mod error;
pub mod models;

pub use error::{GeopinError, Result};
pub use models::{Axis, DatumCoefficients, GeoPoint, Hemisphere, LegacyDatum};
