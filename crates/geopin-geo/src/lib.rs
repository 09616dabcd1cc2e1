//! Geopin Geo - Datum conversion and coordinate formatting
//!
//! Pure functions that turn a WGS84 point into the strings a map utility
//! displays: degrees/minutes/seconds, fixed-precision decimal degrees, and
//! millisecond integers, for WGS84 and for a legacy local datum.
//!
//! None of these functions fail. Non-finite input yields degenerate strings
//! rather than an error; callers that care check with [`validation`] first.

pub mod dms;
pub mod format;
pub mod links;
pub mod report;
pub mod transform;
pub mod validation;

pub use dms::{to_combined_dms, to_degrees_minutes_seconds};
pub use format::{to_decimal_string, to_milliseconds};
pub use links::MapLinks;
pub use report::{CoordinateFormats, LocationReport};
pub use transform::{convert_to_legacy_datum, convert_with};
