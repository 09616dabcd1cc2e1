//! Caller-side coordinate checks.
//!
//! The formatting functions accept any float. These helpers let a caller
//! decide whether a point is worth formatting before it does so.

use geo::Intersects;
use geopin_core::{GeoPoint, GeopinError, LegacyDatum, Result};

/// Validation result with details
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

/// Validation error with location details
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub location: String,
    pub reason: String,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid() -> Self {
        Self { is_valid: true, errors: Vec::new() }
    }

    /// Add an error to the result
    pub fn add_error(&mut self, location: String, reason: String) {
        self.is_valid = false;
        self.errors.push(ValidationError { location, reason });
    }
}

/// Check that both coordinates are finite and inside the WGS84 range
pub fn validate_point(point: &GeoPoint) -> ValidationResult {
    let mut result = ValidationResult::valid();
    check_axis(&mut result, "latitude", point.latitude, 90.0);
    check_axis(&mut result, "longitude", point.longitude, 180.0);
    result
}

fn check_axis(result: &mut ValidationResult, name: &str, value: f64, limit: f64) {
    if !value.is_finite() {
        result.add_error(name.to_string(), "Coordinate must be finite".to_string());
    } else if !(-limit..=limit).contains(&value) {
        result.add_error(
            name.to_string(),
            format!("{} is outside [-{}, {}]", value, limit, limit),
        );
    }
}

/// Validate a point, turning the first problem into an error
pub fn ensure_valid(point: &GeoPoint) -> Result<()> {
    let validation = validate_point(point);
    match validation.errors.into_iter().next() {
        None => Ok(()),
        Some(error) => Err(GeopinError::InvalidCoordinate {
            input: point.to_string(),
            reason: format!("{}: {}", error.location, error.reason),
        }),
    }
}

/// Whether `datum`'s affine approximation applies at `point`.
/// Region edges count as inside.
pub fn within_datum_region(point: &GeoPoint, datum: LegacyDatum) -> bool {
    let region = datum.coefficients().region.to_rect();
    geo::Point::from(*point).intersects(&region)
}
