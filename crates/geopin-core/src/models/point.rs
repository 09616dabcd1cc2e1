//! Point and axis types shared by the formatter and its callers.

use crate::error::{GeopinError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A WGS84 position in decimal degrees.
///
/// No range checking happens here: values outside [-90, 90] / [-180, 180]
/// are carried as-is. Callers that need validation use
/// `geopin_geo::validation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Central Tokyo, the location shown when nothing else is selected.
    pub const fn tokyo() -> Self {
        Self::new(35.6762, 139.6503)
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::tokyo()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl FromStr for GeoPoint {
    type Err = GeopinError;

    /// Parse `"lat, lng"` as typed by a user.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| GeopinError::InvalidCoordinate {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected 'latitude, longitude'"))?;

        if lng.contains(',') {
            return Err(invalid("expected exactly two comma-separated values"));
        }

        let latitude = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(&format!("latitude: {}", e)))?;
        let longitude = lng
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(&format!("longitude: {}", e)))?;

        Ok(Self::new(latitude, longitude))
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(point: GeoPoint) -> Self {
        geo::Point::new(point.longitude, point.latitude)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(point: geo::Point<f64>) -> Self {
        Self::new(point.y(), point.x())
    }
}

/// Coordinate axis, used to pick the hemisphere letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl FromStr for Axis {
    type Err = GeopinError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "latitude" | "lat" => Ok(Axis::Latitude),
            "longitude" | "lng" | "lon" => Ok(Axis::Longitude),
            _ => Err(GeopinError::InvalidCoordinate {
                input: s.to_string(),
                reason: "axis must be latitude or longitude".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    N,
    S,
    E,
    W,
}

impl Hemisphere {
    /// Hemisphere of a signed decimal degree value.
    ///
    /// Zero, including negative zero, belongs to the positive hemisphere.
    /// NaN compares false and lands in S/W.
    pub fn of(decimal_degrees: f64, axis: Axis) -> Self {
        let positive = decimal_degrees >= 0.0;
        match (axis, positive) {
            (Axis::Latitude, true) => Hemisphere::N,
            (Axis::Latitude, false) => Hemisphere::S,
            (Axis::Longitude, true) => Hemisphere::E,
            (Axis::Longitude, false) => Hemisphere::W,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Hemisphere::N => 'N',
            Hemisphere::S => 'S',
            Hemisphere::E => 'E',
            Hemisphere::W => 'W',
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
