//! Legacy datum definitions.
//!
//! Each legacy datum is related to WGS84 by a fixed affine approximation:
//!
//! ```text
//! legacy_lat = lat + lat_scale * lat - lat_from_lng * lng - lat_offset
//! legacy_lng = lng + lng_from_lat * lat + lng_scale * lng - lng_offset
//! ```
//!
//! The coefficients are compile-time constants. Adding a datum means adding a
//! variant and its coefficient set; the transform itself does not change.

use crate::error::{GeopinError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Affine coefficients from WGS84 to one legacy datum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatumCoefficients {
    pub lat_scale: f64,
    pub lat_from_lng: f64,
    pub lat_offset: f64,
    pub lng_from_lat: f64,
    pub lng_scale: f64,
    pub lng_offset: f64,
    /// Area where the approximation holds
    pub region: DatumRegion,
}

/// Bounding box in decimal degrees, inclusive on all edges
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DatumRegion {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl DatumRegion {
    pub fn to_rect(&self) -> geo::Rect<f64> {
        geo::Rect::new(
            geo::coord! { x: self.min_longitude, y: self.min_latitude },
            geo::coord! { x: self.max_longitude, y: self.max_latitude },
        )
    }
}

pub const TOKYO97: DatumCoefficients = DatumCoefficients {
    lat_scale: 0.000_106_96,
    lat_from_lng: 0.000_017_467,
    lat_offset: 0.004_602,
    lng_from_lat: 0.000_046_047,
    lng_scale: 0.000_083_049,
    lng_offset: 0.010_041,
    region: DatumRegion {
        min_latitude: 20.0,
        max_latitude: 46.0,
        min_longitude: 122.0,
        max_longitude: 154.0,
    },
};

/// Legacy geodetic datum a WGS84 point can be converted into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegacyDatum {
    /// Japanese Tokyo datum (EPSG:4301)
    #[default]
    Tokyo97,
}

impl LegacyDatum {
    pub fn coefficients(&self) -> &'static DatumCoefficients {
        match self {
            LegacyDatum::Tokyo97 => &TOKYO97,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LegacyDatum::Tokyo97 => "Tokyo97",
        }
    }

    pub fn epsg(&self) -> u32 {
        match self {
            LegacyDatum::Tokyo97 => 4301,
        }
    }
}

impl fmt::Display for LegacyDatum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LegacyDatum {
    type Err = GeopinError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "tokyo97" | "tokyo" | "epsg:4301" => Ok(LegacyDatum::Tokyo97),
            _ => Err(GeopinError::UnknownDatum { name: s.to_string() }),
        }
    }
}
