//! Links that open a point in public web maps

use geopin_core::GeoPoint;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapLinks {
    pub google_maps: String,
    pub openstreetmap: String,
}

impl MapLinks {
    /// Build links for `point`. Coordinates use the shortest text that
    /// parses back to the same float.
    pub fn for_point(point: GeoPoint, zoom: u8) -> Self {
        let GeoPoint { latitude, longitude } = point;
        Self {
            google_maps: format!("https://www.google.com/maps?q={},{}", latitude, longitude),
            openstreetmap: format!(
                "https://www.openstreetmap.org/?mlat={}&mlon={}&zoom={}",
                latitude, longitude, zoom
            ),
        }
    }
}
