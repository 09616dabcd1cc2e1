//! Everything shown for a selected point, in one value

use crate::dms::to_combined_dms;
use crate::format::{to_decimal_string, to_milliseconds};
use crate::links::MapLinks;
use crate::transform::{convert_with, datum_shift_meters};
use geopin_core::{GeoPoint, LegacyDatum};
use serde::Serialize;

/// One point rendered in every supported notation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoordinateFormats {
    pub dms: String,
    pub decimal: String,
    pub milliseconds: String,
}

impl CoordinateFormats {
    pub fn for_point(point: GeoPoint, precision: usize) -> Self {
        Self {
            dms: to_combined_dms(point),
            decimal: to_decimal_string(point, precision),
            milliseconds: to_milliseconds(point),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocationReport {
    pub point: GeoPoint,
    pub wgs84: CoordinateFormats,
    pub legacy_datum: LegacyDatum,
    pub legacy_point: GeoPoint,
    pub legacy: CoordinateFormats,
    /// Distance between the WGS84 point and its legacy counterpart
    pub datum_shift_meters: f64,
    pub links: MapLinks,
}

impl LocationReport {
    pub fn build(point: GeoPoint, datum: LegacyDatum, precision: usize, link_zoom: u8) -> Self {
        let legacy_point = convert_with(point, datum);

        Self {
            point,
            wgs84: CoordinateFormats::for_point(point, precision),
            legacy_datum: datum,
            legacy_point,
            legacy: CoordinateFormats::for_point(legacy_point, precision),
            datum_shift_meters: datum_shift_meters(point, datum),
            // links always point at the WGS84 position
            links: MapLinks::for_point(point, link_zoom),
        }
    }
}
