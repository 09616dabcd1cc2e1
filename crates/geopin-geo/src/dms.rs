//! Degrees/minutes/seconds formatting

use crate::format::to_fixed;
use geopin_core::{Axis, GeoPoint, Hemisphere};

/// Decimal places printed for the seconds field
const SECONDS_PRECISION: usize = 2;

/// A decimal degree value split into DMS fields
#[derive(Debug, Clone, Copy, PartialEq)]
struct DmsComponents {
    /// Whole degrees, kept as a float so huge and non-finite input survives
    degrees: f64,
    minutes: f64,
    seconds: f64,
    hemisphere: Hemisphere,
}

impl DmsComponents {
    fn from_decimal(decimal_degrees: f64, axis: Axis) -> Self {
        let absolute = decimal_degrees.abs();
        let degrees = absolute.floor();
        let minutes_float = (absolute - degrees) * 60.0;
        let minutes = minutes_float.floor();
        let seconds = (minutes_float - minutes) * 60.0;

        Self {
            degrees,
            minutes,
            seconds,
            hemisphere: Hemisphere::of(decimal_degrees, axis),
        }
    }

    fn render(&self) -> String {
        format!(
            "{}°{}'{}\"{}",
            self.degrees,
            self.minutes,
            to_fixed(self.seconds, SECONDS_PRECISION),
            self.hemisphere
        )
    }
}

/// Format one axis value as `{d}°{m}'{s.ss}"{hemisphere}`.
///
/// Seconds are not carried into minutes, so a value a hair below a whole
/// minute prints as `60.00`.
pub fn to_degrees_minutes_seconds(decimal_degrees: f64, axis: Axis) -> String {
    DmsComponents::from_decimal(decimal_degrees, axis).render()
}

/// Format both axes: `"{lat_dms}, {lng_dms}"`
pub fn to_combined_dms(point: GeoPoint) -> String {
    format!(
        "{}, {}",
        to_degrees_minutes_seconds(point.latitude, Axis::Latitude),
        to_degrees_minutes_seconds(point.longitude, Axis::Longitude)
    )
}
