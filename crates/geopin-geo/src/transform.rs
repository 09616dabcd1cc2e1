//! WGS84 to legacy datum conversion

use geo::{Distance, Haversine};
use geopin_core::{GeoPoint, LegacyDatum};

/// Convert a WGS84 point to the Tokyo97 datum
pub fn convert_to_legacy_datum(point: GeoPoint) -> GeoPoint {
    convert_with(point, LegacyDatum::Tokyo97)
}

/// Convert a WGS84 point to `datum` using its affine approximation.
///
/// The approximation only holds inside the datum's region. Nothing is
/// checked here; see [`crate::validation::within_datum_region`].
pub fn convert_with(point: GeoPoint, datum: LegacyDatum) -> GeoPoint {
    let c = datum.coefficients();
    let lat = point.latitude;
    let lng = point.longitude;

    GeoPoint::new(
        lat + c.lat_scale * lat - c.lat_from_lng * lng - c.lat_offset,
        lng + c.lng_from_lat * lat + c.lng_scale * lng - c.lng_offset,
    )
}

/// Great-circle distance in meters between a point and its legacy datum
/// counterpart
pub fn datum_shift_meters(point: GeoPoint, datum: LegacyDatum) -> f64 {
    let legacy = convert_with(point, datum);
    Haversine.distance(geo::Point::from(point), geo::Point::from(legacy))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formula(lat: f64, lng: f64) -> (f64, f64) {
        (
            lat + (0.00010696 * lat) - (0.000017467 * lng) - 0.004602,
            lng + (0.000046047 * lat) + (0.000083049 * lng) - 0.010041,
        )
    }

    #[test]
    fn test_tokyo_station_fixture() {
        let legacy = convert_to_legacy_datum(GeoPoint::new(35.6762, 139.6503));
        let (lat, lng) = formula(35.6762, 139.6503);

        assert!((legacy.latitude - lat).abs() < 1e-9);
        assert!((legacy.longitude - lng).abs() < 1e-9);

        // Regression fixture
        assert!((legacy.latitude - 35.6729746545619).abs() < 1e-12);
        assert!((legacy.longitude - 139.65349959974608).abs() < 1e-12);
    }

    #[test]
    fn test_matches_formula_across_japan() {
        let samples = [
            (43.0621, 141.3544),
            (34.6937, 135.5023),
            (26.2124, 127.6809),
            (33.5904, 130.4017),
            (24.3448, 124.1572),
        ];

        for (lat, lng) in samples {
            let legacy = convert_to_legacy_datum(GeoPoint::new(lat, lng));
            let (expected_lat, expected_lng) = formula(lat, lng);
            assert!((legacy.latitude - expected_lat).abs() < 1e-9, "lat mismatch at {lat},{lng}");
            assert!((legacy.longitude - expected_lng).abs() < 1e-9, "lng mismatch at {lat},{lng}");
        }
    }

    #[test]
    fn test_out_of_region_points_pass_through_the_formula() {
        let point = GeoPoint::new(-33.8688, 151.2093);
        let legacy = convert_to_legacy_datum(point);
        let (lat, lng) = formula(-33.8688, 151.2093);
        assert_eq!(legacy, GeoPoint::new(lat, lng));
    }

    #[test]
    fn test_origin_maps_to_negative_offsets() {
        let legacy = convert_to_legacy_datum(GeoPoint::new(0.0, 0.0));
        assert_eq!(legacy, GeoPoint::new(-0.004602, -0.010041));
    }

    #[test]
    fn test_non_finite_input_propagates() {
        let legacy = convert_to_legacy_datum(GeoPoint::new(f64::NAN, 139.0));
        assert!(legacy.latitude.is_nan());
        assert!(legacy.longitude.is_nan());
    }

    #[test]
    fn test_datum_shift_is_a_few_hundred_meters_in_tokyo() {
        let shift = datum_shift_meters(GeoPoint::tokyo(), LegacyDatum::Tokyo97);
        assert!(shift > 300.0 && shift < 600.0, "unexpected shift: {shift}");
    }
}
