//! Show command implementation

use super::{checked_point, warn_outside_region};
use crate::cli::ShowArgs;
use crate::output::OutputWriter;
use crate::output_types::FormatRow;
use anyhow::Result;
use geopin_core::config::LayeredConfig;
use geopin_geo::LocationReport;

pub fn execute(args: ShowArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let point = match args.point {
        Some(point) => checked_point(point)?,
        None => {
            output.info(format!("No point given, using {}", config.default_center.value));
            config.default_center.value
        }
    };
    let datum = config.legacy_datum.value;
    let zoom = config.link_zoom.value;

    tracing::debug!(%point, %datum, "Building location report");
    let report = LocationReport::build(point, datum, config.precision.value, zoom);

    warn_outside_region(&point, datum, output);

    if output.is_json() {
        return output.result(report);
    }

    output.section("Location");
    output.kv("WGS84", report.point);
    output.kv(format!("{} (EPSG:{})", datum, datum.epsg()), report.legacy_point);
    output.kv("Datum shift", format!("{:.1} m", report.datum_shift_meters));

    output.section("Formats");
    output.table(vec![
        FormatRow {
            format: "DMS",
            wgs84: report.wgs84.dms,
            legacy: report.legacy.dms,
        },
        FormatRow {
            format: "Decimal",
            wgs84: report.wgs84.decimal,
            legacy: report.legacy.decimal,
        },
        FormatRow {
            format: "Milliseconds",
            wgs84: report.wgs84.milliseconds,
            legacy: report.legacy.milliseconds,
        },
    ]);

    output.section("Links");
    output.kv("Google Maps", &report.links.google_maps);
    output.kv("OpenStreetMap", &report.links.openstreetmap);

    Ok(())
}
