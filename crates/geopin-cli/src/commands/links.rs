//! Links command implementation

use super::checked_point;
use crate::cli::LinksArgs;
use crate::output::OutputWriter;
use anyhow::Result;
use geopin_core::config::LayeredConfig;
use geopin_geo::MapLinks;

pub fn execute(args: LinksArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let point = match args.point {
        Some(point) => checked_point(point)?,
        None => config.default_center.value,
    };
    let links = MapLinks::for_point(point, config.link_zoom.value);

    if output.is_json() {
        return output.result(links);
    }

    output.kv("Google Maps", &links.google_maps);
    output.kv("OpenStreetMap", &links.openstreetmap);
    Ok(())
}
