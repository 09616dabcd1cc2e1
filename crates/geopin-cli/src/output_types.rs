use geopin_core::config::ConfigSource;
use geopin_core::{Axis, GeoPoint, LegacyDatum};
use serde::Serialize;
use tabled::Tabled;

/// One row of the show command's format table
#[derive(Debug, Tabled)]
pub struct FormatRow {
    #[tabled(rename = "Format")]
    pub format: &'static str,
    #[tabled(rename = "WGS84")]
    pub wgs84: String,
    #[tabled(rename = "Legacy")]
    pub legacy: String,
}

/// Output for convert command
#[derive(Debug, Serialize)]
pub struct ConvertOutput {
    pub input: GeoPoint,
    pub datum: LegacyDatum,
    pub point: GeoPoint,
    pub decimal: String,
    pub within_datum_region: bool,
}

/// Output for format command
#[derive(Debug, Serialize)]
pub struct FormatOutput {
    pub point: GeoPoint,
    /// Legacy datum applied before formatting, if any
    pub datum: Option<LegacyDatum>,
    pub style: String,
    pub value: String,
}

/// Output for dms command
#[derive(Debug, Serialize)]
pub struct DmsOutput {
    pub degrees: f64,
    pub axis: Axis,
    pub dms: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub path: Option<String>,
    pub entries: Vec<ConfigEntry>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ConfigEntry {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

pub fn source_label(source: ConfigSource) -> String {
    match source {
        ConfigSource::Default => "default",
        ConfigSource::File => "file",
        ConfigSource::Environment => "environment",
        ConfigSource::Cli => "cli",
    }
    .to_string()
}
