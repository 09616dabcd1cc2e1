use clap::{Parser, Subcommand, ValueEnum};
use geopin_core::{Axis, GeoPoint, LegacyDatum};
use std::path::PathBuf;

/// Geopin - View a location in WGS84 and legacy Tokyo datum formats
#[derive(Parser, Debug)]
#[command(name = "geopin")]
#[command(about = "View a location in WGS84 and legacy Tokyo datum formats", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to the nearest .geopin/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Decimal places for decimal-degree output
    #[arg(long, global = true, value_name = "N")]
    pub precision: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a point in every format, for WGS84 and the legacy datum
    Show(ShowArgs),

    /// Convert a WGS84 point to the legacy datum
    Convert(ConvertArgs),

    /// Render a point in a single format
    Format(FormatArgs),

    /// Render one decimal degree value as degrees/minutes/seconds
    Dms(DmsArgs),

    /// Print map links for a point
    Links(LinksArgs),

    /// Show the resolved configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Point as "latitude, longitude" (defaults to the configured center)
    #[arg(allow_hyphen_values = true)]
    pub point: Option<GeoPoint>,

    /// Legacy datum to convert into
    #[arg(long)]
    pub datum: Option<LegacyDatum>,

    /// Zoom level for map links
    #[arg(long)]
    pub zoom: Option<u8>,
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Point as "latitude, longitude"
    #[arg(allow_hyphen_values = true)]
    pub point: GeoPoint,

    /// Legacy datum to convert into
    #[arg(long)]
    pub datum: Option<LegacyDatum>,
}

/// Output notation for the format command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatStyle {
    /// Degrees, minutes and seconds
    Dms,
    /// Fixed-precision decimal degrees
    Decimal,
    /// Integer milliseconds of arc
    Milliseconds,
}

#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Point as "latitude, longitude"
    #[arg(allow_hyphen_values = true)]
    pub point: GeoPoint,

    /// Output notation
    #[arg(long, value_enum, default_value = "dms")]
    pub style: FormatStyle,

    /// Convert to the legacy datum before formatting
    #[arg(long)]
    pub legacy: bool,

    /// Legacy datum used with --legacy
    #[arg(long)]
    pub datum: Option<LegacyDatum>,
}

#[derive(Parser, Debug)]
pub struct DmsArgs {
    /// Decimal degrees
    #[arg(allow_hyphen_values = true)]
    pub degrees: f64,

    /// Axis that picks the hemisphere letters (latitude or longitude)
    #[arg(long, default_value = "latitude")]
    pub axis: Axis,
}

#[derive(Parser, Debug)]
pub struct LinksArgs {
    /// Point as "latitude, longitude" (defaults to the configured center)
    #[arg(allow_hyphen_values = true)]
    pub point: Option<GeoPoint>,

    /// Zoom level for the OpenStreetMap link
    #[arg(long)]
    pub zoom: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_point_is_positional() {
        let cli = Cli::try_parse_from(["geopin", "convert", "-33.8688,151.2093"]).unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.point, GeoPoint::new(-33.8688, 151.2093));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["geopin", "show", "35.0, 139.0", "--json", "--precision", "3"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.precision, Some(3));
    }

    #[test]
    fn test_dms_axis_parsing() {
        let cli = Cli::try_parse_from(["geopin", "dms", "-122.4194", "--axis", "lng"]).unwrap();
        match cli.command {
            Commands::Dms(args) => {
                assert_eq!(args.degrees, -122.4194);
                assert_eq!(args.axis, Axis::Longitude);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_point_is_rejected() {
        assert!(Cli::try_parse_from(["geopin", "convert", "tokyo"]).is_err());
        assert!(Cli::try_parse_from(["geopin", "show", "--datum", "nad27"]).is_err());
    }
}
