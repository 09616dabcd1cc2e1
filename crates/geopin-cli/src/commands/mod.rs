//! Command implementations

mod config;
mod convert;
mod dms;
mod format;
mod links;
mod show;

use crate::cli::{Cli, Commands};
use crate::config::{load_config, resolve_config_path};
use crate::errors;
use crate::output::OutputWriter;
use anyhow::Result;
use geopin_core::{GeoPoint, GeopinError, LegacyDatum};
use geopin_geo::validation::{ensure_valid, within_datum_region};

/// Execute a CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config_path = resolve_config_path(&cli)?;
    let config = load_config(&cli, config_path.as_deref())?;

    match cli.command {
        Commands::Show(args) => show::execute(args, &config, &output),
        Commands::Convert(args) => convert::execute(args, &config, &output),
        Commands::Format(args) => format::execute(args, &config, &output),
        Commands::Dms(args) => dms::execute(args, &output),
        Commands::Links(args) => links::execute(args, &config, &output),
        Commands::Config => config::execute(&config, config_path.as_deref(), &output),
    }
}

/// Reject points the formatter would render as nonsense
fn checked_point(point: GeoPoint) -> Result<GeoPoint> {
    ensure_valid(&point).map_err(|err| match err {
        GeopinError::InvalidCoordinate { input, reason } => {
            anyhow::Error::from(errors::invalid_point(&input, &reason))
        }
        other => other.into(),
    })?;
    Ok(point)
}

/// Warn when the affine approximation is applied outside its region
fn warn_outside_region(point: &GeoPoint, datum: LegacyDatum, output: &OutputWriter) {
    if !within_datum_region(point, datum) {
        tracing::warn!(%point, %datum, "Point lies outside the legacy datum region");
        output.warning(format!(
            "{} is outside the {} region; the converted coordinates are not meaningful",
            point, datum
        ));
    }
}
