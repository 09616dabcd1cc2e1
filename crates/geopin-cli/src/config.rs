//! Configuration loading for CLI commands

use crate::cli::{Cli, Commands, FormatStyle};
use crate::errors;
use anyhow::Result;
use geopin_core::config::{
    validate_link_zoom, validate_precision, CliConfigOverrides, LayeredConfig,
};
use geopin_core::GeopinError;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".geopin";
const CONFIG_FILE: &str = "config.toml";

/// Resolve layered configuration: defaults, then file, environment, and flags
pub fn load_config(cli: &Cli, config_path: Option<&Path>) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();
    if let Some(path) = config_path {
        tracing::debug!(path = %path.display(), "Using configuration file");
        config = config.load_from_file(path).map_err(into_cli_error)?;
    }
    let mut config = config.load_from_env();
    config.update_from_cli(cli_overrides(cli)?);
    Ok(config)
}

/// Flags that override configuration for the command being run.
///
/// `--precision` only counts for commands that print decimal degrees, so
/// other commands neither apply nor validate it.
fn cli_overrides(cli: &Cli) -> Result<CliConfigOverrides> {
    let (uses_precision, zoom, datum) = match &cli.command {
        Commands::Show(args) => (true, args.zoom, args.datum),
        Commands::Convert(args) => (true, None, args.datum),
        Commands::Format(args) => (args.style == FormatStyle::Decimal, None, args.datum),
        Commands::Links(args) => (false, args.zoom, None),
        Commands::Dms(_) => (false, None, None),
        Commands::Config => (true, None, None),
    };

    let precision = cli
        .precision
        .filter(|_| uses_precision)
        .map(validate_precision)
        .transpose()
        .map_err(into_cli_error)?;
    let link_zoom = zoom.map(validate_link_zoom).transpose().map_err(into_cli_error)?;

    Ok(CliConfigOverrides {
        precision,
        link_zoom,
        legacy_datum: datum,
        ..Default::default()
    })
}

/// Config file named by `--config`, or the nearest one above the working
/// directory
pub fn resolve_config_path(cli: &Cli) -> Result<Option<PathBuf>> {
    match &cli.config {
        Some(path) if !path.is_file() => Err(errors::config_not_found(path).into()),
        Some(path) => Ok(Some(path.clone())),
        None => Ok(find_config_file(&std::env::current_dir()?)),
    }
}

/// Find the nearest .geopin/config.toml from `start` upward
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}

fn into_cli_error(err: GeopinError) -> anyhow::Error {
    match err {
        GeopinError::ConfigInvalid { key, reason } => errors::invalid_config(&key, &reason).into(),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geopin_core::config::ConfigSource;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        use clap::Parser;
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_zoom_and_datum_flags_override_config() {
        let cli = parse(&["geopin", "show", "35,139", "--zoom", "9", "--datum", "tokyo"]);
        let config = load_config(&cli, None).unwrap();

        assert_eq!(config.link_zoom.value, 9);
        assert_eq!(config.link_zoom.source, ConfigSource::Cli);
        assert_eq!(config.legacy_datum.source, ConfigSource::Cli);
    }

    #[test]
    fn test_zoom_flag_is_validated() {
        let cli = parse(&["geopin", "links", "35,139", "--zoom", "23"]);
        let err = load_config(&cli, None).unwrap_err();
        assert!(err.to_string().contains("link_zoom"));
    }

    #[test]
    fn test_precision_only_applies_where_decimals_are_printed() {
        let cli = parse(&["geopin", "dms", "35.5", "--precision", "50"]);
        let config = load_config(&cli, None).unwrap();
        assert_eq!(config.precision.source, ConfigSource::Default);

        let cli = parse(&["geopin", "format", "35,139", "--style", "decimal", "--precision", "50"]);
        assert!(load_config(&cli, None).is_err());

        let cli = parse(&["geopin", "convert", "35,139", "--precision", "3"]);
        let config = load_config(&cli, None).unwrap();
        assert_eq!(config.precision.value, 3);
        assert_eq!(config.precision.source, ConfigSource::Cli);
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE), "precision = 4\n").unwrap();

        let nested = temp_dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, config_dir.join(CONFIG_FILE));
    }

    #[test]
    fn test_directory_named_like_config_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join(CONFIG_DIR).join(CONFIG_FILE)).unwrap();

        // A real file further up the tree may exist on the host; it must not be ours
        let found = find_config_file(temp_dir.path());
        assert!(found.map_or(true, |path| !path.starts_with(temp_dir.path())));
    }
}
