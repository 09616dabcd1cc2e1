//! Integration tests for layered configuration
//!
//! These tests verify that configuration loading follows the correct precedence:
//! CLI arguments > Environment variables > Config file > Defaults

use geopin_core::config::{CliConfigOverrides, ConfigSource, LayeredConfig};
use geopin_core::{GeoPoint, LegacyDatum};
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::NamedTempFile;

const ENV_VARS: [&str; 4] =
    ["GEOPIN_PRECISION", "GEOPIN_CENTER", "GEOPIN_LINK_ZOOM", "GEOPIN_DATUM"];

fn clear_env() {
    for var in ENV_VARS {
        env::remove_var(var);
    }
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", content).unwrap();
    file
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    env::set_var("GEOPIN_PRECISION", "3");
    env::set_var("GEOPIN_CENTER", "43.0621, 141.3544");
    env::set_var("GEOPIN_LINK_ZOOM", "11");

    let file = config_file(
        r#"
precision = 8
link_zoom = 17

[default_center]
latitude = 34.6937
longitude = 135.5023
"#,
    );

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    assert_eq!(config.precision.value, 3);
    assert_eq!(config.precision.source, ConfigSource::Environment);
    assert_eq!(config.default_center.value, GeoPoint::new(43.0621, 141.3544));
    assert_eq!(config.default_center.source, ConfigSource::Environment);
    assert_eq!(config.link_zoom.value, 11);
    assert_eq!(config.link_zoom.source, ConfigSource::Environment);

    clear_env();
}

#[test]
#[serial]
fn test_invalid_environment_values_are_ignored() {
    clear_env();
    env::set_var("GEOPIN_PRECISION", "many");
    env::set_var("GEOPIN_CENTER", "somewhere");
    env::set_var("GEOPIN_LINK_ZOOM", "99");
    env::set_var("GEOPIN_DATUM", "wgs72");

    let file = config_file("precision = 4");

    let config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    // File value survives, the rest stay at defaults
    assert_eq!(config.precision.value, 4);
    assert_eq!(config.precision.source, ConfigSource::File);
    assert_eq!(config.default_center.value, GeoPoint::tokyo());
    assert_eq!(config.default_center.source, ConfigSource::Default);
    assert_eq!(config.link_zoom.source, ConfigSource::Default);
    assert_eq!(config.legacy_datum.source, ConfigSource::Default);

    clear_env();
}

#[test]
#[serial]
fn test_cli_overrides_everything() {
    clear_env();
    env::set_var("GEOPIN_PRECISION", "3");
    env::set_var("GEOPIN_DATUM", "tokyo");

    let file = config_file("precision = 8");

    let mut config = LayeredConfig::with_defaults()
        .load_from_file(file.path())
        .unwrap()
        .load_from_env();

    config.update_from_cli(CliConfigOverrides {
        precision: Some(1),
        default_center: Some(GeoPoint::new(26.2124, 127.6809)),
        link_zoom: None,
        legacy_datum: Some(LegacyDatum::Tokyo97),
    });

    assert_eq!(config.precision.value, 1);
    assert_eq!(config.precision.source, ConfigSource::Cli);
    assert_eq!(config.default_center.value, GeoPoint::new(26.2124, 127.6809));
    assert_eq!(config.legacy_datum.source, ConfigSource::Cli);
    assert_eq!(config.link_zoom.source, ConfigSource::Default);

    clear_env();
}

#[test]
fn test_missing_file_is_an_error() {
    let result = LayeredConfig::with_defaults().load_from_file("/nonexistent/geopin/config.toml");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Failed to read config file"));
}
