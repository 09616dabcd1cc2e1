use crate::error::{GeopinError, Result};
use crate::models::{GeoPoint, LegacyDatum};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Default fixed-point precision for decimal degree output
pub const DEFAULT_PRECISION: usize = 6;

/// Zoom level used in generated map links
pub const DEFAULT_LINK_ZOOM: u8 = 15;

/// Upper bound accepted for `precision`
pub const MAX_PRECISION: usize = 20;

/// Upper bound accepted for `link_zoom`
pub const MAX_LINK_ZOOM: u8 = 22;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Geopin
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub precision: ConfigValue<usize>,
    pub default_center: ConfigValue<GeoPoint>,
    pub link_zoom: ConfigValue<u8>,
    pub legacy_datum: ConfigValue<LegacyDatum>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            precision: ConfigValue::new(DEFAULT_PRECISION, ConfigSource::Default),
            default_center: ConfigValue::new(GeoPoint::tokyo(), ConfigSource::Default),
            link_zoom: ConfigValue::new(DEFAULT_LINK_ZOOM, ConfigSource::Default),
            legacy_datum: ConfigValue::new(LegacyDatum::Tokyo97, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| GeopinError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| GeopinError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(precision) = file_config.precision {
            self.precision.update(validate_precision(precision)?, ConfigSource::File);
        }

        if let Some(center) = file_config.default_center {
            self.default_center.update(check_center(center)?, ConfigSource::File);
        }

        if let Some(zoom) = file_config.link_zoom {
            self.link_zoom.update(validate_link_zoom(zoom)?, ConfigSource::File);
        }

        if let Some(datum) = file_config.legacy_datum {
            self.legacy_datum.update(datum, ConfigSource::File);
        }

        tracing::debug!(path = %path.as_ref().display(), "Loaded configuration file");

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // GEOPIN_PRECISION
        if let Ok(precision_str) = env::var("GEOPIN_PRECISION") {
            match parse_precision(&precision_str) {
                Ok(precision) => self.precision.update(precision, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOPIN_PRECISION value '{}': expected integer 0-{}",
                    precision_str,
                    MAX_PRECISION
                ),
            }
        }

        // GEOPIN_CENTER
        if let Ok(center_str) = env::var("GEOPIN_CENTER") {
            match center_str.parse::<GeoPoint>().and_then(check_center) {
                Ok(center) => self.default_center.update(center, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOPIN_CENTER value '{}': expected 'latitude, longitude'",
                    center_str
                ),
            }
        }

        // GEOPIN_LINK_ZOOM
        if let Ok(zoom_str) = env::var("GEOPIN_LINK_ZOOM") {
            match parse_link_zoom(&zoom_str) {
                Ok(zoom) => self.link_zoom.update(zoom, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOPIN_LINK_ZOOM value '{}': expected integer 0-{}",
                    zoom_str,
                    MAX_LINK_ZOOM
                ),
            }
        }

        // GEOPIN_DATUM
        if let Ok(datum_str) = env::var("GEOPIN_DATUM") {
            match datum_str.parse::<LegacyDatum>() {
                Ok(datum) => self.legacy_datum.update(datum, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid GEOPIN_DATUM value '{}': expected tokyo97",
                    datum_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(precision) = overrides.precision {
            self.precision.update(precision, ConfigSource::Cli);
        }

        if let Some(center) = overrides.default_center {
            self.default_center.update(center, ConfigSource::Cli);
        }

        if let Some(zoom) = overrides.link_zoom {
            self.link_zoom.update(zoom, ConfigSource::Cli);
        }

        if let Some(datum) = overrides.legacy_datum {
            self.legacy_datum.update(datum, ConfigSource::Cli);
        }
    }

    /// All configuration values rendered for inspection, in a stable order
    pub fn to_inspection_list(&self) -> Vec<(&'static str, String, ConfigSource)> {
        vec![
            ("precision", self.precision.value.to_string(), self.precision.source),
            (
                "default_center",
                self.default_center.value.to_string(),
                self.default_center.source,
            ),
            ("link_zoom", self.link_zoom.value.to_string(), self.link_zoom.source),
            (
                "legacy_datum",
                self.legacy_datum.value.to_string(),
                self.legacy_datum.source,
            ),
        ]
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    precision: Option<usize>,
    default_center: Option<GeoPoint>,
    link_zoom: Option<u8>,
    legacy_datum: Option<LegacyDatum>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub precision: Option<usize>,
    pub default_center: Option<GeoPoint>,
    pub link_zoom: Option<u8>,
    pub legacy_datum: Option<LegacyDatum>,
}

/// Parse a decimal precision from string
pub fn parse_precision(s: &str) -> Result<usize> {
    let precision = s.trim().parse::<usize>().map_err(|e| GeopinError::ConfigInvalid {
        key: "precision".to_string(),
        reason: format!("Invalid precision '{}': {}", s, e),
    })?;
    validate_precision(precision)
}

/// Parse a map link zoom level from string
pub fn parse_link_zoom(s: &str) -> Result<u8> {
    let zoom = s.trim().parse::<u8>().map_err(|e| GeopinError::ConfigInvalid {
        key: "link_zoom".to_string(),
        reason: format!("Invalid zoom '{}': {}", s, e),
    })?;
    validate_link_zoom(zoom)
}

/// Reject precisions above [`MAX_PRECISION`]
pub fn validate_precision(precision: usize) -> Result<usize> {
    if precision > MAX_PRECISION {
        return Err(GeopinError::ConfigInvalid {
            key: "precision".to_string(),
            reason: format!("{} exceeds the maximum of {}", precision, MAX_PRECISION),
        });
    }
    Ok(precision)
}

/// Reject zoom levels above [`MAX_LINK_ZOOM`]
pub fn validate_link_zoom(zoom: u8) -> Result<u8> {
    if zoom > MAX_LINK_ZOOM {
        return Err(GeopinError::ConfigInvalid {
            key: "link_zoom".to_string(),
            reason: format!("{} exceeds the maximum of {}", zoom, MAX_LINK_ZOOM),
        });
    }
    Ok(zoom)
}

fn check_center(center: GeoPoint) -> Result<GeoPoint> {
    let in_range = (-90.0..=90.0).contains(&center.latitude)
        && (-180.0..=180.0).contains(&center.longitude);
    if !in_range {
        return Err(GeopinError::ConfigInvalid {
            key: "default_center".to_string(),
            reason: format!("{} is outside latitude [-90, 90] / longitude [-180, 180]", center),
        });
    }
    Ok(center)
}
