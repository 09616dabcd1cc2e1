//! Error types for Geopin

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeopinError {
    // Coordinate input errors
    #[error("Invalid coordinate '{input}': {reason}")]
    InvalidCoordinate { input: String, reason: String },

    #[error("Unknown legacy datum: {name}. Supported: tokyo97")]
    UnknownDatum { name: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, GeopinError>;
