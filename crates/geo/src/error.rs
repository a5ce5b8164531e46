//! Error types for the geoshape crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur while building shapes or loading configuration.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Shape data is structurally unusable (empty ring, missing corners, bad radius)
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// Shape data is well formed but describes no usable region
    #[error("Degenerate shape: {0}")]
    DegenerateShape(String),

    /// Invalid coordinate values
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error code for integration with error reporting.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid shape data
    InvalidShape = 10001,
    /// Degenerate geometry
    DegenerateShape = 10002,
    /// Invalid coordinate values
    InvalidCoordinate = 10003,
    /// JSON parsing error
    JsonParsing = 10004,
    /// Configuration error
    Config = 10005,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidShape(_) => GeoErrorCode::InvalidShape,
            GeoError::DegenerateShape(_) => GeoErrorCode::DegenerateShape,
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::JsonError(_) => GeoErrorCode::JsonParsing,
            GeoError::Config(_) => GeoErrorCode::Config,
        }
    }
}
