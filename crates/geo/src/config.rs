//! Configuration loading and schema definitions.
//!
//! Settings are read from a TOML file:
//!
//! ```toml
//! [shapes]
//! point_tolerance_m = 0.5
//! validate_coordinates = true
//!
//! [batch]
//! parallel_threshold = 4096
//! ```

use crate::error::{GeoError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeoConfig {
    #[serde(default)]
    pub shapes: ShapeConfig,

    #[serde(default)]
    pub batch: BatchConfig,
}

/// Shape construction settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeConfig {
    /// Distance in meters within which a Point shape contains a query.
    /// Zero means exact coordinate equality.
    #[serde(default)]
    pub point_tolerance_m: f64,

    /// Reject shape coordinates outside [-180, 180] x [-90, 90]
    #[serde(default = "default_true")]
    pub validate_coordinates: bool,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            point_tolerance_m: 0.0,
            validate_coordinates: true,
        }
    }
}

/// Batch processing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Minimum input size before work is spread across threads
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    1024
}

impl GeoConfig {
    /// Load configuration from a file path, the first standard location
    /// that exists, or defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path.map(String::from).or_else(find_config_file);

        match config_path {
            Some(p) => load_config_file(&p),
            None => Ok(Self::default()),
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| GeoError::Config(format!("Failed to parse config: {}", e)))
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".geoshape.toml", "geoshape.toml", ".config/geoshape.toml"];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<GeoConfig> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| GeoError::Config(format!("Failed to read config file {}: {}", path, e)))?;

    let config = toml::from_str(&content)
        .map_err(|e| GeoError::Config(format!("Failed to parse config file {}: {}", path, e)))?;
    debug!(path, "loaded geo config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = GeoConfig::default();
        assert_eq!(config.shapes.point_tolerance_m, 0.0);
        assert!(config.shapes.validate_coordinates);
        assert_eq!(config.batch.parallel_threshold, 1024);
    }

    #[test]
    fn test_config_partial_toml_uses_defaults() {
        let config = GeoConfig::from_toml("[shapes]\npoint_tolerance_m = 2.5\n").unwrap();
        assert_eq!(config.shapes.point_tolerance_m, 2.5);
        assert!(config.shapes.validate_coordinates);
        assert_eq!(config.batch.parallel_threshold, 1024);
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[batch]\nparallel_threshold = 16").unwrap();

        let config = GeoConfig::load(file.path().to_str()).unwrap();
        assert_eq!(config.batch.parallel_threshold, 16);
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = GeoConfig::load(Some("/nonexistent/geoshape.toml")).unwrap_err();
        assert!(matches!(err, GeoError::Config(_)));
    }

    #[test]
    fn test_config_invalid_toml() {
        assert!(matches!(
            GeoConfig::from_toml("[shapes\n"),
            Err(GeoError::Config(_))
        ));
    }
}
