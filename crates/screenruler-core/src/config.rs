//! Ruler configuration.

use serde::Deserialize;
use thiserror::Error;

use crate::snap::SCREEN_EDGE_SNAP_DISTANCE;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for a ruler instance. Values are never written back anywhere.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RulerConfig {
    /// Size at construction.
    pub default_width: i32,
    pub default_height: i32,
    /// Size restored by the reset command.
    pub reset_width: i32,
    pub reset_height: i32,
    /// Screen-edge snap distance in pixels.
    pub snap_distance: i32,
    /// Manhattan distance the pointer must travel before a press counts as a drag.
    pub drag_threshold: i32,
    /// Lower bound on the width of the "disable click-through" control.
    pub click_through_control_min_width: i32,
}

impl Default for RulerConfig {
    fn default() -> Self {
        Self {
            default_width: 690,
            default_height: 70,
            reset_width: 500,
            reset_height: 70,
            snap_distance: SCREEN_EDGE_SNAP_DISTANCE,
            drag_threshold: 10,
            click_through_control_min_width: 170,
        }
    }
}

impl RulerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object; missing fields keep their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: RulerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.snap_distance < 0 {
            return Err(ConfigError::Invalid(format!(
                "snap_distance must not be negative (got {})",
                self.snap_distance
            )));
        }
        if self.drag_threshold < 0 {
            return Err(ConfigError::Invalid(format!(
                "drag_threshold must not be negative (got {})",
                self.drag_threshold
            )));
        }
        Ok(())
    }

    pub fn with_default_size(mut self, width: i32, height: i32) -> Self {
        self.default_width = width;
        self.default_height = height;
        self
    }

    pub fn with_reset_size(mut self, width: i32, height: i32) -> Self {
        self.reset_width = width;
        self.reset_height = height;
        self
    }

    pub fn with_snap_distance(mut self, distance: i32) -> Self {
        self.snap_distance = distance;
        self
    }

    pub fn with_drag_threshold(mut self, threshold: i32) -> Self {
        self.drag_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RulerConfig::default();
        assert_eq!((config.default_width, config.default_height), (690, 70));
        assert_eq!((config.reset_width, config.reset_height), (500, 70));
        assert_eq!(config.snap_distance, 12);
    }

    #[test]
    fn test_from_json_partial() {
        let config = RulerConfig::from_json(r#"{ "snap_distance": 20 }"#).unwrap();
        assert_eq!(config.snap_distance, 20);
        assert_eq!(config.default_width, 690);
    }

    #[test]
    fn test_from_json_rejects_negative_distance() {
        let err = RulerConfig::from_json(r#"{ "snap_distance": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = RulerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
