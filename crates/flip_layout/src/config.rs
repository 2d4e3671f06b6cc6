//! Flip layout configuration
//!
//! The scroll axis is fixed at construction; the camera distance tunes how
//! strongly a turning page is foreshortened. Configs can be built in code or
//! loaded from TOML:
//!
//! ```toml
//! axis = "horizontal"
//! camera_distance = 1440.0
//! ```

use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::error::{FlipError, Result};
use crate::projection::DEFAULT_CAMERA_DISTANCE;

/// Configuration for a flip coordinator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipConfig {
    /// Axis the list scrolls along (default: vertical)
    pub axis: Axis,
    /// Distance from the viewer to the page plane, in pixels
    pub camera_distance: f32,
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            camera_distance: DEFAULT_CAMERA_DISTANCE,
        }
    }
}

impl FlipConfig {
    /// Config for a horizontally scrolling list
    pub fn horizontal() -> Self {
        Self {
            axis: Axis::Horizontal,
            ..Default::default()
        }
    }

    /// Config for a vertically scrolling list
    pub fn vertical() -> Self {
        Self::default()
    }

    pub fn with_camera_distance(mut self, distance: f32) -> Self {
        self.camera_distance = distance;
        self
    }

    /// Check that the values can produce a finite projection
    pub fn validate(&self) -> Result<()> {
        if !self.camera_distance.is_finite() || self.camera_distance <= 0.0 {
            return Err(FlipError::InvalidConfig(format!(
                "camera_distance must be a positive finite number, got {}",
                self.camera_distance
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML config
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: FlipConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlipConfig::default();
        assert_eq!(config.axis, Axis::Vertical);
        assert_eq!(config.camera_distance, 2880.0);
        assert!(config.validate().is_ok());

        assert_eq!(FlipConfig::horizontal().axis, Axis::Horizontal);
    }

    #[test]
    fn test_invalid_camera_distance() {
        for distance in [0.0, -10.0, f32::NAN, f32::INFINITY] {
            let config = FlipConfig::vertical().with_camera_distance(distance);
            assert!(matches!(config.validate(), Err(FlipError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_from_toml() {
        let config = FlipConfig::from_toml_str("axis = \"horizontal\"\ncamera_distance = 1440.0\n")
            .expect("valid config");
        assert_eq!(config.axis, Axis::Horizontal);
        assert_eq!(config.camera_distance, 1440.0);

        // Missing keys fall back to defaults
        let partial = FlipConfig::from_toml_str("axis = \"horizontal\"").expect("valid config");
        assert_eq!(partial.camera_distance, DEFAULT_CAMERA_DISTANCE);
        assert_eq!(FlipConfig::from_toml_str("").expect("empty config"), FlipConfig::default());
    }

    #[test]
    fn test_from_toml_errors() {
        assert!(matches!(
            FlipConfig::from_toml_str("axis = \"diagonal\""),
            Err(FlipError::ConfigParse(_))
        ));
        assert!(matches!(
            FlipConfig::from_toml_str("camera_distance = -1.0"),
            Err(FlipError::InvalidConfig(_))
        ));
    }
}
