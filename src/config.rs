//! Slice view configuration
//!
//! Render settings that do not change per cycle. They can be built in code
//! with the `with_*` setters or loaded from JSON:
//!
//! ```json
//! {
//!   "colorRange": ["#ffffff", "steelblue"],
//!   "concentrationThresholdRatio": 0.8,
//!   "maxDots": 2000,
//!   "margin": 10.0,
//!   "projection": "observed"
//! }
//! ```

use crate::error::{SliceError, SliceResult};
use crate::visualization::axis::ProjectionMode;
use crate::visualization::color::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default render count ceiling
pub const DEFAULT_MAX_DOTS: usize = 2000;
/// Default canvas margin in pixels
pub const DEFAULT_MARGIN: f64 = 10.0;

fn default_max_dots() -> usize {
    DEFAULT_MAX_DOTS
}

fn default_margin() -> f64 {
    DEFAULT_MARGIN
}

/// Per-view render settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderConfig {
    /// Fill colors at zero and at the cycle's maximum concentration
    pub color_range: [Rgb; 2],
    /// Fraction of the dataset maximum concentration below which particles are hidden
    #[serde(default)]
    pub concentration_threshold_ratio: f64,
    /// Maximum number of glyphs drawn per cycle
    #[serde(default = "default_max_dots")]
    pub max_dots: usize,
    /// Empty border around the plot in pixels
    #[serde(default = "default_margin")]
    pub margin: f64,
    #[serde(default)]
    pub projection: ProjectionMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color_range: [Rgb::new(255, 255, 255), Rgb::new(70, 130, 180)],
            concentration_threshold_ratio: 0.0,
            max_dots: DEFAULT_MAX_DOTS,
            margin: DEFAULT_MARGIN,
            projection: ProjectionMode::Observed,
        }
    }
}

impl RenderConfig {
    pub fn with_color_range(mut self, low: Rgb, high: Rgb) -> Self {
        self.color_range = [low, high];
        self
    }

    pub fn with_threshold_ratio(mut self, ratio: f64) -> Self {
        self.concentration_threshold_ratio = ratio;
        self
    }

    pub fn with_max_dots(mut self, max_dots: usize) -> Self {
        self.max_dots = max_dots;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_projection(mut self, projection: ProjectionMode) -> Self {
        self.projection = projection;
        self
    }

    /// Check value ranges
    pub fn validate(&self) -> SliceResult<()> {
        let ratio = self.concentration_threshold_ratio;
        if !(0.0..=1.0).contains(&ratio) {
            return Err(SliceError::ThresholdOutOfRange(ratio));
        }
        if self.max_dots == 0 {
            return Err(SliceError::InvalidMaxDots);
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(SliceError::InvalidMargin(self.margin));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> SliceResult<Self> {
        let config: RenderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> SliceResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save the configuration to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> SliceResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_dots, 2000);
        assert_eq!(config.margin, 10.0);
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = RenderConfig::from_json(
            r##"{"colorRange": ["#000", "rgb(255, 0, 0)"], "concentrationThresholdRatio": 0.8}"##,
        )
        .unwrap();

        assert_eq!(config.color_range, [Rgb::new(0, 0, 0), Rgb::new(255, 0, 0)]);
        assert_eq!(config.concentration_threshold_ratio, 0.8);
        assert_eq!(config.max_dots, DEFAULT_MAX_DOTS);
        assert_eq!(config.projection, ProjectionMode::Observed);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let bad_ratio = r##"{"colorRange": ["#000", "#fff"], "concentrationThresholdRatio": 1.5}"##;
        assert!(matches!(
            RenderConfig::from_json(bad_ratio),
            Err(SliceError::ThresholdOutOfRange(_))
        ));

        let bad_color = r##"{"colorRange": ["#000", "not-a-color"]}"##;
        assert!(matches!(RenderConfig::from_json(bad_color), Err(SliceError::Json(_))));

        let zero_dots = r##"{"colorRange": ["#000", "#fff"], "maxDots": 0}"##;
        assert!(matches!(RenderConfig::from_json(zero_dots), Err(SliceError::InvalidMaxDots)));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("sliceview_config_{}.json", std::process::id()));
        let config = RenderConfig::default()
            .with_threshold_ratio(0.25)
            .with_projection(ProjectionMode::Orthogonal);

        config.save(&path).unwrap();
        let loaded = RenderConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, config);
    }
}
