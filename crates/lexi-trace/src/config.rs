//! Tracer configuration
//!
//! Every tolerance is a fraction of the viewbox side. Since the viewbox is
//! fitted to the canvas's shorter side, hit targets scale with the rendered
//! size instead of being fixed pixel counts.

use lexi_geom::VIEWBOX_SIZE;
use serde::{Deserialize, Serialize};

/// Tunables for guide sampling and gesture matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TracerConfig {
    /// Side of the square logical viewbox
    pub viewbox_size: f32,
    /// Points emitted per quadratic segment (cubics get 4 more)
    pub samples_per_segment: usize,
    /// Maximum spacing between samples after resampling, in viewbox units
    pub resample_step: f32,
    /// Touch-down must land this close to the stroke start to arm
    pub start_capture_fraction: f32,
    /// Moves farther than this from the stroke are ignored
    pub track_tolerance_fraction: f32,
    /// Backward motion up to this much is tolerated without losing progress
    pub backtrack_tolerance_fraction: f32,
    /// Share of the stroke length that must be covered before release commits
    pub completion_fraction: f32,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            viewbox_size: VIEWBOX_SIZE,
            samples_per_segment: 24,
            resample_step: 2.0,
            start_capture_fraction: 0.08,
            track_tolerance_fraction: 0.09,
            backtrack_tolerance_fraction: 0.06,
            completion_fraction: 0.985,
        }
    }
}

impl TracerConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TracerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tunable is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("viewbox_size", self.viewbox_size)?;
        positive("resample_step", self.resample_step)?;
        positive("start_capture_fraction", self.start_capture_fraction)?;
        positive("track_tolerance_fraction", self.track_tolerance_fraction)?;
        if !self.backtrack_tolerance_fraction.is_finite() || self.backtrack_tolerance_fraction < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "backtrack_tolerance_fraction",
                value: self.backtrack_tolerance_fraction,
            });
        }
        let c = self.completion_fraction;
        if c.is_nan() || c <= 0.0 || c > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "completion_fraction",
                value: self.completion_fraction,
            });
        }
        if self.samples_per_segment == 0 {
            return Err(ConfigError::OutOfRange { field: "samples_per_segment", value: 0.0 });
        }
        Ok(())
    }

    /// Start capture radius in viewbox units
    pub fn start_capture_radius(&self) -> f32 {
        self.start_capture_fraction * self.viewbox_size
    }

    /// Track tolerance in viewbox units
    pub fn track_tolerance(&self) -> f32 {
        self.track_tolerance_fraction * self.viewbox_size
    }

    /// Backtrack tolerance in viewbox units
    pub fn backtrack_tolerance(&self) -> f32 {
        self.backtrack_tolerance_fraction * self.viewbox_size
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config value out of range: {field} = {value}")]
    OutOfRange { field: &'static str, value: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_valid() {
        let config = TracerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start_capture_radius(), 0.08 * 400.0);
    }

    #[test]
    fn test_from_json_partial() {
        let config = TracerConfig::from_json(r#"{ "completion_fraction": 0.9 }"#).unwrap();
        assert_eq!(config.completion_fraction, 0.9);
        assert_eq!(config.samples_per_segment, 24);
    }

    #[test]
    fn test_from_json_rejects_out_of_range() {
        let err = TracerConfig::from_json(r#"{ "completion_fraction": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "completion_fraction", .. }));

        let err = TracerConfig::from_json(r#"{ "resample_step": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "resample_step", .. }));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(TracerConfig::from_json("not json"), Err(ConfigError::Json(_))));
    }
}
