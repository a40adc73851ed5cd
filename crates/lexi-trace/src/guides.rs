//! Guide strokes
//!
//! Hosts hand us guides either as path strings or as point lists. Both are
//! normalized into `GuideStroke`s here, once, and everything downstream works
//! on the sampled form.

use lexi_geom::{
    GuideStroke, Point, SampledStroke, commands_to_path, parse_path_commands, scale_commands,
};
use serde::{Deserialize, Serialize};

use crate::config::TracerConfig;

/// Guide input as supplied by the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GuideInput {
    /// SVG-style path strings, one per stroke
    Paths(Vec<String>),
    /// Point lists, one per stroke
    Points(Vec<Vec<Point>>),
}

impl GuideInput {
    pub fn from_paths<S: AsRef<str>>(paths: &[S]) -> Self {
        GuideInput::Paths(paths.iter().map(|p| p.as_ref().to_string()).collect())
    }

    /// Number of strokes in the input
    pub fn len(&self) -> usize {
        match self {
            GuideInput::Paths(p) => p.len(),
            GuideInput::Points(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn strokes(&self) -> Vec<GuideStroke> {
        match self {
            GuideInput::Paths(paths) => paths.iter().map(|d| parse_path_commands(d)).collect(),
            GuideInput::Points(lists) => lists.iter().map(|pts| GuideStroke::from_points(pts)).collect(),
        }
    }
}

impl Default for GuideInput {
    fn default() -> Self {
        GuideInput::Paths(Vec::new())
    }
}

/// One stroke, ready for tracing
#[derive(Debug, Clone)]
pub struct Guide {
    stroke: GuideStroke,
    path: String,
    sampled: SampledStroke,
}

impl Guide {
    fn build(stroke: GuideStroke, glyph_scale: f32, config: &TracerConfig) -> Self {
        let stroke = scale_commands(&stroke, glyph_scale, config.viewbox_size);
        let path = commands_to_path(&stroke);
        let sampled = SampledStroke::from_stroke(&stroke, config.samples_per_segment, config.resample_step);
        Self { stroke, path, sampled }
    }

    /// Scaled command list
    pub fn stroke(&self) -> &GuideStroke {
        &self.stroke
    }

    /// Idealized path string, committed when the stroke is traced
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn sampled(&self) -> &SampledStroke {
        &self.sampled
    }

    /// Stroke has length to trace along
    pub fn is_traceable(&self) -> bool {
        self.sampled.total_length() > 0.0
    }
}

/// Every stroke of the current letter
#[derive(Debug, Clone, Default)]
pub struct GuideSet {
    guides: Vec<Guide>,
}

impl GuideSet {
    /// Normalize, scale and sample every stroke.
    ///
    /// Strokes without usable geometry stay in the set as untraceable entries
    /// so indices line up with the input.
    pub fn build(input: &GuideInput, glyph_scale: f32, config: &TracerConfig) -> Self {
        let guides: Vec<Guide> = input
            .strokes()
            .into_iter()
            .map(|s| Guide::build(s, glyph_scale, config))
            .collect();

        let traceable = guides.iter().filter(|g| g.is_traceable()).count();
        tracing::debug!("Built {} guide strokes ({} traceable)", guides.len(), traceable);

        Self { guides }
    }

    pub fn get(&self, index: usize) -> Option<&Guide> {
        self.guides.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Guide> {
        self.guides.iter()
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    /// At least one stroke can be traced
    pub fn has_traceable(&self) -> bool {
        self.guides.iter().any(Guide::is_traceable)
    }
}
