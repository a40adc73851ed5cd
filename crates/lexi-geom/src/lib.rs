//! Lexi Geometry
//!
//! Guide-path geometry for letter tracing.
//!
//! Features:
//! - Path command model (move/line/quadratic/cubic)
//! - SVG-style path string parsing and serialization
//! - Glyph scaling about the viewbox center
//! - Bezier flattening and arc-length tables
//! - Nearest-point projection onto a sampled stroke
//! - Viewbox to pixel mapping
//!
//! Every function here is total: malformed input degrades to empty geometry
//! instead of an error.

mod point;
mod command;
mod sample;
mod viewport;

pub use point::Point;
pub use command::{
    CommandKind, PathCommand, GuideStroke,
    parse_path_commands, scale_commands, commands_to_path,
};
pub use sample::{SampledStroke, Projection, sample_points_from_commands};
pub use viewport::Viewport;

/// Side length of the square logical viewbox all guides are authored in
pub const VIEWBOX_SIZE: f32 = 400.0;
