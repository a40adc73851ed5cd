//! Lexi Render - Trace Canvas Painting
//!
//! CPU rendering of the tracing canvas using tiny-skia.
//!
//! Layers, back to front:
//! - Guide underlay for every stroke
//! - Committed strokes
//! - Active stroke revealed by dash offset
//! - Solid partial path up to the current progress
//! - Start and cursor markers

mod color;
mod style;
mod scene;
mod raster;

pub use color::Color;
pub use style::{StrokeStyle, DashPattern, TraceStyle};
pub use scene::{TraceScene, SceneItem, Layer};
pub use raster::{rasterize, paint_into, encode_png, save_png};

/// Render error
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Cannot allocate {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}
