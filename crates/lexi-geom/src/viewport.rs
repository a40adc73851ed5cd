//! Viewbox to pixel mapping
//!
//! The square viewbox is fitted into the measured canvas with a uniform scale
//! and centered along the longer axis.

use crate::point::Point;
use crate::VIEWBOX_SIZE;

/// Measured canvas size plus the logical viewbox it displays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    viewbox: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(VIEWBOX_SIZE, VIEWBOX_SIZE)
    }
}

impl Viewport {
    /// Viewport over the standard viewbox
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_viewbox(width, height, VIEWBOX_SIZE)
    }

    /// Viewport over a custom viewbox side length.
    ///
    /// Zero, negative, or non-finite sizes are floored to 1 so conversions never divide by zero.
    pub fn with_viewbox(width: f32, height: f32, viewbox: f32) -> Self {
        Self {
            width: floor_one(width),
            height: floor_one(height),
            viewbox: floor_one(viewbox),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn viewbox(&self) -> f32 {
        self.viewbox
    }

    /// Shorter canvas side in pixels
    pub fn short_side(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Pixels per viewbox unit
    pub fn scale(&self) -> f32 {
        self.short_side() / self.viewbox
    }

    /// Pixel offset of the viewbox origin
    pub fn offset(&self) -> Point {
        let side = self.short_side();
        Point::new((self.width - side) / 2.0, (self.height - side) / 2.0)
    }

    /// Canvas-local pixel coordinates to viewbox coordinates
    pub fn to_viewbox(&self, p: Point) -> Point {
        let o = self.offset();
        let s = self.scale();
        Point::new((p.x - o.x) / s, (p.y - o.y) / s)
    }

    /// Viewbox coordinates to canvas-local pixel coordinates
    pub fn to_pixels(&self, p: Point) -> Point {
        let o = self.offset();
        let s = self.scale();
        Point::new(p.x * s + o.x, p.y * s + o.y)
    }
}

fn floor_one(v: f32) -> f32 {
    if v.is_finite() { v.max(1.0) } else { 1.0 }
}
