//! Paint styles

use crate::color::Color;

/// How one line is stroked. Widths and dash lengths are in viewbox units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    /// `None` strokes a solid line
    pub dash: Option<DashPattern>,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub fn dashed(color: Color, width: f32, dash: DashPattern) -> Self {
        Self { dash: Some(dash), ..Self::solid(color, width) }
    }
}

/// Two-interval dash: `dash` on, `gap` off, starting `offset` into the pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashPattern {
    pub dash: f32,
    pub gap: f32,
    pub offset: f32,
}

impl DashPattern {
    /// Shows the first `progress` units of a path `total` long and hides the rest
    pub fn reveal(total: f32, progress: f32) -> Self {
        let shown = progress.max(0.0).min(total);
        Self { dash: total, gap: total, offset: total - shown }
    }
}

/// Look of the tracing canvas
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStyle {
    /// Color of traced and committed strokes
    pub stroke_color: Color,
    /// Trace width in viewbox units
    pub stroke_width: f32,
    pub guide_color: Color,
    /// Guide width as a multiple of the trace width
    pub guide_width_factor: f32,
    pub show_guide: bool,
    pub marker_radius: f32,
    pub start_marker_color: Color,
    pub cursor_color: Color,
    pub background: Color,
}

impl Default for TraceStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::rgb(0x25, 0x63, 0xeb),
            stroke_width: 14.0,
            guide_color: Color::rgba(0x94, 0xa3, 0xb8, 0x66),
            guide_width_factor: 1.8,
            show_guide: true,
            marker_radius: 10.0,
            start_marker_color: Color::rgb(0x16, 0xa3, 0x4a),
            cursor_color: Color::rgb(0xf5, 0x9e, 0x0b),
            background: Color::WHITE,
        }
    }
}

impl TraceStyle {
    pub fn guide_stroke(&self) -> StrokeStyle {
        StrokeStyle::solid(self.guide_color, self.stroke_width * self.guide_width_factor)
    }

    pub fn trace_stroke(&self) -> StrokeStyle {
        StrokeStyle::solid(self.stroke_color, self.stroke_width)
    }
}
