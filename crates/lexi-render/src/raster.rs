//! Rasterizer
//!
//! Paints a [`TraceScene`] with tiny-skia. Scene coordinates are viewbox units,
//! so stroke widths and dash lengths scale with the canvas.

use std::path::Path as FsPath;

use lexi_geom::{GuideStroke, PathCommand, Point, Viewport};
use tiny_skia::{FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, Stroke, StrokeDash, Transform};

use crate::color::Color;
use crate::scene::{SceneItem, TraceScene};
use crate::style::StrokeStyle;
use crate::RenderError;

/// Render the scene into a new pixmap sized to the viewport
pub fn rasterize(scene: &TraceScene, viewport: &Viewport) -> Result<Pixmap, RenderError> {
    let width = viewport.width().ceil() as u32;
    let height = viewport.height().ceil() as u32;
    let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::EmptyCanvas { width, height })?;
    pixmap.fill(scene.background.to_skia());
    paint_into(scene, viewport, &mut pixmap);
    Ok(pixmap)
}

/// Paint the scene items over an existing pixmap. The background is not filled.
pub fn paint_into(scene: &TraceScene, viewport: &Viewport, pixmap: &mut Pixmap) {
    let s = viewport.scale();
    let o = viewport.offset();
    let transform = Transform::from_row(s, 0.0, 0.0, s, o.x, o.y);

    let mut painted = 0usize;
    for item in &scene.items {
        let done = match item {
            SceneItem::Guide { stroke, style }
            | SceneItem::Committed { stroke, style }
            | SceneItem::Active { stroke, style } => {
                stroke_to_path(stroke).is_some_and(|path| stroke_path(pixmap, &path, style, transform))
            }
            SceneItem::Partial { points, style } => {
                polyline_to_path(points).is_some_and(|path| stroke_path(pixmap, &path, style, transform))
            }
            SceneItem::StartMarker { center, radius, color } | SceneItem::Cursor { center, radius, color } => {
                fill_circle(pixmap, *center, *radius, *color, transform)
            }
        };
        if done {
            painted += 1;
        } else {
            tracing::trace!("Skipped {:?} item", item.layer());
        }
    }

    tracing::debug!(
        "Painted {}/{} items at {}x{}",
        painted,
        scene.items.len(),
        pixmap.width(),
        pixmap.height()
    );
}

/// Encode the pixmap as PNG bytes
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>, RenderError> {
    pixmap.encode_png().map_err(|e| RenderError::Encode(e.to_string()))
}

/// Write the pixmap to a PNG file
pub fn save_png(pixmap: &Pixmap, path: impl AsRef<FsPath>) -> Result<(), RenderError> {
    pixmap.save_png(path).map_err(|e| RenderError::Encode(e.to_string()))
}

fn stroke_to_path(stroke: &GuideStroke) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for cmd in stroke.commands() {
        match *cmd {
            PathCommand::Move(p) => pb.move_to(p.x, p.y),
            PathCommand::Line(p) => pb.line_to(p.x, p.y),
            PathCommand::Quadratic { ctrl, to } => pb.quad_to(ctrl.x, ctrl.y, to.x, to.y),
            PathCommand::Cubic { ctrl1, ctrl2, to } => {
                pb.cubic_to(ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y)
            }
        }
    }
    pb.finish()
}

fn polyline_to_path(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.finish()
}

fn stroke_path(pixmap: &mut Pixmap, path: &Path, style: &StrokeStyle, transform: Transform) -> bool {
    let dash = match style.dash {
        Some(d) => match StrokeDash::new(vec![d.dash, d.gap], d.offset) {
            Some(dash) => Some(dash),
            None => return false,
        },
        None => None,
    };
    let stroke = Stroke {
        width: style.width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        dash,
        ..Stroke::default()
    };
    pixmap.stroke_path(path, &paint(style.color), &stroke, transform, None);
    true
}

fn fill_circle(pixmap: &mut Pixmap, center: Point, radius: f32, color: Color, transform: Transform) -> bool {
    let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) else {
        return false;
    };
    pixmap.fill_path(&path, &paint(color), FillRule::Winding, transform, None);
    true
}

fn paint(color: Color) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;
    paint
}
