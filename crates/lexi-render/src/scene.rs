//! Trace scene
//!
//! A back-to-front display list built from the tracer state. Coordinates stay
//! in viewbox units; the rasterizer applies the viewport transform.

use lexi_geom::{GuideStroke, Point, parse_path_commands};
use lexi_trace::{Haptics, TraceObserver, Tracer};

use crate::color::Color;
use crate::style::{DashPattern, StrokeStyle, TraceStyle};

/// Visual layer of a scene item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Guide,
    Committed,
    Active,
    Partial,
    StartMarker,
    Cursor,
}

/// Display list item
#[derive(Debug, Clone, PartialEq)]
pub enum SceneItem {
    /// Faint underlay for one guide stroke
    Guide { stroke: GuideStroke, style: StrokeStyle },
    /// Finished stroke along its idealized path
    Committed { stroke: GuideStroke, style: StrokeStyle },
    /// Active stroke, revealed up to the progress by its dash offset
    Active { stroke: GuideStroke, style: StrokeStyle },
    /// Solid polyline through the samples up to the progress
    Partial { points: Vec<Point>, style: StrokeStyle },
    StartMarker { center: Point, radius: f32, color: Color },
    Cursor { center: Point, radius: f32, color: Color },
}

impl SceneItem {
    pub fn layer(&self) -> Layer {
        match self {
            SceneItem::Guide { .. } => Layer::Guide,
            SceneItem::Committed { .. } => Layer::Committed,
            SceneItem::Active { .. } => Layer::Active,
            SceneItem::Partial { .. } => Layer::Partial,
            SceneItem::StartMarker { .. } => Layer::StartMarker,
            SceneItem::Cursor { .. } => Layer::Cursor,
        }
    }
}

/// Everything needed to paint one frame
#[derive(Debug, Clone, PartialEq)]
pub struct TraceScene {
    pub background: Color,
    pub items: Vec<SceneItem>,
}

impl TraceScene {
    /// Build the display list for the tracer's current state
    pub fn build<O: TraceObserver, H: Haptics>(tracer: &Tracer<O, H>, style: &TraceStyle) -> Self {
        let guides = tracer.guides();
        let session = tracer.session();
        let mut items = Vec::new();

        if style.show_guide {
            items.extend(guides.iter().filter(|g| !g.stroke().is_empty()).map(|g| SceneItem::Guide {
                stroke: g.stroke().clone(),
                style: style.guide_stroke(),
            }));
        }

        items.extend(
            session
                .committed()
                .iter()
                .map(|d| parse_path_commands(d))
                .filter(|s| !s.is_empty())
                .map(|stroke| SceneItem::Committed { stroke, style: style.trace_stroke() }),
        );

        let active = guides
            .get(session.active_stroke())
            .filter(|g| g.is_traceable());
        if let Some(guide) = active {
            let sampled = guide.sampled();
            let progress = session.progress();
            let total = sampled.total_length();

            items.push(SceneItem::Active {
                stroke: guide.stroke().clone(),
                style: StrokeStyle::dashed(style.stroke_color, style.stroke_width, DashPattern::reveal(total, progress)),
            });

            let partial = sampled.prefix(progress);
            if partial.len() >= 2 {
                items.push(SceneItem::Partial { points: partial, style: style.trace_stroke() });
            }

            if let Some(center) = sampled.start() {
                items.push(SceneItem::StartMarker {
                    center,
                    radius: style.marker_radius,
                    color: style.start_marker_color,
                });
            }
            if let Some(center) = sampled.point_at_length(progress) {
                items.push(SceneItem::Cursor {
                    center,
                    radius: style.marker_radius * 0.6,
                    color: style.cursor_color,
                });
            }
        }

        Self { background: style.background, items }
    }

    /// Items on one layer
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &SceneItem> {
        self.items.iter().filter(move |i| i.layer() == layer)
    }
}
