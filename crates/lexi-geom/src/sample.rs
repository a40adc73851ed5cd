//! Stroke sampling and arc-length tables

use crate::command::{GuideStroke, PathCommand};
use crate::point::Point;

/// Upper bound on subdivisions of a single polyline segment
const MAX_SUBDIVISIONS: usize = 4096;

/// Flatten a stroke into a polyline.
///
/// Moves and lines emit their end point. Quadratics emit `samples_per_segment`
/// points and cubics `samples_per_segment + 4`, evenly spaced in the curve
/// parameter. Commands with non-finite coordinates are skipped.
pub fn sample_points_from_commands(stroke: &GuideStroke, samples_per_segment: usize) -> Vec<Point> {
    let n = samples_per_segment.max(1);
    let mut out = Vec::new();
    let mut cursor = Point::ORIGIN;

    for cmd in stroke.commands() {
        if !cmd.is_finite() {
            continue;
        }
        match *cmd {
            PathCommand::Move(p) | PathCommand::Line(p) => out.push(p),
            PathCommand::Quadratic { ctrl, to } => {
                for i in 1..=n {
                    out.push(quadratic_at(cursor, ctrl, to, i as f32 / n as f32));
                }
            }
            PathCommand::Cubic { ctrl1, ctrl2, to } => {
                let n = n + 4;
                for i in 1..=n {
                    out.push(cubic_at(cursor, ctrl1, ctrl2, to, i as f32 / n as f32));
                }
            }
        }
        cursor = cmd.end();
    }
    out
}

fn quadratic_at(p0: Point, p1: Point, p2: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    Point::new(
        mt * mt * p0.x + 2.0 * mt * t * p1.x + t * t * p2.x,
        mt * mt * p0.y + 2.0 * mt * t * p1.y + t * t * p2.y,
    )
}

fn cubic_at(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    Point::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

/// Result of projecting a point onto a sampled stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Index of the nearest sample
    pub index: usize,
    /// Arc length at that sample
    pub arc_length: f32,
    /// Distance from the query point to the sample
    pub distance: f32,
}

/// Dense polyline with a cumulative arc-length table.
///
/// `cum_len[0] == 0`, `cum_len` is non-decreasing and
/// `total_length == cum_len[last]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampledStroke {
    points: Vec<Point>,
    cum_len: Vec<f32>,
    total_length: f32,
}

impl SampledStroke {
    /// Build the arc-length table for a polyline.
    ///
    /// Segments longer than `resample_step` are subdivided so projection has
    /// enough samples to land on. A step of zero or a non-finite step keeps the
    /// points as given.
    pub fn from_points(points: &[Point], resample_step: f32) -> Self {
        let points: Vec<Point> = points.iter().copied().filter(Point::is_finite).collect();
        let Some(&first) = points.first() else {
            return Self::default();
        };

        let mut dense = Vec::with_capacity(points.len());
        dense.push(first);
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let pieces = subdivisions(a.distance(b), resample_step);
            for i in 1..=pieces {
                dense.push(a.lerp(b, i as f32 / pieces as f32));
            }
        }

        let mut cum_len = Vec::with_capacity(dense.len());
        let mut total = 0.0f32;
        cum_len.push(0.0);
        for pair in dense.windows(2) {
            total += pair[0].distance(pair[1]);
            cum_len.push(total);
        }

        Self { points: dense, cum_len, total_length: total }
    }

    /// Sample a guide stroke and build its table in one go
    pub fn from_stroke(stroke: &GuideStroke, samples_per_segment: usize, resample_step: f32) -> Self {
        Self::from_points(&sample_points_from_commands(stroke, samples_per_segment), resample_step)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn cum_len(&self) -> &[f32] {
        &self.cum_len
    }

    pub fn total_length(&self) -> f32 {
        self.total_length
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Nearest sample to `p` by linear scan. Ties go to the lowest index.
    pub fn nearest(&self, p: Point) -> Option<Projection> {
        if !p.is_finite() {
            return None;
        }
        let mut best: Option<(usize, f32)> = None;
        for (i, s) in self.points.iter().enumerate() {
            let d = s.distance_squared(p);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(index, d)| Projection {
            index,
            arc_length: self.cum_len[index],
            distance: d.sqrt(),
        })
    }

    /// Index of the first sample whose arc length reaches `len`, clamped to the last sample
    pub fn index_at_length(&self, len: f32) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }
        let i = self.cum_len.partition_point(|&l| l < len);
        Some(i.min(self.points.len() - 1))
    }

    /// Point at arc length `len`, interpolated between samples
    pub fn point_at_length(&self, len: f32) -> Option<Point> {
        let i = self.index_at_length(len)?;
        if i == 0 || !len.is_finite() {
            return self.points.get(i).copied();
        }
        let (l0, l1) = (self.cum_len[i - 1], self.cum_len[i]);
        let seg = l1 - l0;
        if seg <= 0.0 || len >= l1 {
            return Some(self.points[i]);
        }
        let t = ((len - l0) / seg).clamp(0.0, 1.0);
        Some(self.points[i - 1].lerp(self.points[i], t))
    }

    /// Samples from the start up to the point at arc length `len`
    pub fn prefix(&self, len: f32) -> Vec<Point> {
        let Some(i) = self.index_at_length(len) else {
            return Vec::new();
        };
        let mut out = self.points[..i].to_vec();
        if let Some(p) = self.point_at_length(len) {
            out.push(p);
        }
        out
    }
}

fn subdivisions(len: f32, step: f32) -> usize {
    if step.is_nan() || step <= 0.0 || !step.is_finite() || !len.is_finite() {
        return 1;
    }
    ((len / step).ceil() as usize).clamp(1, MAX_SUBDIVISIONS)
}
