//! Single-contour vector paths with stroke trimming.
//!
//! A [`Path`] is an ordered list of line and arc segments. Stroke ranges are
//! expressed as fractions of the path's total arc length, so a path can be
//! [trimmed](Path::trim) to the part a renderer should actually stroke.
//!
//! Angles are in radians and follow y-down screen coordinates: increasing
//! angles turn clockwise on screen.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

/// Angle differences closer than this to a whole turn count as a full turn.
const ANGLE_EPSILON: f32 = 1e-4;

/// Maximum angle covered by one flattened chord of an arc.
const MAX_CHORD_ANGLE: f32 = PI / 48.0;

/// A segment of a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    /// Straight line from the current point.
    LineTo(Point),
    /// Circular arc. If the path already has a current point that differs from
    /// the arc's start, a connecting line is implied.
    Arc {
        /// Arc center
        center: Point,
        /// Arc radius
        radius: f32,
        /// Start angle in radians
        start_angle: f32,
        /// End angle in radians
        end_angle: f32,
        /// Direction of travel on screen
        clockwise: bool,
    },
}

impl PathSegment {
    /// Point on a circle at `angle`.
    fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(radius.mul_add(cos, center.x), radius.mul_add(sin, center.y))
    }

    /// Signed sweep of an arc segment (positive = clockwise on screen).
    ///
    /// Returns `None` for line segments.
    #[must_use]
    pub fn sweep(&self) -> Option<f32> {
        match *self {
            Self::LineTo(_) => None,
            Self::Arc {
                start_angle,
                end_angle,
                clockwise,
                ..
            } => {
                if clockwise {
                    Some(positive_sweep(end_angle - start_angle))
                } else {
                    Some(-positive_sweep(start_angle - end_angle))
                }
            }
        }
    }

    /// First point of the segment, if it has an intrinsic one.
    #[must_use]
    pub fn start_point(&self) -> Option<Point> {
        match *self {
            Self::LineTo(_) => None,
            Self::Arc {
                center,
                radius,
                start_angle,
                ..
            } => Some(Self::point_on_circle(center, radius, start_angle)),
        }
    }

    /// Last point of the segment.
    #[must_use]
    pub fn end_point(&self) -> Point {
        match *self {
            Self::LineTo(p) => p,
            Self::Arc {
                center,
                radius,
                start_angle,
                ..
            } => {
                let sweep = self.sweep().unwrap_or(0.0);
                Self::point_on_circle(center, radius, start_angle + sweep)
            }
        }
    }
}

/// Positive angular distance for a raw difference, mapping non-zero whole turns
/// to a full circle.
fn positive_sweep(diff: f32) -> f32 {
    if diff == 0.0 {
        return 0.0;
    }
    let r = diff.rem_euclid(TAU);
    if r < ANGLE_EPSILON || TAU - r < ANGLE_EPSILON {
        TAU
    } else {
        r
    }
}

/// A single-contour path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    start: Option<Point>,
    segments: Vec<PathSegment>,
}

impl Path {
    /// Create an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty path whose contour starts at `point`.
    #[must_use]
    pub fn starting_at(point: Point) -> Self {
        Self {
            start: Some(point),
            segments: Vec::new(),
        }
    }

    /// Full circle inscribed in `rect` (uses the smaller side), starting at
    /// angle 0 and running clockwise.
    #[must_use]
    pub fn circle_in_rect(rect: Rect) -> Self {
        let radius = rect.width.min(rect.height) / 2.0;
        Self::new().arc(rect.center(), radius, 0.0, TAU, true)
    }

    /// Append an arc segment.
    #[must_use]
    pub fn arc(
        mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        clockwise: bool,
    ) -> Self {
        self.segments.push(PathSegment::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            clockwise,
        });
        self
    }

    /// Append a straight line to `point`.
    #[must_use]
    pub fn line_to(mut self, point: Point) -> Self {
        self.segments.push(PathSegment::LineTo(point));
        self
    }

    /// The path's segments in drawing order.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Whether the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Flatten the path into a polyline.
    ///
    /// Arcs are subdivided into chords no wider than `PI / 48`; the first and
    /// last points of every arc are exact.
    #[must_use]
    pub fn flatten(&self) -> Vec<Point> {
        let mut points: Vec<Point> = Vec::new();
        if let Some(start) = self.start {
            points.push(start);
        }

        for segment in &self.segments {
            match *segment {
                // A line with no current point just starts the contour.
                PathSegment::LineTo(p) => points.push(p),
                PathSegment::Arc {
                    center,
                    radius,
                    start_angle,
                    ..
                } => {
                    let sweep = segment.sweep().unwrap_or(0.0);
                    let steps = ((sweep.abs() / MAX_CHORD_ANGLE).ceil() as usize).max(1);
                    let arc_start = PathSegment::point_on_circle(center, radius, start_angle);
                    if points.last() != Some(&arc_start) {
                        points.push(arc_start);
                    }
                    for i in 1..steps {
                        let angle = (sweep * i as f32).mul_add(1.0 / steps as f32, start_angle);
                        points.push(PathSegment::point_on_circle(center, radius, angle));
                    }
                    points.push(segment.end_point());
                }
            }
        }

        points
    }

    /// Total arc length of the path.
    #[must_use]
    pub fn length(&self) -> f32 {
        let mut length = 0.0;
        let mut current = self.start;

        for segment in &self.segments {
            match *segment {
                PathSegment::LineTo(p) => {
                    if let Some(c) = current {
                        length += c.distance(&p);
                    }
                }
                PathSegment::Arc { radius, .. } => {
                    if let (Some(c), Some(s)) = (current, segment.start_point()) {
                        length += c.distance(&s);
                    }
                    length += radius * segment.sweep().unwrap_or(0.0).abs();
                }
            }
            current = Some(segment.end_point());
        }

        length
    }

    /// Polyline covering the stroke range `[start, end]`, given as fractions of
    /// the path's length.
    ///
    /// Fractions are clamped to `[0, 1]`. An empty or inverted range yields no
    /// points.
    #[must_use]
    pub fn trim(&self, start: f64, end: f64) -> Vec<Point> {
        let start = start.clamp(0.0, 1.0) as f32;
        let end = end.clamp(0.0, 1.0) as f32;
        let points = self.flatten();
        if end <= start || points.len() < 2 {
            return Vec::new();
        }

        let total: f32 = points.windows(2).map(|w| w[0].distance(&w[1])).sum();
        if total <= 0.0 {
            return Vec::new();
        }
        let from = start * total;
        let to = end * total;

        let mut out = Vec::new();
        let mut walked = 0.0_f32;
        for w in points.windows(2) {
            let (a, b) = (w[0], w[1]);
            let len = a.distance(&b);
            let next = walked + len;
            if len > 0.0 && next >= from && walked <= to {
                let t0 = ((from - walked) / len).clamp(0.0, 1.0);
                let t1 = ((to - walked) / len).clamp(0.0, 1.0);
                let p0 = a.lerp(&b, t0);
                if out.last() != Some(&p0) {
                    out.push(p0);
                }
                out.push(a.lerp(&b, t1));
            }
            walked = next;
            if walked > to {
                break;
            }
        }

        out
    }

}
