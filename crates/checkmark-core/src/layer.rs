//! Shape layers: the retained property set a renderer strokes.

use crate::draw::{LineCap, LineJoin, StrokeStyle};
use crate::path::Path;
use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// A stroked (and optionally filled) path with a visible stroke range.
///
/// `stroke_start` and `stroke_end` are the *model* values: what the layer
/// shows when no animation is presenting other values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeLayer {
    /// Geometry
    pub path: Path,
    /// Fill color (None = no fill)
    pub fill: Option<Color>,
    /// Stroke color
    pub stroke_color: Color,
    /// Stroke width in points
    pub line_width: f32,
    /// Line cap style
    pub line_cap: LineCap,
    /// Line join style
    pub line_join: LineJoin,
    /// Start of the visible stroke, as a fraction of path length
    pub stroke_start: f64,
    /// End of the visible stroke, as a fraction of path length
    pub stroke_end: f64,
}

impl Default for ShapeLayer {
    fn default() -> Self {
        Self {
            path: Path::new(),
            fill: None,
            stroke_color: Color::BLACK,
            line_width: 1.0,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
            stroke_start: 0.0,
            stroke_end: 1.0,
        }
    }
}

impl ShapeLayer {
    /// Create an unfilled layer with default stroke.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stroke style derived from the layer's properties.
    #[must_use]
    pub const fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.stroke_color,
            width: self.line_width,
            cap: self.line_cap,
            join: self.line_join,
        }
    }

    /// Polyline of the part of the path that is visible for the given range.
    #[must_use]
    pub fn visible_points(&self, stroke_start: f64, stroke_end: f64) -> Vec<Point> {
        self.path.trim(stroke_start, stroke_end)
    }
}
