//! The two shape layers a check button owns.

use crate::check_path::{check_path, circle_size, ring_path};
use crate::sequencer::StrokeRange;
use crate::style::ButtonStyle;
use checkmark_core::{LineCap, LineJoin, ShapeLayer, Size};
use tracing::trace;

/// Background ring plus the animated ring-to-check stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckLayers {
    background: ShapeLayer,
    animated: ShapeLayer,
    circle: Size,
}

impl CheckLayers {
    /// Layers styled by `style`, with empty geometry until the first layout.
    #[must_use]
    pub fn new(style: &ButtonStyle) -> Self {
        let unchecked = StrokeRange::UNCHECKED;
        let mut layers = Self {
            background: ShapeLayer {
                fill: None,
                stroke_start: 0.0,
                stroke_end: 1.0,
                ..ShapeLayer::default()
            },
            animated: ShapeLayer {
                fill: None,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                stroke_start: unchecked.start,
                stroke_end: unchecked.end,
                ..ShapeLayer::default()
            },
            circle: Size::ZERO,
        };
        layers.apply_style(style);
        layers
    }

    /// Push colors and width from `style` onto both layers.
    pub fn apply_style(&mut self, style: &ButtonStyle) {
        self.background.stroke_color = style.ring_color();
        self.background.line_width = style.line_width;
        self.animated.stroke_color = style.check_color();
        self.animated.line_width = style.line_width;
    }

    /// Rebuild both paths for a control of `bounds` size.
    pub fn sync_geometry(&mut self, bounds: Size) {
        let circle = circle_size(bounds);
        trace!(width = circle.width, height = circle.height, "check geometry synced");
        self.circle = circle;
        self.background.path = ring_path(circle);
        self.animated.path = check_path(circle);
    }

    /// Make `range` the animated layer's resting stroke range.
    pub fn commit_stroke(&mut self, range: StrokeRange) {
        self.animated.stroke_start = range.start;
        self.animated.stroke_end = range.end;
    }

    /// Resting stroke range of the animated layer.
    #[must_use]
    pub const fn committed_stroke(&self) -> StrokeRange {
        StrokeRange::new(self.animated.stroke_start, self.animated.stroke_end)
    }

    /// Square the glyph currently occupies.
    #[must_use]
    pub const fn circle_size(&self) -> Size {
        self.circle
    }

    /// Static ring layer.
    #[must_use]
    pub const fn background(&self) -> &ShapeLayer {
        &self.background
    }

    /// Animated check layer.
    #[must_use]
    pub const fn animated(&self) -> &ShapeLayer {
        &self.animated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkmark_core::{Color, PathSegment, Point};

    #[test]
    fn test_new_layers() {
        let layers = CheckLayers::new(&ButtonStyle::default());
        let bg = layers.background();
        assert!(bg.fill.is_none());
        assert_eq!(bg.stroke_color, Color::ACCENT.with_alpha(0.2));
        assert_eq!((bg.stroke_start, bg.stroke_end), (0.0, 1.0));

        let anim = layers.animated();
        assert!(anim.fill.is_none());
        assert_eq!(anim.stroke_color, Color::ACCENT);
        assert_eq!(anim.line_cap, LineCap::Round);
        assert_eq!(anim.line_join, LineJoin::Round);
        assert_eq!(anim.line_width, 8.0);
        assert_eq!(layers.committed_stroke(), StrokeRange::UNCHECKED);
    }

    #[test]
    fn test_apply_style_propagates_to_both() {
        let mut layers = CheckLayers::new(&ButtonStyle::default());
        let style = ButtonStyle {
            color: Color::rgb(1.0, 0.0, 0.0),
            circle_alpha: 0.5,
            line_width: 3.0,
            ..ButtonStyle::default()
        };
        layers.apply_style(&style);
        assert_eq!(layers.background().stroke_color, Color::rgb(1.0, 0.0, 0.0).with_alpha(0.5));
        assert_eq!(layers.animated().stroke_color, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(layers.background().line_width, 3.0);
        assert_eq!(layers.animated().line_width, 3.0);
    }

    #[test]
    fn test_sync_geometry_rebuilds_paths() {
        let mut layers = CheckLayers::new(&ButtonStyle::default());
        assert!(layers.animated().path.is_empty());

        layers.sync_geometry(Size::new(200.0, 50.0));
        assert_eq!(layers.circle_size(), Size::square(50.0));
        assert_eq!(layers.animated().path.segments().len(), 3);
        assert_eq!(
            layers.animated().path.segments().last(),
            Some(&PathSegment::LineTo(Point::new(42.0, 14.0)))
        );

        layers.sync_geometry(Size::square(25.0));
        assert_eq!(
            layers.animated().path.segments().last(),
            Some(&PathSegment::LineTo(Point::new(21.0, 7.0)))
        );
    }

    #[test]
    fn test_commit_stroke_only_touches_animated() {
        let mut layers = CheckLayers::new(&ButtonStyle::default());
        layers.commit_stroke(StrokeRange::CHECKED);
        assert_eq!(layers.committed_stroke(), StrokeRange::CHECKED);
        assert_eq!(layers.background().stroke_end, 1.0);
    }
}
