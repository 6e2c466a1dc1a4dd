//! Geometry of the check glyph.
//!
//! The glyph lives in a square of side `min(width, height)` anchored at the
//! control's origin. The animated path is a full ring followed by the two
//! strokes of a check mark, so a single stroke range can slide from "ring" to
//! "check" without the path ever changing shape.

use checkmark_core::{Path, Point, Rect, Size};
use std::f32::consts::PI;

/// Start angle of the ring arc.
pub const ARC_START_ANGLE: f32 = 3.15 * PI;
/// End angle of the ring arc. Exactly one turn before the start.
pub const ARC_END_ANGLE: f32 = 1.15 * PI;
/// The ring is drawn counter-clockwise on screen.
pub const ARC_CLOCKWISE: bool = false;

/// Check vertex, as fractions of the circle size.
pub const CHECK_VERTEX: (f32, f32) = (10.5 / 25.0, 17.0 / 25.0);
/// Check tip, as fractions of the circle size.
pub const CHECK_TIP: (f32, f32) = (21.0 / 25.0, 7.0 / 25.0);

/// Square the glyph occupies for the given control size.
#[must_use]
pub fn circle_size(bounds: Size) -> Size {
    bounds.min_square()
}

/// Bottom vertex of the check for a circle of `circle` size.
#[must_use]
pub fn check_vertex(circle: Size) -> Point {
    Point::new(circle.width * CHECK_VERTEX.0, circle.height * CHECK_VERTEX.1)
}

/// Upper tip of the check for a circle of `circle` size.
#[must_use]
pub fn check_tip(circle: Size) -> Point {
    Point::new(circle.width * CHECK_TIP.0, circle.height * CHECK_TIP.1)
}

/// Ring-then-check path for a circle of `circle` size.
#[must_use]
pub fn check_path(circle: Size) -> Path {
    let center = Point::new(circle.width / 2.0, circle.height / 2.0);
    Path::new()
        .arc(
            center,
            circle.height / 2.0,
            ARC_START_ANGLE,
            ARC_END_ANGLE,
            ARC_CLOCKWISE,
        )
        .line_to(check_vertex(circle))
        .line_to(check_tip(circle))
}

/// Background ring inscribed in the circle square.
#[must_use]
pub fn ring_path(circle: Size) -> Path {
    Path::circle_in_rect(Rect::from_size(circle))
}
