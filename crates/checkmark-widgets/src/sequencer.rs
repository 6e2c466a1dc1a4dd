//! Select / deselect timelines for the check stroke.
//!
//! Both timelines are four keyframe animations over the animated layer's
//! stroke range. The stroke first overshoots by [`ANIMATION_OFFSET`] and then
//! settles, so the check visibly "lands". Endpoints are fixed constants; they
//! do not depend on control size or on where an interrupted timeline was.

use checkmark_core::{AnimatableProperty, AnimationGroup, Easing, FillMode, KeyframeAnimation};
use serde::{Deserialize, Serialize};

/// Key both timelines are submitted under, so a new toggle replaces the
/// timeline in flight.
pub const ANIMATION_KEY: &str = "check";

/// Overshoot added to the checked stroke range before settling.
pub const ANIMATION_OFFSET: f64 = 0.02;

/// Stroke start while unchecked.
pub const STROKE_START_UNCHECKED: f64 = 0.0;
/// Stroke start while checked.
pub const STROKE_START_CHECKED: f64 = 0.815;
/// Stroke end while unchecked.
pub const STROKE_END_UNCHECKED: f64 = 0.735;
/// Stroke end while checked.
pub const STROKE_END_CHECKED: f64 = 0.98;

/// Share of the select timeline spent on the main move.
const SELECT_MAIN_SHARE: f64 = 0.8;
/// Share of the deselect timeline spent on the overshoot.
const DESELECT_LEAD_SHARE: f64 = 0.2;

/// Visible portion of the check path, as fractions of its length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeRange {
    /// Stroke start
    pub start: f64,
    /// Stroke end
    pub end: f64,
}

impl StrokeRange {
    /// Ring visible, check hidden.
    pub const UNCHECKED: Self = Self {
        start: STROKE_START_UNCHECKED,
        end: STROKE_END_UNCHECKED,
    };

    /// Check visible, ring hidden.
    pub const CHECKED: Self = Self {
        start: STROKE_START_CHECKED,
        end: STROKE_END_CHECKED,
    };

    /// Create a range.
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Resting range for a toggle state.
    #[must_use]
    pub const fn for_state(selected: bool) -> Self {
        if selected {
            Self::CHECKED
        } else {
            Self::UNCHECKED
        }
    }

    /// Whether both ends match `other` bit for bit.
    #[must_use]
    pub fn bits_eq(&self, other: &Self) -> bool {
        self.start.to_bits() == other.start.to_bits() && self.end.to_bits() == other.end.to_bits()
    }
}

impl Default for StrokeRange {
    fn default() -> Self {
        Self::UNCHECKED
    }
}

fn segment(property: AnimatableProperty, from: f64, to: f64, begin: f64, duration: f64) -> KeyframeAnimation {
    KeyframeAnimation::new(property, from, to, duration)
        .begin_at(begin)
        .with_fill_mode(FillMode::Both)
}

fn holding_group(duration: f64) -> AnimationGroup {
    AnimationGroup::new(duration)
        .with_fill_mode(FillMode::Both)
        .removed_on_completion(false)
}

/// Timeline moving the stroke from the ring to the check.
#[must_use]
pub fn select_group(duration: f64) -> AnimationGroup {
    use AnimatableProperty::{StrokeEnd, StrokeStart};

    let main = duration * SELECT_MAIN_SHARE;
    let settle = duration - main;
    let start_peak = STROKE_START_CHECKED + ANIMATION_OFFSET;
    let end_peak = STROKE_END_CHECKED + ANIMATION_OFFSET;

    holding_group(duration)
        .with_animation(
            segment(StrokeStart, STROKE_START_UNCHECKED, start_peak, 0.0, main)
                .with_easing(Easing::EaseOut),
        )
        .with_animation(
            segment(StrokeEnd, STROKE_END_UNCHECKED, end_peak, 0.0, main)
                .with_easing(Easing::EaseOut),
        )
        .with_animation(segment(StrokeStart, start_peak, STROKE_START_CHECKED, main, settle))
        .with_animation(segment(StrokeEnd, end_peak, STROKE_END_CHECKED, main, settle))
}

/// Timeline moving the stroke from the check back to the ring.
#[must_use]
pub fn deselect_group(duration: f64) -> AnimationGroup {
    use AnimatableProperty::{StrokeEnd, StrokeStart};

    let lead = duration * DESELECT_LEAD_SHARE;
    let main = duration - lead;
    let start_peak = STROKE_START_CHECKED + ANIMATION_OFFSET;
    let end_peak = STROKE_END_CHECKED + ANIMATION_OFFSET;

    holding_group(duration)
        .with_animation(
            segment(StrokeStart, STROKE_START_CHECKED, start_peak, 0.0, lead)
                .with_easing(Easing::EaseIn),
        )
        .with_animation(
            segment(StrokeEnd, STROKE_END_CHECKED, end_peak, 0.0, lead).with_easing(Easing::EaseIn),
        )
        .with_animation(segment(StrokeStart, start_peak, STROKE_START_UNCHECKED, lead, main))
        .with_animation(segment(StrokeEnd, end_peak, STROKE_END_UNCHECKED, lead, main))
}

/// Timeline that moves the stroke into the resting range of `selected`.
#[must_use]
pub fn group_for(selected: bool, duration: f64) -> AnimationGroup {
    if selected {
        select_group(duration)
    } else {
        deselect_group(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AnimatableProperty::{StrokeEnd, StrokeStart};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_select_group_shape() {
        let g = select_group(0.5);
        assert_eq!(g.duration, 0.5);
        assert_eq!(g.animations.len(), 4);
        assert!(!g.removed_on_completion);
        assert!(g.fill_mode.holds_forwards() && g.fill_mode.holds_backwards());

        let first = g.animations[0];
        assert_eq!(first.property, StrokeStart);
        assert_eq!(first.easing, Easing::EaseOut);
        assert!(approx(first.duration, 0.4));
        assert!(approx(first.to, 0.835));

        let last = g.animations[3];
        assert_eq!(last.property, StrokeEnd);
        assert_eq!(last.easing, Easing::Linear);
        assert!(approx(last.begin, 0.4));
        assert!(approx(last.end(), 0.5));
        assert_eq!(last.to, STROKE_END_CHECKED);
    }

    #[test]
    fn test_select_values_over_time() {
        let g = select_group(0.5);
        assert_eq!(g.value_at(StrokeStart, 0.0), Some(0.0));
        assert_eq!(g.value_at(StrokeEnd, 0.0), Some(0.735));
        assert!(approx(g.value_at(StrokeStart, 0.4).unwrap(), 0.835));
        assert!(approx(g.value_at(StrokeEnd, 0.4).unwrap(), 1.0));
        assert_eq!(g.final_value(StrokeStart), Some(0.815));
        assert_eq!(g.final_value(StrokeEnd), Some(0.98));
    }

    #[test]
    fn test_deselect_group_shape() {
        let g = deselect_group(0.5);
        assert_eq!(g.animations.len(), 4);
        assert_eq!(g.animations[0].easing, Easing::EaseIn);
        assert_eq!(g.animations[1].easing, Easing::EaseIn);
        assert!(approx(g.animations[0].duration, 0.1));
        assert!(approx(g.animations[2].begin, 0.1));
        assert!(approx(g.animations[2].duration, 0.4));
    }

    #[test]
    fn test_deselect_returns_to_initial_values() {
        let g = deselect_group(0.5);
        assert_eq!(g.value_at(StrokeStart, 0.0), Some(0.815));
        assert_eq!(g.value_at(StrokeEnd, 0.0), Some(0.98));
        assert_eq!(
            g.final_value(StrokeStart).map(f64::to_bits),
            Some(STROKE_START_UNCHECKED.to_bits())
        );
        assert_eq!(
            g.final_value(StrokeEnd).map(f64::to_bits),
            Some(STROKE_END_UNCHECKED.to_bits())
        );
    }

    #[test]
    fn test_endpoints_independent_of_duration() {
        for d in [0.1, 0.5, 2.0] {
            assert_eq!(select_group(d).final_value(StrokeStart), Some(0.815));
            assert_eq!(deselect_group(d).final_value(StrokeEnd), Some(0.735));
        }
    }

    #[test]
    fn test_group_for_dispatches() {
        assert_eq!(group_for(true, 0.5), select_group(0.5));
        assert_eq!(group_for(false, 0.5), deselect_group(0.5));
    }

    #[test]
    fn test_stroke_range_for_state() {
        assert_eq!(StrokeRange::for_state(false), StrokeRange::new(0.0, 0.735));
        assert_eq!(StrokeRange::for_state(true), StrokeRange::new(0.815, 0.98));
        assert!(StrokeRange::default().bits_eq(&StrokeRange::UNCHECKED));
    }
}
