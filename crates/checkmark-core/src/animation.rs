//! Declarative keyframe animations over numeric layer properties.
//!
//! An [`AnimationGroup`] is a finite timeline: an ordered list of
//! [`KeyframeAnimation`]s, each moving one [`AnimatableProperty`] from a value
//! to another over a window of the group's time. Groups are plain data; an
//! [`AnimationScheduler`](crate::AnimationScheduler) decides when they run.

use serde::{Deserialize, Serialize};

// =============================================================================
// Easing Functions
// =============================================================================

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    EaseOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => Self::ease_in_quad(t),
            Self::EaseOut => Self::ease_out_quad(t),
        }
    }

    fn ease_in_quad(t: f64) -> f64 {
        t * t
    }

    fn ease_out_quad(t: f64) -> f64 {
        (1.0 - t).mul_add(-(1.0 - t), 1.0)
    }
}

// =============================================================================
// Properties and fill modes
// =============================================================================

/// Numeric layer property an animation can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimatableProperty {
    /// Start of the visible stroke range
    StrokeStart,
    /// End of the visible stroke range
    StrokeEnd,
}

/// What an animation presents outside its active window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillMode {
    /// Nothing: the model value shows through.
    Removed,
    /// Hold the final value after the window ends.
    #[default]
    Forwards,
    /// Present the initial value before the window starts.
    Backwards,
    /// Both of the above.
    Both,
}

impl FillMode {
    /// Whether the final value is held after the window.
    #[must_use]
    pub const fn holds_forwards(self) -> bool {
        matches!(self, Self::Forwards | Self::Both)
    }

    /// Whether the initial value is presented before the window.
    #[must_use]
    pub const fn holds_backwards(self) -> bool {
        matches!(self, Self::Backwards | Self::Both)
    }
}

// =============================================================================
// KeyframeAnimation
// =============================================================================

/// One property moving from `from` to `to` during `[begin, begin + duration]`
/// of its group's timeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyframeAnimation {
    /// Property driven
    pub property: AnimatableProperty,
    /// Value at the start of the window
    pub from: f64,
    /// Value at the end of the window
    pub to: f64,
    /// Offset of the window from the group start, in seconds
    pub begin: f64,
    /// Window length in seconds
    pub duration: f64,
    /// Timing curve within the window
    pub easing: Easing,
    /// Presentation outside the window
    pub fill_mode: FillMode,
}

impl KeyframeAnimation {
    /// Create a linear animation starting at the group's beginning.
    #[must_use]
    pub const fn new(property: AnimatableProperty, from: f64, to: f64, duration: f64) -> Self {
        Self {
            property,
            from,
            to,
            begin: 0.0,
            duration,
            easing: Easing::Linear,
            fill_mode: FillMode::Forwards,
        }
    }

    /// Set the window start.
    #[must_use]
    pub const fn begin_at(mut self, begin: f64) -> Self {
        self.begin = begin;
        self
    }

    /// Set the timing curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the fill mode.
    #[must_use]
    pub const fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// End of the window on the group timeline.
    #[must_use]
    pub fn end(&self) -> f64 {
        self.begin + self.duration
    }

    /// Interpolated value `local` seconds into the window.
    ///
    /// The window's end yields exactly `to`.
    #[must_use]
    pub fn value_at_local(&self, local: f64) -> f64 {
        let progress = if self.duration > 0.0 {
            (local / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return self.to;
        }
        let eased = self.easing.apply(progress);
        (self.to - self.from).mul_add(eased, self.from)
    }
}

// =============================================================================
// AnimationGroup
// =============================================================================

/// A finite timeline of keyframe animations that runs as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationGroup {
    /// Total timeline length in seconds
    pub duration: f64,
    /// Member animations in submission order
    pub animations: Vec<KeyframeAnimation>,
    /// Presentation of the whole group outside `[0, duration]`
    pub fill_mode: FillMode,
    /// Whether the group detaches once finished. When false, the final values
    /// keep presenting instead of reverting to the model.
    pub removed_on_completion: bool,
}

impl AnimationGroup {
    /// Create an empty group that holds its final values.
    #[must_use]
    pub const fn new(duration: f64) -> Self {
        Self {
            duration,
            animations: Vec::new(),
            fill_mode: FillMode::Forwards,
            removed_on_completion: false,
        }
    }

    /// Append an animation.
    #[must_use]
    pub fn with_animation(mut self, animation: KeyframeAnimation) -> Self {
        self.animations.push(animation);
        self
    }

    /// Set the group fill mode.
    #[must_use]
    pub const fn with_fill_mode(mut self, fill_mode: FillMode) -> Self {
        self.fill_mode = fill_mode;
        self
    }

    /// Set whether the group detaches on completion.
    #[must_use]
    pub const fn removed_on_completion(mut self, removed: bool) -> Self {
        self.removed_on_completion = removed;
        self
    }

    /// Whether the timeline is over at group time `t`.
    ///
    /// A group whose duration is not finite never runs: it is complete from
    /// the start.
    #[must_use]
    pub fn is_complete(&self, t: f64) -> bool {
        !self.duration.is_finite() || t >= self.duration
    }

    /// Presented value of `property` at group time `t`, or `None` if the model
    /// value shows through.
    ///
    /// Among animations of the same property, a later window overrides an
    /// earlier one once it has begun; a finished window keeps presenting its
    /// final value only if it fills forwards. A group with a non-finite
    /// duration presents nothing.
    #[must_use]
    pub fn value_at(&self, property: AnimatableProperty, t: f64) -> Option<f64> {
        if !self.duration.is_finite() {
            return None;
        }
        if t < 0.0 && !self.fill_mode.holds_backwards() {
            return None;
        }
        if t > self.duration && !self.fill_mode.holds_forwards() {
            return None;
        }
        let t = t.clamp(0.0, self.duration.max(0.0));

        let mut tracks: Vec<&KeyframeAnimation> = self
            .animations
            .iter()
            .filter(|a| a.property == property)
            .collect();
        tracks.sort_by(|a, b| a.begin.total_cmp(&b.begin));

        let mut value = None;
        for anim in tracks {
            if t >= anim.begin {
                if t <= anim.end() || anim.fill_mode.holds_forwards() {
                    value = Some(anim.value_at_local(t - anim.begin));
                }
            } else if value.is_none() && anim.fill_mode.holds_backwards() {
                value = Some(anim.from);
            }
        }
        value
    }

    /// Value `property` rests at once the timeline has finished.
    #[must_use]
    pub fn final_value(&self, property: AnimatableProperty) -> Option<f64> {
        self.value_at(property, self.duration)
    }
}
