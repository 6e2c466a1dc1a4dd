//! Animated check button widget.

use crate::layers::CheckLayers;
use crate::sequencer::{group_for, StrokeRange, ANIMATION_KEY};
use crate::style::ButtonStyle;
use crate::touch::{TouchStateMachine, TouchTracker, RESTING_OPACITY};
use checkmark_core::{
    widget::{AccessibleRole, LayoutResult},
    AnimatableProperty, AnimationEvent, AnimationId, AnimationScheduler, Canvas, Color,
    Constraints, ControlEvent, Event, FrameScheduler, Point, Rect, Size, Widget,
};
use std::any::Any;
use tracing::{debug, trace};

/// Size the button asks for when unconstrained.
pub const INTRINSIC_SIZE: f32 = 44.0;

/// Message emitted when a tap flips the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckButtonToggled {
    /// The new state
    pub selected: bool,
}

#[derive(Debug, Clone, Copy)]
struct InFlight {
    id: AnimationId,
    target: StrokeRange,
}

/// Toggle button that draws a ring and animates it into a check mark.
///
/// Every write of the selected state (by tap or by [`set_selected`]) submits
/// a timeline to the button's [`AnimationScheduler`]. User interaction is
/// disabled while a timeline runs and re-enabled when it stops, whether it
/// finished or was replaced.
///
/// [`set_selected`]: CheckButton::set_selected
#[derive(Debug)]
pub struct CheckButton<S = FrameScheduler> {
    style: ButtonStyle,
    layers: CheckLayers,
    selected: bool,
    touch: TouchStateMachine,
    tracker: TouchTracker,
    opacity: f32,
    user_interaction_enabled: bool,
    bounds: Rect,
    scheduler: S,
    in_flight: Option<InFlight>,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
}

impl Default for CheckButton<FrameScheduler> {
    fn default() -> Self {
        Self::with_scheduler(FrameScheduler::new())
    }
}

impl CheckButton<FrameScheduler> {
    /// Create an unchecked button driven by a [`FrameScheduler`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: AnimationScheduler> CheckButton<S> {
    /// Create an unchecked button driven by `scheduler`.
    #[must_use]
    pub fn with_scheduler(scheduler: S) -> Self {
        let style = ButtonStyle::default();
        Self {
            layers: CheckLayers::new(&style),
            style,
            selected: false,
            touch: TouchStateMachine::new(),
            tracker: TouchTracker::new(),
            opacity: RESTING_OPACITY,
            user_interaction_enabled: true,
            bounds: Rect::default(),
            scheduler,
            in_flight: None,
            accessible_name_value: None,
            test_id_value: None,
        }
    }

    // ===== Builders =====

    /// Set the stroke color.
    #[must_use]
    pub fn color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    /// Set the background ring opacity.
    #[must_use]
    pub fn circle_alpha(mut self, alpha: f32) -> Self {
        self.set_circle_alpha(alpha);
        self
    }

    /// Set the stroke width.
    #[must_use]
    pub fn line_width(mut self, width: f32) -> Self {
        self.set_line_width(width);
        self
    }

    /// Set the animation duration in seconds.
    #[must_use]
    pub fn duration(mut self, duration: f64) -> Self {
        self.set_duration(duration);
        self
    }

    /// Replace the whole style.
    #[must_use]
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    // ===== Style =====

    /// Current style.
    #[must_use]
    pub const fn button_style(&self) -> &ButtonStyle {
        &self.style
    }

    /// Change the stroke color of both layers.
    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
        self.apply_style();
    }

    /// Change the background ring opacity.
    pub fn set_circle_alpha(&mut self, alpha: f32) {
        self.style.circle_alpha = alpha;
        self.apply_style();
    }

    /// Change the stroke width of both layers.
    pub fn set_line_width(&mut self, width: f32) {
        self.style.line_width = width;
        self.apply_style();
    }

    /// Change the duration used by the next timeline.
    pub fn set_duration(&mut self, duration: f64) {
        self.style.duration = duration;
    }

    /// Replace the whole style.
    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
        self.apply_style();
    }

    fn apply_style(&mut self) {
        self.layers.apply_style(&self.style);
    }

    /// Shape layers backing the button.
    #[must_use]
    pub const fn layers(&self) -> &CheckLayers {
        &self.layers
    }

    // ===== Selection =====

    /// Whether the button is checked.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Set the checked state and animate toward it.
    ///
    /// The timeline runs even when the state does not change. A timeline
    /// still in flight is replaced; the stroke range it was presenting
    /// becomes the resting range until the new timeline takes over.
    pub fn set_selected(&mut self, selected: bool) {
        debug!(selected, "check button selection set");
        self.selected = selected;

        if let Some(current) = self.running_presentation() {
            self.layers.commit_stroke(current);
        }

        let group = group_for(selected, self.style.duration);
        let id = self.scheduler.add(ANIMATION_KEY, group);
        self.in_flight = Some(InFlight {
            id,
            target: StrokeRange::for_state(selected),
        });
        self.process_animation_events();
    }

    /// Flip the checked state.
    pub fn toggle(&mut self) {
        self.set_selected(!self.selected);
    }

    // ===== Interaction =====

    /// Whether touches are currently accepted.
    #[must_use]
    pub const fn is_user_interaction_enabled(&self) -> bool {
        self.user_interaction_enabled
    }

    fn set_user_interaction_enabled(&mut self, enabled: bool) {
        if self.user_interaction_enabled != enabled {
            debug!(enabled, "check button interaction changed");
        }
        self.user_interaction_enabled = enabled;
        if !enabled {
            self.cancel_gesture();
        }
    }

    /// Abandon the gesture in progress, as if the system cancelled it.
    fn cancel_gesture(&mut self) {
        if !self.tracker.is_tracking() && !self.touch.is_tracking() {
            return;
        }
        trace!("gesture cancelled by animation start");
        self.tracker.reset();
        self.opacity = self.touch.handle(ControlEvent::TouchCancel).opacity;
    }

    /// Current layer opacity (pressed feedback).
    #[must_use]
    pub const fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Whether a local point hits the button.
    ///
    /// Only the leading square the glyph occupies counts, so a 200×50 button
    /// responds in its left 50×50 area.
    #[must_use]
    pub fn point_inside(&self, local: &Point) -> bool {
        hit_square(self.layers.circle_size(), local)
    }

    /// Deliver a touch lifecycle event.
    ///
    /// Dropped while interaction is disabled, except a cancellation. Returns
    /// the toggle message when the event completes a tap.
    pub fn send_control_event(&mut self, event: ControlEvent) -> Option<CheckButtonToggled> {
        if !self.user_interaction_enabled && event != ControlEvent::TouchCancel {
            trace!(?event, "control event dropped while animating");
            return None;
        }

        let outcome = self.touch.handle(event);
        self.opacity = outcome.opacity;
        if !outcome.toggle {
            return None;
        }

        self.toggle();
        Some(CheckButtonToggled {
            selected: self.selected,
        })
    }

    // ===== Animation =====

    /// Advance the scheduler clock by `dt` seconds and react to its events.
    pub fn tick(&mut self, dt: f64) {
        self.scheduler.advance(dt);
        self.process_animation_events();
    }

    /// React to everything the scheduler reported since the last call.
    pub fn process_animation_events(&mut self) {
        for event in self.scheduler.drain_events() {
            self.handle_animation_event(&event);
        }
    }

    /// React to one scheduler lifecycle event.
    ///
    /// A start disables interaction and any stop re-enables it. A timeline
    /// that finishes commits its resting range exactly.
    pub fn handle_animation_event(&mut self, event: &AnimationEvent) {
        match event {
            AnimationEvent::Started { key, .. } if key == ANIMATION_KEY => {
                self.set_user_interaction_enabled(false);
            }
            AnimationEvent::Stopped { id, key, finished } if key == ANIMATION_KEY => {
                if let Some(flight) = self.in_flight.filter(|f| f.id == *id) {
                    if *finished {
                        self.layers.commit_stroke(flight.target);
                    }
                    self.in_flight = None;
                }
                self.set_user_interaction_enabled(true);
            }
            _ => {}
        }
    }

    /// Whether a timeline is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    fn running_presentation(&self) -> Option<StrokeRange> {
        if self.scheduler.is_running(ANIMATION_KEY) {
            Some(self.presentation_stroke())
        } else {
            None
        }
    }

    /// Stroke range currently on screen: the scheduler's values where it
    /// drives them, the resting range otherwise.
    #[must_use]
    pub fn presentation_stroke(&self) -> StrokeRange {
        let model = self.layers.committed_stroke();
        let value = |property, fallback| {
            self.scheduler
                .presentation_value(ANIMATION_KEY, property)
                .unwrap_or(fallback)
        };
        StrokeRange::new(
            value(AnimatableProperty::StrokeStart, model.start),
            value(AnimatableProperty::StrokeEnd, model.end),
        )
    }

    /// Resting stroke range.
    #[must_use]
    pub const fn committed_stroke(&self) -> StrokeRange {
        self.layers.committed_stroke()
    }

    /// The scheduler driving this button.
    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

fn hit_square(circle: Size, local: &Point) -> bool {
    Rect::from_size(circle).contains_point_exclusive(local)
}

impl<S: AnimationScheduler + Send + Sync> Widget for CheckButton<S> {
    fn measure(&self, constraints: Constraints) -> Size {
        constraints.constrain(Size::square(INTRINSIC_SIZE))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.layers.sync_geometry(bounds.size());
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let origin = self.bounds.origin();
        let circle = self.layers.circle_size();

        let background = self.layers.background();
        let mut ring_style = background.stroke_style();
        ring_style.color = ring_style.color.scale_alpha(self.opacity);
        let center = Point::new(circle.width / 2.0, circle.height / 2.0) + origin;
        canvas.stroke_circle(center, circle.width / 2.0, &ring_style);

        let animated = self.layers.animated();
        let range = self.presentation_stroke();
        let points: Vec<Point> = animated
            .visible_points(range.start, range.end)
            .into_iter()
            .map(|p| p + origin)
            .collect();
        if points.len() >= 2 {
            let mut check_style = animated.stroke_style();
            check_style.color = check_style.color.scale_alpha(self.opacity);
            canvas.draw_path(&points, false, &check_style);
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let bounds = self.bounds;
        let circle = self.layers.circle_size();
        let control = self.tracker.translate(event, self.user_interaction_enabled, |p| {
            hit_square(circle, &bounds.to_local(p))
        })?;
        self.send_control_event(control)
            .map(|msg| Box::new(msg) as Box<dyn Any + Send>)
    }

    fn is_interactive(&self) -> bool {
        self.user_interaction_enabled
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Checkbox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
