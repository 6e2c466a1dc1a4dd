//! Touch feedback for a check button.
//!
//! [`TouchTracker`] turns the raw pointer stream into control lifecycle events
//! by hit-testing each position. [`TouchStateMachine`] turns those lifecycle
//! events into pressed-state opacity and the toggle signal.

use checkmark_core::{ControlEvent, Event, MouseButton, Point, TouchId};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Opacity while a touch is held inside the control.
pub const PRESSED_OPACITY: f32 = 0.4;
/// Opacity at rest.
pub const RESTING_OPACITY: f32 = 1.0;

/// Visual phase of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchPhase {
    /// Not pressed
    #[default]
    Idle,
    /// Pressed
    Pressed,
}

impl TouchPhase {
    /// Opacity shown in this phase.
    #[must_use]
    pub const fn opacity(self) -> f32 {
        match self {
            Self::Idle => RESTING_OPACITY,
            Self::Pressed => PRESSED_OPACITY,
        }
    }
}

/// Result of feeding one control event to the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchOutcome {
    /// Opacity the control should show now
    pub opacity: f32,
    /// Whether the toggle state must flip
    pub toggle: bool,
}

/// Pressed/idle tracking for one gesture at a time.
#[derive(Debug, Clone, Default)]
pub struct TouchStateMachine {
    phase: TouchPhase,
    tracking: bool,
}

impl TouchStateMachine {
    /// Create an idle state machine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> TouchPhase {
        self.phase
    }

    /// Whether a gesture that began inside is still in progress.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Apply one lifecycle event.
    ///
    /// Only a touch-up-inside that ends a gesture begun with touch-down
    /// toggles; drag events outside a gesture are ignored.
    pub fn handle(&mut self, event: ControlEvent) -> TouchOutcome {
        let mut toggle = false;
        match event {
            ControlEvent::TouchDown => {
                self.tracking = true;
                self.phase = TouchPhase::Pressed;
            }
            ControlEvent::TouchUpInside => {
                toggle = self.tracking;
                self.tracking = false;
                self.phase = TouchPhase::Idle;
            }
            ControlEvent::TouchDragExit => {
                self.phase = TouchPhase::Idle;
            }
            ControlEvent::TouchDragEnter => {
                if self.tracking {
                    self.phase = TouchPhase::Pressed;
                }
            }
            ControlEvent::TouchUpOutside | ControlEvent::TouchCancel => {
                self.tracking = false;
                self.phase = TouchPhase::Idle;
            }
        }
        trace!(?event, phase = ?self.phase, toggle, "touch transition");
        TouchOutcome {
            opacity: self.phase.opacity(),
            toggle,
        }
    }
}

/// Pointer whose gesture is being followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Mouse,
    Touch(TouchId),
}

/// Hit-tests raw pointer events into control lifecycle events.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    source: Option<Source>,
    inside: bool,
}

impl TouchTracker {
    /// Create a tracker with no gesture in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is being followed.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.source.is_some()
    }

    /// Forget the gesture in progress.
    pub fn reset(&mut self) {
        self.source = None;
        self.inside = false;
    }

    /// Translate a raw event given in control-local coordinates.
    ///
    /// `hit` decides whether a local point is inside the control. While
    /// `enabled` is false everything but a cancellation is dropped.
    pub fn translate(
        &mut self,
        event: &Event,
        enabled: bool,
        hit: impl Fn(&Point) -> bool,
    ) -> Option<ControlEvent> {
        if !enabled && !matches!(event, Event::TouchCancel { .. }) {
            return None;
        }

        match *event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.begin(Source::Mouse, &position, &hit),
            Event::TouchStart { id, position } => self.begin(Source::Touch(id), &position, &hit),
            Event::MouseMove { position } => self.moved(Source::Mouse, &position, &hit),
            Event::TouchMove { id, position } => self.moved(Source::Touch(id), &position, &hit),
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => self.ended(Source::Mouse, &position, &hit),
            Event::TouchEnd { id, position } => self.ended(Source::Touch(id), &position, &hit),
            Event::TouchCancel { id } => {
                if self.source == Some(Source::Touch(id)) {
                    self.reset();
                    Some(ControlEvent::TouchCancel)
                } else {
                    None
                }
            }
            Event::MouseDown { .. } | Event::MouseUp { .. } => None,
        }
    }

    fn begin(&mut self, source: Source, position: &Point, hit: impl Fn(&Point) -> bool) -> Option<ControlEvent> {
        if self.source.is_some() || !hit(position) {
            return None;
        }
        self.source = Some(source);
        self.inside = true;
        Some(ControlEvent::TouchDown)
    }

    fn moved(&mut self, source: Source, position: &Point, hit: impl Fn(&Point) -> bool) -> Option<ControlEvent> {
        if self.source != Some(source) {
            return None;
        }
        let inside = hit(position);
        if inside == self.inside {
            return None;
        }
        self.inside = inside;
        Some(if inside {
            ControlEvent::TouchDragEnter
        } else {
            ControlEvent::TouchDragExit
        })
    }

    fn ended(&mut self, source: Source, position: &Point, hit: impl Fn(&Point) -> bool) -> Option<ControlEvent> {
        if self.source != Some(source) {
            return None;
        }
        let inside = hit(position);
        self.reset();
        Some(if inside {
            ControlEvent::TouchUpInside
        } else {
            ControlEvent::TouchUpOutside
        })
    }
}
