//! Test harness for check buttons.
//!
//! Drives a [`CheckButton`] the way a host would: raw pointer events in
//! parent coordinates, frame-clock ticks and paint passes.

use checkmark_core::{
    AnimationEvent, DrawCommand, Event, MouseButton, Point, RecordingCanvas, Rect, TouchId, Widget,
};
use checkmark_widgets::{CheckButton, CheckButtonToggled, StrokeRange};
use std::collections::VecDeque;

/// Frames per second used when advancing time.
pub const DEFAULT_FRAME_RATE: f64 = 60.0;

/// Upper bound on frames [`Harness::settle`] will run.
const MAX_SETTLE_FRAMES: usize = 10_000;

/// Test harness for interacting with a check button.
pub struct Harness {
    /// Button being tested
    button: CheckButton,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Toggle messages emitted so far
    toggles: Vec<CheckButtonToggled>,
    /// Bounds the button is laid out in
    bounds: Rect,
    /// Simulated frame rate
    frame_rate: f64,
    /// Next touch identifier
    next_touch: u32,
    /// Touch currently held down
    held: Option<TouchId>,
}

impl Harness {
    /// Create a harness around `button`, laid out at its intrinsic size.
    pub fn new(button: CheckButton) -> Self {
        let size = button.measure(checkmark_core::Constraints::unbounded());
        let mut harness = Self {
            button,
            event_queue: VecDeque::new(),
            toggles: Vec::new(),
            bounds: Rect::from_size(size),
            frame_rate: DEFAULT_FRAME_RATE,
            next_touch: 0,
            held: None,
        };
        harness.relayout();
        harness
    }

    /// Lay the button out in new bounds.
    #[must_use]
    pub fn bounds(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.bounds = Rect::new(x, y, width, height);
        self.relayout();
        self
    }

    /// Set the simulated frame rate.
    #[must_use]
    pub fn frame_rate(mut self, fps: f64) -> Self {
        self.frame_rate = fps.max(1.0);
        self
    }

    fn relayout(&mut self) {
        self.button.layout(self.bounds);
    }

    fn frame(&self) -> f64 {
        1.0 / self.frame_rate
    }

    fn to_parent(&self, local: Point) -> Point {
        local + self.bounds.origin()
    }

    // === Event Simulation ===

    /// Tap with a touch at a point local to the button.
    pub fn tap(&mut self, local: Point) -> &mut Self {
        self.press(local);
        self.release(local)
    }

    /// Tap the middle of the glyph.
    pub fn tap_glyph(&mut self) -> &mut Self {
        let circle = self.button.layers().circle_size();
        self.tap(Point::new(circle.width / 2.0, circle.height / 2.0))
    }

    /// Click with the left mouse button at a point local to the button.
    pub fn click(&mut self, local: Point) -> &mut Self {
        let position = self.to_parent(local);
        self.event_queue.push_back(Event::MouseMove { position });
        self.event_queue.push_back(Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.event_queue.push_back(Event::MouseUp {
            position,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Put a new touch down at a local point.
    pub fn press(&mut self, local: Point) -> &mut Self {
        self.next_touch += 1;
        let id = TouchId::new(self.next_touch);
        self.held = Some(id);
        self.event_queue.push_back(Event::TouchStart {
            id,
            position: self.to_parent(local),
        });
        self.process_events();
        self
    }

    /// Move the held touch to a local point.
    pub fn drag_to(&mut self, local: Point) -> &mut Self {
        if let Some(id) = self.held {
            self.event_queue.push_back(Event::TouchMove {
                id,
                position: self.to_parent(local),
            });
            self.process_events();
        }
        self
    }

    /// Lift the held touch at a local point.
    pub fn release(&mut self, local: Point) -> &mut Self {
        if let Some(id) = self.held.take() {
            self.event_queue.push_back(Event::TouchEnd {
                id,
                position: self.to_parent(local),
            });
            self.process_events();
        }
        self
    }

    /// Have the system cancel the held touch.
    pub fn cancel(&mut self) -> &mut Self {
        if let Some(id) = self.held.take() {
            self.event_queue.push_back(Event::TouchCancel { id });
            self.process_events();
        }
        self
    }

    // === Time ===

    /// Advance by a number of frames.
    pub fn tick_frames(&mut self, frames: usize) -> &mut Self {
        let dt = self.frame();
        for _ in 0..frames {
            self.button.tick(dt);
        }
        self
    }

    /// Advance by whole frames covering at least `seconds`.
    pub fn advance(&mut self, seconds: f64) -> &mut Self {
        let frames = (seconds * self.frame_rate).ceil().max(0.0) as usize;
        self.tick_frames(frames)
    }

    /// Run frames until no timeline is in flight and return the presented
    /// stroke range after each frame.
    ///
    /// # Panics
    ///
    /// Panics if the button is still animating after 10 000 frames.
    pub fn settle(&mut self) -> Vec<StrokeRange> {
        let dt = self.frame();
        let mut samples = Vec::new();
        while self.button.is_animating() {
            assert!(
                samples.len() < MAX_SETTLE_FRAMES,
                "Expected animation to settle within {MAX_SETTLE_FRAMES} frames"
            );
            self.button.tick(dt);
            samples.push(self.button.presentation_stroke());
        }
        samples
    }

    // === Queries ===

    /// The button under test.
    #[must_use]
    pub const fn button(&self) -> &CheckButton {
        &self.button
    }

    /// Mutable access to the button under test.
    pub fn button_mut(&mut self) -> &mut CheckButton {
        &mut self.button
    }

    /// Toggle messages emitted so far.
    #[must_use]
    pub fn toggles(&self) -> &[CheckButtonToggled] {
        &self.toggles
    }

    /// Recent scheduler lifecycle events, oldest first.
    #[must_use]
    pub fn animation_events(&self) -> Vec<AnimationEvent> {
        self.button.scheduler().recent_events().cloned().collect()
    }

    /// Paint the button and return the draw commands.
    #[must_use]
    pub fn paint(&self) -> Vec<DrawCommand> {
        let mut canvas = RecordingCanvas::new();
        self.button.paint(&mut canvas);
        canvas.take_commands()
    }

    // === Assertions ===

    /// Assert the checked state.
    ///
    /// # Panics
    ///
    /// Panics if the state does not match.
    pub fn assert_selected(&self, expected: bool) -> &Self {
        assert_eq!(
            self.button.is_selected(),
            expected,
            "Expected button selected = {expected}"
        );
        self
    }

    /// Assert whether touches are accepted.
    ///
    /// # Panics
    ///
    /// Panics if the interaction flag does not match.
    pub fn assert_interactive(&self, expected: bool) -> &Self {
        assert_eq!(
            self.button.is_interactive(),
            expected,
            "Expected button interactive = {expected}"
        );
        self
    }

    /// Assert the pressed-feedback opacity.
    ///
    /// # Panics
    ///
    /// Panics if the opacity differs by more than 1e-6.
    pub fn assert_opacity(&self, expected: f32) -> &Self {
        let actual = self.button.opacity();
        assert!(
            (actual - expected).abs() < 1e-6,
            "Expected opacity {expected} but got {actual}"
        );
        self
    }

    /// Assert the presented stroke range, bit for bit.
    ///
    /// # Panics
    ///
    /// Panics if either end differs.
    pub fn assert_stroke(&self, expected: StrokeRange) -> &Self {
        let actual = self.button.presentation_stroke();
        assert!(
            actual.bits_eq(&expected),
            "Expected stroke {expected:?} but got {actual:?}"
        );
        self
    }

    /// Assert the number of toggle messages emitted.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_toggle_count(&self, expected: usize) -> &Self {
        let actual = self.toggles.len();
        assert_eq!(
            actual, expected,
            "Expected {expected} toggles but found {actual}"
        );
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            if let Some(message) = self.button.event(&event) {
                if let Ok(toggled) = message.downcast::<CheckButtonToggled>() {
                    self.toggles.push(*toggled);
                }
            }
        }
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(CheckButton::new())
    }
}
