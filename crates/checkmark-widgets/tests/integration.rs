//! Integration tests for checkmark-widgets.
//!
//! These drive a `CheckButton` through the same paths a host would: layout,
//! raw pointer events, frame ticks and painting.

use checkmark_core::{
    AnimatableProperty, AnimationEvent, AnimationGroup, AnimationId, AnimationScheduler, Color,
    DrawCommand, Event, MouseButton, Point, RecordingCanvas, Rect, TouchId, Widget,
};
use checkmark_widgets::{
    ButtonStyle, CheckButton, CheckButtonToggled, StrokeRange, ANIMATION_KEY,
};

const FRAME: f64 = 1.0 / 60.0;

fn demo_button() -> CheckButton {
    let mut button = CheckButton::new().line_width(50.0);
    button.layout(Rect::new(0.0, 0.0, 200.0, 50.0));
    button
}

fn touch_tap(button: &mut CheckButton, id: u32, at: Point) -> Option<Box<dyn std::any::Any + Send>> {
    let id = TouchId::new(id);
    button.event(&Event::TouchStart { id, position: at });
    button.event(&Event::TouchEnd { id, position: at })
}

fn run_to_rest(button: &mut CheckButton) -> usize {
    let mut frames = 0;
    while button.is_animating() {
        button.tick(FRAME);
        frames += 1;
        assert!(frames < 1000, "animation never settled");
    }
    frames
}

// =============================================================================
// Tap Flow
// =============================================================================

#[test]
fn test_tap_select_then_deselect() {
    let mut button = demo_button();

    let msg = touch_tap(&mut button, 1, Point::new(40.0, 40.0)).expect("tap toggles");
    assert_eq!(
        msg.downcast_ref::<CheckButtonToggled>(),
        Some(&CheckButtonToggled { selected: true })
    );
    assert!(!button.is_interactive());

    let frames = run_to_rest(&mut button);
    assert!((29..=31).contains(&frames));
    assert!(button.is_interactive());
    assert!(button.presentation_stroke().bits_eq(&StrokeRange::CHECKED));

    touch_tap(&mut button, 2, Point::new(10.0, 10.0)).expect("tap toggles");
    run_to_rest(&mut button);
    assert!(!button.is_selected());
    assert!(button.presentation_stroke().bits_eq(&StrokeRange::UNCHECKED));
}

#[test]
fn test_tap_outside_leading_square_is_ignored() {
    let mut button = demo_button();
    assert!(touch_tap(&mut button, 1, Point::new(60.0, 40.0)).is_none());
    assert!(!button.is_selected());
    assert!(!button.is_animating());
}

#[test]
fn test_mouse_drag_out_cancels_tap() {
    let mut button = demo_button();
    button.event(&Event::MouseDown {
        position: Point::new(20.0, 20.0),
        button: MouseButton::Left,
    });
    assert_eq!(button.opacity(), 0.4);
    button.event(&Event::MouseMove {
        position: Point::new(120.0, 20.0),
    });
    assert_eq!(button.opacity(), 1.0);
    button.event(&Event::MouseMove {
        position: Point::new(30.0, 20.0),
    });
    assert_eq!(button.opacity(), 0.4);
    button.event(&Event::MouseMove {
        position: Point::new(120.0, 20.0),
    });
    let msg = button.event(&Event::MouseUp {
        position: Point::new(120.0, 20.0),
        button: MouseButton::Left,
    });
    assert!(msg.is_none());
    assert!(!button.is_selected());
    assert_eq!(button.opacity(), 1.0);
}

#[test]
fn test_touch_cancel_resets_feedback() {
    let mut button = demo_button();
    let id = TouchId::new(4);
    button.event(&Event::TouchStart {
        id,
        position: Point::new(5.0, 5.0),
    });
    assert_eq!(button.opacity(), 0.4);
    button.event(&Event::TouchCancel { id });
    assert_eq!(button.opacity(), 1.0);
    assert!(!button.is_selected());
}

// =============================================================================
// Animation Timeline
// =============================================================================

#[test]
fn test_select_presentation_is_monotonic_until_overshoot() {
    let mut button = demo_button();
    button.set_selected(true);

    let mut previous = button.presentation_stroke();
    let mut peak_start: f64 = 0.0;
    while button.is_animating() {
        button.tick(FRAME);
        let now = button.presentation_stroke();
        peak_start = peak_start.max(now.start);
        if now.start < previous.start {
            // Only the settle phase moves backwards.
            assert!(previous.start > 0.815);
        }
        previous = now;
    }

    assert!(peak_start > 0.83);
    assert!(button.presentation_stroke().bits_eq(&StrokeRange::CHECKED));
}

#[test]
fn test_resize_keeps_stroke_range() {
    let mut button = demo_button();
    button.set_selected(true);
    run_to_rest(&mut button);

    button.layout(Rect::new(0.0, 0.0, 100.0, 100.0));
    assert!(button.committed_stroke().bits_eq(&StrokeRange::CHECKED));
    assert!(button.point_inside(&Point::new(90.0, 90.0)));
}

#[test]
fn test_style_from_toml_applies_to_layers() {
    let style = ButtonStyle::from_toml_str(
        r##"
        color = "#ff3b30"
        circle_alpha = 0.4
        line_width = 50.0
        "##,
    )
    .expect("valid style");

    let mut button = CheckButton::new().style(style);
    button.layout(Rect::new(0.0, 0.0, 200.0, 50.0));

    let expected = Color::from_hex("#ff3b30").expect("valid hex");
    assert_eq!(button.layers().animated().stroke_color, expected);
    assert_eq!(button.layers().background().stroke_color, expected.with_alpha(0.4));

    let mut canvas = RecordingCanvas::new();
    button.paint(&mut canvas);
    for command in canvas.commands() {
        assert_eq!(command.stroke_style().width, 50.0);
    }
}

#[test]
fn test_checked_paint_draws_only_check_strokes() {
    let mut button = demo_button();
    button.set_selected(true);
    run_to_rest(&mut button);

    let mut canvas = RecordingCanvas::new();
    button.paint(&mut canvas);
    let DrawCommand::Path { points, .. } = &canvas.commands()[1] else {
        panic!("expected check stroke");
    };
    // Only the two check strokes are visible, none of the ring's left side.
    for p in points {
        assert!(p.x > 10.0 && p.x < 45.0, "point {p:?} off the check");
    }
}

// =============================================================================
// Custom Scheduler
// =============================================================================

/// Scheduler that never advances on its own: timelines stay in flight until
/// the test finishes them explicitly.
#[derive(Debug, Default)]
struct ManualScheduler {
    next: u64,
    current: Option<(AnimationId, AnimationGroup)>,
    events: Vec<AnimationEvent>,
}

impl ManualScheduler {
    fn finish(&mut self) {
        if let Some((id, _)) = self.current.take() {
            self.events.push(AnimationEvent::Stopped {
                id,
                key: ANIMATION_KEY.to_string(),
                finished: true,
            });
        }
    }
}

impl AnimationScheduler for ManualScheduler {
    fn add(&mut self, key: &str, group: AnimationGroup) -> AnimationId {
        self.next += 1;
        let id = AnimationId(self.next);
        if let Some((old, _)) = self.current.take() {
            self.events.push(AnimationEvent::Stopped {
                id: old,
                key: key.to_string(),
                finished: false,
            });
        }
        self.current = Some((id, group));
        self.events.push(AnimationEvent::Started {
            id,
            key: key.to_string(),
        });
        id
    }

    fn advance(&mut self, _dt: f64) {}

    fn drain_events(&mut self) -> Vec<AnimationEvent> {
        std::mem::take(&mut self.events)
    }

    fn presentation_value(&self, _key: &str, property: AnimatableProperty) -> Option<f64> {
        self.current.as_ref().and_then(|(_, g)| g.value_at(property, 0.0))
    }

    fn is_running(&self, _key: &str) -> bool {
        self.current.is_some()
    }
}

#[test]
fn test_custom_scheduler_drives_interaction() {
    let mut button = CheckButton::with_scheduler(ManualScheduler::default());
    button.layout(Rect::new(0.0, 0.0, 50.0, 50.0));

    button.set_selected(true);
    assert!(!button.is_user_interaction_enabled());
    button.tick(10.0);
    assert!(button.is_animating());

    button.scheduler_mut().finish();
    button.process_animation_events();
    assert!(button.is_user_interaction_enabled());
    assert!(button.committed_stroke().bits_eq(&StrokeRange::CHECKED));
}
