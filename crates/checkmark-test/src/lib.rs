//! Testing harness for the animated check button.
//!
//! ```
//! use checkmark_core::Point;
//! use checkmark_test::Harness;
//! use checkmark_widgets::{CheckButton, StrokeRange};
//!
//! let mut harness = Harness::new(CheckButton::new()).bounds(0.0, 0.0, 200.0, 50.0);
//! harness.tap(Point::new(40.0, 40.0));
//! harness.assert_selected(true).assert_interactive(false);
//!
//! harness.settle();
//! harness.assert_interactive(true).assert_stroke(StrokeRange::CHECKED);
//! ```

mod harness;

pub use harness::{Harness, DEFAULT_FRAME_RATE};
