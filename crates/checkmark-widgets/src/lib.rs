//! Animated check button.
//!
//! [`CheckButton`] is a toggle that shows a faint ring when unchecked and
//! sweeps a single stroke around the ring into a check mark when checked.
//!
//! The button is split into small parts:
//! - [`check_path`]: glyph geometry for a given control size
//! - [`CheckLayers`]: the background ring and animated stroke layers
//! - [`TouchStateMachine`] / [`TouchTracker`]: pressed feedback and tap detection
//! - [`sequencer`]: the select and deselect timelines
//! - [`ButtonStyle`]: user-configurable appearance, loadable from TOML

pub mod check_button;
pub mod check_path;
mod layers;
pub mod sequencer;
mod style;
mod touch;

pub use check_button::{CheckButton, CheckButtonToggled, INTRINSIC_SIZE};
pub use layers::CheckLayers;
pub use sequencer::{deselect_group, group_for, select_group, StrokeRange, ANIMATION_KEY};
pub use style::{ButtonStyle, StyleError};
pub use touch::{TouchOutcome, TouchPhase, TouchStateMachine, TouchTracker, PRESSED_OPACITY, RESTING_OPACITY};
