//! Input events for widgets.
//!
//! [`Event`] is the raw pointer stream a host delivers. [`ControlEvent`] is the
//! higher-level touch lifecycle a control reacts to once the raw stream has
//! been hit-tested against it.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Raw input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled (e.g., system gesture took over)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
}

impl Event {
    /// Get the position if this event carries one.
    #[must_use]
    pub const fn position(&self) -> Option<Point> {
        match self {
            Self::MouseMove { position }
            | Self::MouseDown { position, .. }
            | Self::MouseUp { position, .. }
            | Self::TouchStart { position, .. }
            | Self::TouchMove { position, .. }
            | Self::TouchEnd { position, .. } => Some(*position),
            Self::TouchCancel { .. } => None,
        }
    }

    /// Check if this is a touch event.
    #[must_use]
    pub const fn is_touch(&self) -> bool {
        matches!(
            self,
            Self::TouchStart { .. }
                | Self::TouchMove { .. }
                | Self::TouchEnd { .. }
                | Self::TouchCancel { .. }
        )
    }
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

impl TouchId {
    /// Create a new touch ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Touch lifecycle events delivered to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlEvent {
    /// A touch began inside the control.
    TouchDown,
    /// A tracked touch ended inside the control.
    TouchUpInside,
    /// A tracked touch ended outside the control.
    TouchUpOutside,
    /// A tracked touch was dragged out of the control.
    TouchDragExit,
    /// A tracked touch was dragged back into the control.
    TouchDragEnter,
    /// The system cancelled the tracked touch.
    TouchCancel,
}

impl ControlEvent {
    /// Whether this event ends touch tracking.
    #[must_use]
    pub const fn ends_tracking(&self) -> bool {
        matches!(
            self,
            Self::TouchUpInside | Self::TouchUpOutside | Self::TouchCancel
        )
    }
}
