//! Core types for the animated check button.
//!
//! This crate provides the foundation the widget is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Vector paths with stroke trimming: [`Path`]
//! - Retained shape layers: [`ShapeLayer`]
//! - Declarative keyframe timelines: [`AnimationGroup`]
//! - Animation engines: [`AnimationScheduler`], [`FrameScheduler`]
//! - Events, widgets and canvases: [`Event`], [`ControlEvent`], [`Widget`]

pub mod animation;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod layer;
pub mod path;
mod scheduler;
pub mod widget;

pub use animation::{AnimatableProperty, AnimationGroup, Easing, FillMode, KeyframeAnimation};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{DrawCommand, LineCap, LineJoin, StrokeStyle};
pub use event::{ControlEvent, Event, MouseButton, TouchId};
pub use geometry::{Point, Rect, Size};
pub use layer::ShapeLayer;
pub use path::{Path, PathSegment};
pub use scheduler::{
    AnimationEvent, AnimationId, AnimationScheduler, FrameScheduler, RECENT_EVENT_CAPACITY,
};
pub use widget::{AccessibleRole, Canvas, LayoutResult, Widget};
