//! Canvas implementations for rendering.

use crate::draw::{DrawCommand, StrokeStyle};
use crate::widget::Canvas;
use crate::Point;

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// This is useful for:
/// - Testing (verify what was painted)
/// - Serialization (ship commands to a real renderer)
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_circle(&mut self, center: Point, radius: f32, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            style: *style,
        });
    }

    fn draw_path(&mut self, points: &[Point], closed: bool, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Path {
            points: points.to_vec(),
            closed,
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_records_in_order() {
        let mut canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());

        canvas.stroke_circle(Point::new(5.0, 5.0), 5.0, &StrokeStyle::default());
        canvas.draw_path(&[Point::ORIGIN, Point::new(1.0, 0.0)], false, &StrokeStyle::default());

        assert_eq!(canvas.command_count(), 2);
        assert!(matches!(canvas.commands()[0], DrawCommand::Circle { .. }));
        assert!(matches!(canvas.commands()[1], DrawCommand::Path { .. }));
    }

    #[test]
    fn test_take_commands_clears() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_circle(Point::ORIGIN, 1.0, &StrokeStyle::default());
        let taken = canvas.take_commands();
        assert_eq!(taken.len(), 1);
        assert!(canvas.is_empty());
    }
}
