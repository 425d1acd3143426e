//! A render context that records draw calls instead of drawing them.

use glam::Vec2;

use crate::error::RenderError;
use crate::render::{Color, Rect, RenderContext};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    FillRect(Rect, Color),
    StrokeRect(Rect, Color),
    Line(Vec2, Vec2, Color),
    Text(String, Vec2, Color),
}

/// Collects every draw call in order.
#[derive(Debug, Default)]
pub struct RecordingContext {
    pub calls: Vec<DrawCall>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// All text drawn so far, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(text, ..) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn filled_with(&self, color: Color) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::FillRect(_, c) if *c == color))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl RenderContext for RecordingContext {
    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::FillRect(rect, color));
        Ok(())
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::StrokeRect(rect, color));
        Ok(())
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Line(from, to, color));
        Ok(())
    }

    fn fill_text(&mut self, text: &str, position: Vec2, color: Color) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Text(text.to_string(), position, color));
        Ok(())
    }
}
