//! Drawing primitives and the backend-agnostic render context.
//!
//! Game code draws through [`RenderContext`], which the SDL2 canvas implements for the real
//! game and [`RecordingContext`] implements for tests.

use glam::{UVec2, Vec2};

use crate::error::RenderError;

pub mod recording;
#[cfg(feature = "sdl")]
pub mod sdl;

pub use recording::{DrawCall, RecordingContext};

/// An RGBA color with 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with its alpha scaled by `factor` (clamped to `0..=1`).
    pub fn with_alpha(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            a: (self.a as f32 * factor).round() as u8,
            ..self
        }
    }
}

/// An axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// The surface everything in the game draws onto.
pub trait RenderContext {
    fn clear(&mut self, color: Color) -> Result<(), RenderError>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn stroke_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError>;

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) -> Result<(), RenderError>;

    /// Draws `text` with its top-left corner at `position`.
    fn fill_text(&mut self, text: &str, position: Vec2, color: Color) -> Result<(), RenderError>;

    /// Width in pixels of `text` once drawn; used for centering.
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * 8.0
    }
}

/// Follows the player and converts world coordinates to screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: Vec2,
    pub viewport: Vec2,
}

impl Camera {
    /// Centers the viewport on `focus`, clamped so it never shows outside a map of `world_size` pixels.
    ///
    /// Maps smaller than the viewport are centered instead.
    pub fn follow(focus: Vec2, world_size: Vec2, viewport: UVec2) -> Self {
        let viewport = viewport.as_vec2();
        let axis = |focus: f32, world: f32, view: f32| {
            if world <= view {
                -(view - world) / 2.0
            } else {
                (focus - view / 2.0).clamp(0.0, world - view)
            }
        };

        Self {
            offset: Vec2::new(
                axis(focus.x, world_size.x, viewport.x),
                axis(focus.y, world_size.y, viewport.y),
            ),
            viewport,
        }
    }

    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        world - self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_scales_and_clamps() {
        let c = Color::rgba(10, 20, 30, 200);
        assert_eq!(c.with_alpha(0.5).a, 100);
        assert_eq!(c.with_alpha(2.0).a, 200);
        assert_eq!(c.with_alpha(-1.0).a, 0);
    }

    #[test]
    fn test_camera_centers_small_maps() {
        let camera = Camera::follow(Vec2::new(10.0, 10.0), Vec2::new(320.0, 256.0), UVec2::new(800, 600));
        assert_eq!(camera.offset, Vec2::new(-240.0, -172.0));
        assert_eq!(camera.to_screen(Vec2::ZERO), Vec2::new(240.0, 172.0));
    }

    #[test]
    fn test_camera_clamps_to_large_maps() {
        let world = Vec2::new(1600.0, 1200.0);
        let viewport = UVec2::new(800, 600);

        let top_left = Camera::follow(Vec2::new(0.0, 0.0), world, viewport);
        assert_eq!(top_left.offset, Vec2::ZERO);

        let middle = Camera::follow(Vec2::new(800.0, 600.0), world, viewport);
        assert_eq!(middle.offset, Vec2::new(400.0, 300.0));

        let bottom_right = Camera::follow(world, world, viewport);
        assert_eq!(bottom_right.offset, Vec2::new(800.0, 600.0));
    }
}
