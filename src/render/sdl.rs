//! SDL2 canvas backend.

use glam::Vec2;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels;
use sdl2::rect::{Point, Rect as SdlRect};
use sdl2::render::{BlendMode, Canvas, RenderTarget};

use crate::error::RenderError;
use crate::render::{Color, Rect, RenderContext};

impl From<Color> for pixels::Color {
    fn from(color: Color) -> Self {
        pixels::Color::RGBA(color.r, color.g, color.b, color.a)
    }
}

fn to_sdl_rect(rect: Rect) -> SdlRect {
    SdlRect::new(
        rect.x.round() as i32,
        rect.y.round() as i32,
        rect.w.round().max(0.0) as u32,
        rect.h.round().max(0.0) as u32,
    )
}

fn prepare<T: RenderTarget>(canvas: &mut Canvas<T>, color: Color) {
    canvas.set_blend_mode(if color.a < 255 { BlendMode::Blend } else { BlendMode::None });
    canvas.set_draw_color(pixels::Color::from(color));
}

impl<T: RenderTarget> RenderContext for Canvas<T> {
    fn clear(&mut self, color: Color) -> Result<(), RenderError> {
        prepare(self, color);
        Canvas::clear(self);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        prepare(self, color);
        Canvas::fill_rect(self, to_sdl_rect(rect)).map_err(RenderError::DrawFailed)
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) -> Result<(), RenderError> {
        prepare(self, color);
        Canvas::draw_rect(self, to_sdl_rect(rect)).map_err(RenderError::DrawFailed)
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, color: Color) -> Result<(), RenderError> {
        prepare(self, color);
        Canvas::draw_line(
            self,
            Point::new(from.x.round() as i32, from.y.round() as i32),
            Point::new(to.x.round() as i32, to.y.round() as i32),
        )
        .map_err(RenderError::DrawFailed)
    }

    fn fill_text(&mut self, text: &str, position: Vec2, color: Color) -> Result<(), RenderError> {
        // SDL2_gfx ships an 8x8 bitmap font, which matches the default `text_width`.
        DrawRenderer::string(
            &*self,
            position.x.round() as i16,
            position.y.round() as i16,
            text,
            pixels::Color::from(color),
        )
        .map_err(RenderError::DrawFailed)
    }
}
