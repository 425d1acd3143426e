use glam::Vec2;

use crate::error::RenderError;
use crate::render::{Color, RenderContext};

const HUD_COLOR: Color = Color::rgb(240, 240, 240);

const LINE_HEIGHT: f32 = 14.0;

/// Map name in the top-left corner, then the player's health while it recently changed
/// and the frame rate in debug mode.
pub fn render(
    ctx: &mut dyn RenderContext,
    map_name: &str,
    health: Option<(u32, u32)>,
    fps: Option<f32>,
) -> Result<(), RenderError> {
    let mut position = Vec2::new(10.0, 10.0);
    ctx.fill_text(map_name, position, HUD_COLOR)?;

    if let Some((current, max)) = health {
        position.y += LINE_HEIGHT;
        ctx.fill_text(&format!("HP {current}/{max}"), position, HUD_COLOR)?;
    }
    if let Some(fps) = fps {
        position.y += LINE_HEIGHT;
        ctx.fill_text(&format!("{fps:.0} fps"), position, HUD_COLOR)?;
    }
    Ok(())
}
