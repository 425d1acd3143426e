//! Overlays drawn on top of the world: dialog, menu, inventory, transition fade,
//! intro and game-over screens, and the HUD.

use bitflags::bitflags;
use glam::Vec2;

use crate::constants::CANVAS_SIZE;
use crate::error::RenderError;
use crate::render::{Color, Rect, RenderContext};

pub mod dialog;
pub mod game_over;
pub mod hud;
pub mod intro;
pub mod inventory;
pub mod menu;
pub mod transition;

pub use dialog::Dialog;
pub use game_over::GameOver;
pub use intro::IntroScene;
pub use inventory::InventoryUi;
pub use menu::{Menu, MenuAction, MenuEntry};
pub use transition::{MapChange, Transition, TransitionPhase, TransitionStep};

bitflags! {
    /// Overlays currently holding the game paused. The world only updates when this is empty.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PauseFlags: u8 {
        const DIALOG = 1 << 0;
        const MENU = 1 << 1;
        const INVENTORY = 1 << 2;
        const TRANSITION = 1 << 3;
        const GAME_OVER = 1 << 4;
        const INTRO = 1 << 5;
    }
}

impl PauseFlags {
    pub fn is_live(self) -> bool {
        self.is_empty()
    }
}

const PANEL_BACKGROUND: Color = Color::rgba(20, 20, 30, 220);
const PANEL_BORDER: Color = Color::rgb(200, 200, 210);

/// Draws a bordered, translucent panel.
pub(crate) fn draw_panel(ctx: &mut dyn RenderContext, rect: Rect) -> Result<(), RenderError> {
    ctx.fill_rect(rect, PANEL_BACKGROUND)?;
    ctx.stroke_rect(rect, PANEL_BORDER)
}

/// Draws `text` horizontally centered on the canvas.
pub(crate) fn centered_text(ctx: &mut dyn RenderContext, text: &str, y: f32, color: Color) -> Result<(), RenderError> {
    let x = (CANVAS_SIZE.x as f32 - ctx.text_width(text)) / 2.0;
    ctx.fill_text(text, Vec2::new(x, y), color)
}

/// Darkens the whole canvas.
pub(crate) fn dim_screen(ctx: &mut dyn RenderContext, alpha: u8) -> Result<(), RenderError> {
    let size = CANVAS_SIZE.as_vec2();
    ctx.fill_rect(Rect::new(0.0, 0.0, size.x, size.y), Color::rgba(0, 0, 0, alpha))
}
