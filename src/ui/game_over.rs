use tracing::debug;

use crate::error::RenderError;
use crate::render::{Color, RenderContext};
use crate::ui::{centered_text, dim_screen};

#[derive(Debug, Default)]
pub struct GameOver {
    visible: bool,
}

impl GameOver {
    pub fn show(&mut self) {
        debug!("Game over shown");
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        if !self.visible {
            return Ok(());
        }

        dim_screen(ctx, 200)?;
        centered_text(ctx, "GAME OVER", 240.0, Color::rgb(255, 60, 60))?;
        centered_text(ctx, "Press Enter to restart", 300.0, Color::WHITE)
    }
}
