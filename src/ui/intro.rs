use tracing::debug;

use crate::error::RenderError;
use crate::render::{Color, RenderContext};
use crate::ui::{centered_text, dim_screen};

const TITLE_COLOR: Color = Color::rgb(230, 90, 50);

/// Title screen shown at startup and after every restart.
#[derive(Debug, Default)]
pub struct IntroScene {
    visible: bool,
}

impl IntroScene {
    pub fn show(&mut self) {
        debug!("Intro shown");
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

        dim_screen(ctx, 255)?;
        centered_text(ctx, "DRAGON'S LAIR", 180.0, TITLE_COLOR)?;
        centered_text(ctx, "Leave home, cross the dark forest and face the dragon.", 240.0, Color::WHITE)?;
        centered_text(ctx, "Arrows: move   E: talk   Space: attack   I: inventory   Esc: menu", 300.0, Color::WHITE)?;
        centered_text(ctx, "Press Enter to start", 380.0, Color::rgb(255, 220, 90))
    }
}
