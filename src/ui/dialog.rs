use glam::Vec2;
use tracing::debug;

use crate::constants::CANVAS_SIZE;
use crate::error::RenderError;
use crate::events::GameEvent;
use crate::render::{Color, Rect, RenderContext};
use crate::ui::draw_panel;

const HINT_COLOR: Color = Color::rgb(170, 170, 180);

/// A conversation box at the bottom of the screen, one message at a time.
#[derive(Debug, Default)]
pub struct Dialog {
    messages: Vec<String>,
    index: usize,
    active: bool,
    on_complete: Option<GameEvent>,
}

impl Dialog {
    /// Replaces whatever is showing with a new conversation.
    ///
    /// `on_complete` is returned by [`Dialog::advance`] when the last message is dismissed.
    /// An empty conversation is not shown at all.
    pub fn start_conversation<S: Into<String>>(
        &mut self,
        messages: impl IntoIterator<Item = S>,
        on_complete: Option<GameEvent>,
    ) {
        self.messages = messages.into_iter().map(Into::into).collect();
        self.index = 0;
        self.active = !self.messages.is_empty();
        self.on_complete = if self.active { on_complete } else { None };
        debug!(messages = self.messages.len(), "Dialog started");
    }

    /// Moves to the next message, closing the dialog after the last one.
    ///
    /// Returns the completion event when the conversation ends.
    pub fn advance(&mut self) -> Option<GameEvent> {
        if !self.active {
            return None;
        }

        self.index += 1;
        if self.index < self.messages.len() {
            return None;
        }

        self.active = false;
        debug!("Dialog finished");
        self.on_complete.take()
    }

    /// Closes the dialog without completing it.
    pub fn hide(&mut self) {
        self.active = false;
        self.on_complete = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current_message(&self) -> Option<&str> {
        self.active.then(|| self.messages.get(self.index)).flatten().map(String::as_str)
    }

    pub fn render(&self, ctx: &mut dyn RenderContext) -> Result<(), RenderError> {
        let Some(message) = self.current_message() else {
            return Ok(());
        };

        let canvas = CANVAS_SIZE.as_vec2();
        let panel = Rect::new(20.0, canvas.y - 120.0, canvas.x - 40.0, 100.0);
        draw_panel(ctx, panel)?;
        ctx.fill_text(message, Vec2::new(panel.x + 16.0, panel.y + 20.0), Color::WHITE)?;

        let hint = format!("{}/{}  [E] continue", self.index + 1, self.messages.len());
        let hint_width = ctx.text_width(&hint);
        ctx.fill_text(
            &hint,
            Vec2::new(panel.x + panel.w - hint_width - 16.0, panel.y + panel.h - 20.0),
            HINT_COLOR,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_conversation_is_not_shown() {
        let mut dialog = Dialog::default();
        dialog.start_conversation(Vec::<String>::new(), Some(GameEvent::HealPlayer(1)));
        assert!(!dialog.is_active());
        assert_eq!(dialog.advance(), None);
    }
}
