use glam::Vec2;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter};
use tracing::debug;

use crate::constants::CANVAS_SIZE;
use crate::error::RenderError;
use crate::render::{Color, Rect, RenderContext};
use crate::ui::{centered_text, dim_screen, draw_panel};

const SELECTED_COLOR: Color = Color::rgb(255, 220, 90);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount)]
pub enum MenuEntry {
    Resume,
    Debug,
    Restart,
}

/// What the controller should do after an entry was activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Resume,
    ToggleDebug,
    Restart,
}

#[derive(Debug, Default)]
pub struct Menu {
    visible: bool,
    selected: usize,
}

impl Menu {
    pub fn show(&mut self) {
        if !self.visible {
            debug!("Menu shown");
        }
        self.visible = true;
        self.selected = 0;
    }

    pub fn hide(&mut self) {
        if self.visible {
            debug!("Menu hidden");
        }
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        if self.visible {
            self.hide();
        } else {
            self.show();
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected(&self) -> MenuEntry {
        MenuEntry::iter().nth(self.selected).unwrap_or(MenuEntry::Resume)
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MenuEntry::COUNT;
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + MenuEntry::COUNT - 1) % MenuEntry::COUNT;
    }

    /// Activates the selected entry. Resume and Restart close the menu.
    pub fn activate(&mut self) -> Option<MenuAction> {
        if !self.visible {
            return None;
        }

        let action = match self.selected() {
            MenuEntry::Resume => MenuAction::Resume,
            MenuEntry::Debug => MenuAction::ToggleDebug,
            MenuEntry::Restart => MenuAction::Restart,
        };
        if action != MenuAction::ToggleDebug {
            self.hide();
        }
        Some(action)
    }

    pub fn render(&self, ctx: &mut dyn RenderContext, debug: bool) -> Result<(), RenderError> {
        if !self.visible {
            return Ok(());
        }

        dim_screen(ctx, 140)?;
        let canvas = CANVAS_SIZE.as_vec2();
        let panel = Rect::new(canvas.x / 2.0 - 120.0, canvas.y / 2.0 - 90.0, 240.0, 180.0);
        draw_panel(ctx, panel)?;
        centered_text(ctx, "MENU", panel.y + 20.0, Color::WHITE)?;

        for (i, entry) in MenuEntry::iter().enumerate() {
            let label = match entry {
                MenuEntry::Debug => format!("Debug: {}", if debug { "on" } else { "off" }),
                other => other.to_string(),
            };
            let (label, color) = if i == self.selected {
                (format!("> {label}"), SELECTED_COLOR)
            } else {
                (label, Color::WHITE)
            };
            ctx.fill_text(&label, Vec2::new(panel.x + 40.0, panel.y + 60.0 + i as f32 * 30.0), color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut menu = Menu::default();
        menu.show();
        menu.select_previous();
        assert_eq!(menu.selected(), MenuEntry::Restart);
        menu.select_next();
        assert_eq!(menu.selected(), MenuEntry::Resume);
    }

    #[test]
    fn test_debug_entry_keeps_menu_open() {
        let mut menu = Menu::default();
        menu.show();
        menu.select_next();
        assert_eq!(menu.activate(), Some(MenuAction::ToggleDebug));
        assert!(menu.is_visible());

        menu.select_next();
        assert_eq!(menu.activate(), Some(MenuAction::Restart));
        assert!(!menu.is_visible());
        assert_eq!(menu.activate(), None);
    }
}
