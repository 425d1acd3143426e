//! The grid inventory screen.
//!
//! Slots are laid out row by row. Arrow keys move the selection; moves that would leave
//! the grid are ignored rather than wrapped.

use glam::Vec2;
use tracing::debug;

use crate::constants::ui::{INVENTORY_SLOTS, INVENTORY_SLOTS_PER_ROW};
use crate::constants::CANVAS_SIZE;
use crate::entity::Direction;
use crate::error::RenderError;
use crate::render::{Color, Rect, RenderContext};
use crate::ui::{dim_screen, draw_panel};

const SLOT_SIZE: f32 = 36.0;
const SLOT_GAP: f32 = 4.0;
const SLOT_COLOR: Color = Color::rgb(60, 60, 70);
const SELECTED_COLOR: Color = Color::rgb(255, 220, 90);
const GOLD_COLOR: Color = Color::rgb(240, 200, 60);

/// Health band used to color the HP bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpLevel {
    /// Below 25 %.
    Low,
    /// Below 50 %.
    Medium,
    Good,
}

impl HpLevel {
    pub fn from_health(current: u32, max: u32) -> Self {
        let percent = if max == 0 {
            0.0
        } else {
            current as f32 / max as f32 * 100.0
        };

        if percent < 25.0 {
            HpLevel::Low
        } else if percent < 50.0 {
            HpLevel::Medium
        } else {
            HpLevel::Good
        }
    }

    pub fn color(self) -> Color {
        match self {
            HpLevel::Low => Color::rgb(255, 51, 51),
            HpLevel::Medium => Color::rgb(255, 204, 51),
            HpLevel::Good => Color::rgb(51, 204, 51),
        }
    }
}

/// Player numbers shown in the inventory header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerStats {
    pub health: u32,
    pub max_health: u32,
    pub gold: u32,
}

#[derive(Debug, Default)]
pub struct InventoryUi {
    visible: bool,
    selected: usize,
}

impl InventoryUi {
    /// Opens the inventory with the first slot selected. Does nothing if already open.
    pub fn show(&mut self) {
        if self.visible {
            return;
        }
        self.visible = true;
        self.selected = 0;
        debug!("Inventory shown");
    }

    pub fn hide(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        debug!("Inventory hidden");
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

    pub fn selected_slot(&self) -> usize {
        self.selected
    }

    /// Moves the selection one slot in `direction`.
    ///
    /// Returns false when hidden or when the move would leave `[0, INVENTORY_SLOTS)`.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        if !self.visible {
            return false;
        }

        let row = INVENTORY_SLOTS_PER_ROW as isize;
        let offset = match direction {
            Direction::Up => -row,
            Direction::Down => row,
            Direction::Left => -1,
            Direction::Right => 1,
        };

        let next = self.selected as isize + offset;
        if next < 0 || next >= INVENTORY_SLOTS as isize {
            return false;
        }
        self.selected = next as usize;
        true
    }

    pub fn render(&self, ctx: &mut dyn RenderContext, stats: PlayerStats) -> Result<(), RenderError> {
        if !self.visible {
            return Ok(());
        }

        dim_screen(ctx, 120)?;

        let rows = INVENTORY_SLOTS.div_ceil(INVENTORY_SLOTS_PER_ROW);
        let grid_width = INVENTORY_SLOTS_PER_ROW as f32 * (SLOT_SIZE + SLOT_GAP) - SLOT_GAP;
        let grid_height = rows as f32 * (SLOT_SIZE + SLOT_GAP) - SLOT_GAP;
        let canvas = CANVAS_SIZE.as_vec2();
        let panel = Rect::new(
            (canvas.x - grid_width) / 2.0 - 20.0,
            (canvas.y - grid_height) / 2.0 - 80.0,
            grid_width + 40.0,
            grid_height + 130.0,
        );
        draw_panel(ctx, panel)?;
        ctx.fill_text("Inventory", Vec2::new(panel.x + 20.0, panel.y + 16.0), Color::WHITE)?;

        // HP bar and gold
        let bar = Rect::new(panel.x + 60.0, panel.y + 44.0, 160.0, 12.0);
        ctx.fill_text("HP:", Vec2::new(panel.x + 20.0, bar.y + 2.0), Color::WHITE)?;
        ctx.fill_rect(bar, SLOT_COLOR)?;
        let ratio = if stats.max_health == 0 {
            0.0
        } else {
            stats.health as f32 / stats.max_health as f32
        };
        let level = HpLevel::from_health(stats.health, stats.max_health);
        ctx.fill_rect(Rect::new(bar.x, bar.y, bar.w * ratio, bar.h), level.color())?;
        ctx.fill_text(
            &format!("{}/{}", stats.health, stats.max_health),
            Vec2::new(bar.x + bar.w + 10.0, bar.y + 2.0),
            Color::WHITE,
        )?;
        ctx.fill_text(
            &format!("Gold: {}", stats.gold),
            Vec2::new(panel.x + panel.w - 120.0, bar.y + 2.0),
            GOLD_COLOR,
        )?;

        let origin = Vec2::new(panel.x + 20.0, panel.y + 80.0);
        for slot in 0..INVENTORY_SLOTS {
            let column = (slot % INVENTORY_SLOTS_PER_ROW) as f32;
            let row = (slot / INVENTORY_SLOTS_PER_ROW) as f32;
            let rect = Rect::new(
                origin.x + column * (SLOT_SIZE + SLOT_GAP),
                origin.y + row * (SLOT_SIZE + SLOT_GAP),
                SLOT_SIZE,
                SLOT_SIZE,
            );
            ctx.fill_rect(rect, SLOT_COLOR)?;
            if slot == self.selected {
                ctx.stroke_rect(rect, SELECTED_COLOR)?;
            }
        }

        ctx.fill_text(
            "Arrow keys to navigate, I or Esc to close",
            Vec2::new(panel.x + 20.0, panel.y + panel.h - 20.0),
            Color::rgb(170, 170, 180),
        )
    }
}
