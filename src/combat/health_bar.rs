use crate::constants::combat::{HEALTH_BAR_HEIGHT, HEALTH_BAR_WIDTH, HEALTH_BAR_Y_OFFSET};
use crate::error::RenderError;
use crate::render::{Color, Rect, RenderContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthBarColors {
    pub background: Color,
    pub border: Color,
    pub fill: Color,
    /// Below half health.
    pub low: Color,
    /// Below a quarter of health.
    pub critical: Color,
}

impl Default for HealthBarColors {
    fn default() -> Self {
        Self {
            background: Color::rgba(40, 40, 40, 204),
            border: Color::rgba(0, 0, 0, 204),
            fill: Color::rgba(200, 0, 0, 230),
            low: Color::rgba(200, 200, 0, 204),
            critical: Color::rgba(255, 50, 50, 255),
        }
    }
}

/// A small bar drawn above an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthBar {
    pub width: f32,
    pub height: f32,
    pub y_offset: f32,
    pub colors: HealthBarColors,
}

impl Default for HealthBar {
    fn default() -> Self {
        Self {
            width: HEALTH_BAR_WIDTH,
            height: HEALTH_BAR_HEIGHT,
            y_offset: HEALTH_BAR_Y_OFFSET,
            colors: HealthBarColors::default(),
        }
    }
}

impl HealthBar {
    /// Picks the fill color for the given health ratio.
    pub fn fill_color(&self, ratio: f32) -> Color {
        if ratio < 0.25 {
            self.colors.critical
        } else if ratio < 0.5 {
            self.colors.low
        } else {
            self.colors.fill
        }
    }

    /// Draws the bar centered over an entity whose top-left corner is at (`x`, `y`).
    pub fn render(
        &self,
        ctx: &mut dyn RenderContext,
        x: f32,
        y: f32,
        current: u32,
        max: u32,
        entity_width: f32,
    ) -> Result<(), RenderError> {
        let ratio = if max == 0 {
            0.0
        } else {
            (current as f32 / max as f32).clamp(0.0, 1.0)
        };

        let left = x + (entity_width - self.width) / 2.0;
        let top = y + self.y_offset;
        let frame = Rect::new(left, top, self.width, self.height);

        ctx.fill_rect(frame, self.colors.background)?;
        if ratio > 0.0 {
            ctx.fill_rect(Rect::new(left, top, self.width * ratio, self.height), self.fill_color(ratio))?;
        }
        ctx.stroke_rect(frame, self.colors.border)
    }
}
