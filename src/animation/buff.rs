use glam::Vec2;

use crate::animation::{Anchor, Animation, AnimationPayload, TimeToLive};
use crate::constants::animation::BUFF_TICKS;
use crate::error::RenderError;
use crate::render::{Color, Rect, RenderContext};

const SPARKLE_COLOR: Color = Color::rgb(250, 230, 90);

/// Horizontal positions of the sparkles, as fractions of the entity width.
const SPARKLE_COLUMNS: [f32; 3] = [0.2, 0.5, 0.8];

/// Sparkles rising along the entity, used as the generic "something good happened" effect.
pub struct BuffAnimation {
    ttl: TimeToLive,
}

impl BuffAnimation {
    pub fn new() -> Self {
        Self {
            ttl: TimeToLive::new(BUFF_TICKS),
        }
    }

    pub fn create(_payload: AnimationPayload) -> Box<dyn Animation> {
        Box::new(Self::new())
    }
}

impl Default for BuffAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for BuffAnimation {
    fn update(&mut self) {
        self.ttl.tick();
    }

    fn is_finished(&self) -> bool {
        self.ttl.is_expired()
    }

    fn render(&self, ctx: &mut dyn RenderContext, anchor: Anchor) -> Result<(), RenderError> {
        let progress = self.ttl.progress();
        let color = SPARKLE_COLOR.with_alpha(1.0 - progress);

        for (i, column) in SPARKLE_COLUMNS.iter().enumerate() {
            // Stagger the columns so they don't rise in lockstep
            let phase = (progress + i as f32 * 0.3) % 1.0;
            let position = anchor.screen + Vec2::new(anchor.size.x * column, anchor.size.y * (1.0 - phase));
            ctx.fill_rect(Rect::new(position.x - 1.5, position.y - 1.5, 3.0, 3.0), color)?;
        }
        Ok(())
    }
}
