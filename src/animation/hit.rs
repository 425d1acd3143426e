use crate::animation::{Anchor, Animation, AnimationPayload, TimeToLive};
use crate::constants::animation::HIT_TICKS;
use crate::error::RenderError;
use crate::render::{Color, Rect, RenderContext};

const HIT_COLOR: Color = Color::rgb(255, 240, 200);

/// A short impact flash: an outline that grows out of the entity while fading.
pub struct HitAnimation {
    ttl: TimeToLive,
}

impl HitAnimation {
    pub fn new() -> Self {
        Self {
            ttl: TimeToLive::new(HIT_TICKS),
        }
    }

    pub fn create(_payload: AnimationPayload) -> Box<dyn Animation> {
        Box::new(Self::new())
    }
}

impl Default for HitAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for HitAnimation {
    fn update(&mut self) {
        self.ttl.tick();
    }

    fn is_finished(&self) -> bool {
        self.ttl.is_expired()
    }

    fn render(&self, ctx: &mut dyn RenderContext, anchor: Anchor) -> Result<(), RenderError> {
        let progress = self.ttl.progress();
        let scale = 0.6 + 0.6 * progress;
        let size = anchor.size * scale;
        let center = anchor.center();
        let color = HIT_COLOR.with_alpha(1.0 - progress);

        ctx.stroke_rect(Rect::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y), color)?;
        ctx.fill_rect(Rect::new(center.x - 2.0, center.y - 2.0, 4.0, 4.0), color)
    }
}
