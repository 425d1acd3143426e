//! Numbers that float up from the top of an entity.

use glam::Vec2;

use crate::animation::{Anchor, Animation, AnimationPayload, TimeToLive};
use crate::constants::animation::{DAMAGE_NUMBER_TICKS, HEAL_NUMBER_TICKS, NUMBER_RISE_PER_TICK};
use crate::error::RenderError;
use crate::render::{Color, RenderContext};

const DAMAGE_COLOR: Color = Color::rgb(255, 60, 60);
const HEAL_COLOR: Color = Color::rgb(80, 230, 100);

/// Shared drawing for damage and heal numbers.
struct FloatingNumber {
    text: String,
    color: Color,
    ttl: TimeToLive,
}

impl FloatingNumber {
    fn render(&self, ctx: &mut dyn RenderContext, anchor: Anchor) -> Result<(), RenderError> {
        let origin = anchor.top_center();
        let rise = self.ttl.elapsed() as f32 * NUMBER_RISE_PER_TICK;
        let width = ctx.text_width(&self.text);

        // Fully opaque for the first two thirds, then fade out
        let progress = self.ttl.progress();
        let alpha = if progress < 2.0 / 3.0 { 1.0 } else { (1.0 - progress) * 3.0 };

        ctx.fill_text(
            &self.text,
            Vec2::new(origin.x - width / 2.0, origin.y - 12.0 - rise),
            self.color.with_alpha(alpha),
        )
    }
}

/// The amount of damage taken, in red.
pub struct DamageNumber(FloatingNumber);

impl DamageNumber {
    pub fn new(value: u32) -> Self {
        Self(FloatingNumber {
            text: value.to_string(),
            color: DAMAGE_COLOR,
            ttl: TimeToLive::new(DAMAGE_NUMBER_TICKS),
        })
    }

    pub fn create(payload: AnimationPayload) -> Box<dyn Animation> {
        Box::new(Self::new(payload.value.unwrap_or(0)))
    }

    pub fn text(&self) -> &str {
        &self.0.text
    }
}

impl Animation for DamageNumber {
    fn update(&mut self) {
        self.0.ttl.tick();
    }

    fn is_finished(&self) -> bool {
        self.0.ttl.is_expired()
    }

    fn render(&self, ctx: &mut dyn RenderContext, anchor: Anchor) -> Result<(), RenderError> {
        self.0.render(ctx, anchor)
    }
}

/// The amount of health restored, in green with a leading `+`.
pub struct HealNumber(FloatingNumber);

impl HealNumber {
    pub fn new(value: u32) -> Self {
        Self(FloatingNumber {
            text: format!("+{value}"),
            color: HEAL_COLOR,
            ttl: TimeToLive::new(HEAL_NUMBER_TICKS),
        })
    }

    pub fn create(payload: AnimationPayload) -> Box<dyn Animation> {
        Box::new(Self::new(payload.value.unwrap_or(0)))
    }

    pub fn text(&self) -> &str {
        &self.0.text
    }
}

impl Animation for HealNumber {
    fn update(&mut self) {
        self.0.ttl.tick();
    }

    fn is_finished(&self) -> bool {
        self.0.ttl.is_expired()
    }

    fn render(&self, ctx: &mut dyn RenderContext, anchor: Anchor) -> Result<(), RenderError> {
        self.0.render(ctx, anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_text() {
        assert_eq!(DamageNumber::new(12).text(), "12");
        assert_eq!(HealNumber::new(7).text(), "+7");
    }

    #[test]
    fn test_damage_number_expires() {
        let mut number = DamageNumber::new(3);
        for _ in 0..DAMAGE_NUMBER_TICKS {
            assert!(!number.is_finished());
            number.update();
        }
        assert!(number.is_finished());
    }
}
