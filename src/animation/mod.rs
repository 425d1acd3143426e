//! Transient visual effects attached to an entity.
//!
//! An [`AnimationManager`] owns its own registry of animation types (no global registry)
//! plus the list of currently playing instances. Instances are never restarted: they run
//! for a fixed number of ticks, get dropped, and a new `play` creates a fresh one.

use std::collections::HashMap;

use glam::Vec2;
use smallvec::SmallVec;
use tracing::trace;

use crate::error::RenderError;
use crate::render::RenderContext;

pub mod buff;
pub mod hit;
pub mod number;

pub use buff::BuffAnimation;
pub use hit::HitAnimation;
pub use number::{DamageNumber, HealNumber};

/// Data handed to an animation when it is played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationPayload {
    pub value: Option<u32>,
}

impl AnimationPayload {
    pub fn value(value: u32) -> Self {
        Self { value: Some(value) }
    }
}

/// Where the owning entity currently sits on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub screen: Vec2,
    pub size: Vec2,
}

impl Anchor {
    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.screen.x + self.size.x / 2.0, self.screen.y)
    }

    pub fn center(&self) -> Vec2 {
        self.screen + self.size / 2.0
    }
}

pub trait Animation {
    /// Advances the animation by one tick.
    fn update(&mut self);

    fn is_finished(&self) -> bool;

    fn render(&self, ctx: &mut dyn RenderContext, anchor: Anchor) -> Result<(), RenderError>;
}

/// Constructor for an animation type.
pub type AnimationFactory = fn(AnimationPayload) -> Box<dyn Animation>;

/// Countdown shared by all animation types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeToLive {
    pub remaining_ticks: u32,
    pub total_ticks: u32,
}

impl TimeToLive {
    pub fn new(ticks: u32) -> Self {
        Self {
            remaining_ticks: ticks,
            total_ticks: ticks,
        }
    }

    pub fn tick(&mut self) {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_ticks == 0
    }

    /// Progress from 0.0 (just started) to 1.0 (finished).
    pub fn progress(&self) -> f32 {
        if self.total_ticks == 0 {
            return 1.0;
        }
        1.0 - self.remaining_ticks as f32 / self.total_ticks as f32
    }

    pub fn elapsed(&self) -> u32 {
        self.total_ticks - self.remaining_ticks
    }
}

/// Registry and playback list for one entity's visual effects.
#[derive(Default)]
pub struct AnimationManager {
    registry: HashMap<String, AnimationFactory>,
    active: SmallVec<[Box<dyn Animation>; 4]>,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associates `name` with `factory`. Registering the same name again replaces the previous factory.
    pub fn register_animation_type(&mut self, name: impl Into<String>, factory: AnimationFactory) {
        self.registry.insert(name.into(), factory);
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.registry.contains_key(name)
    }

    /// Starts a new instance of `name`. Unregistered names are ignored.
    ///
    /// Returns whether an animation was started.
    pub fn play(&mut self, name: &str, payload: AnimationPayload) -> bool {
        let Some(factory) = self.registry.get(name) else {
            trace!(animation = name, "Ignoring unregistered animation");
            return false;
        };

        self.active.push(factory(payload));
        true
    }

    /// Advances every active animation by one tick and drops the finished ones.
    pub fn update(&mut self) {
        for animation in self.active.iter_mut() {
            animation.update();
        }
        self.active.retain(|animation| !animation.is_finished());
    }

    /// Draws active animations in the order they were started.
    pub fn render(
        &self,
        ctx: &mut dyn RenderContext,
        screen_x: f32,
        screen_y: f32,
        entity_width: f32,
        entity_height: f32,
    ) -> Result<(), RenderError> {
        let anchor = Anchor {
            screen: Vec2::new(screen_x, screen_y),
            size: Vec2::new(entity_width, entity_height),
        };

        for animation in self.active.iter() {
            animation.render(ctx, anchor)?;
        }
        Ok(())
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_to_live_progress() {
        let mut ttl = TimeToLive::new(4);
        assert_eq!(ttl.progress(), 0.0);
        ttl.tick();
        assert_eq!(ttl.progress(), 0.25);
        assert_eq!(ttl.elapsed(), 1);
        for _ in 0..10 {
            ttl.tick();
        }
        assert!(ttl.is_expired());
        assert_eq!(ttl.progress(), 1.0);
    }

    #[test]
    fn test_zero_length_time_to_live_is_expired() {
        let ttl = TimeToLive::new(0);
        assert!(ttl.is_expired());
        assert_eq!(ttl.progress(), 1.0);
    }
}
