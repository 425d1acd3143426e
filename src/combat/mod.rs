//! Per-entity health and attack state.
//!
//! Every player and NPC owns one [`Combat`]. It tracks health, the attack cooldown, the
//! damage flash and when the health bar was last relevant, and it owns the entity's
//! [`AnimationManager`] so that damage and healing produce their visual effects.
//!
//! The entity's geometry is not stored here; operations that need it receive the
//! owner's [`Body`] instead.

use std::time::Duration;

use glam::Vec2;
use tracing::{debug, trace};

use crate::animation::{AnimationFactory, AnimationManager, AnimationPayload, BuffAnimation, DamageNumber, HitAnimation};
use crate::clock::SharedClock;
use crate::constants::combat::{
    DAMAGE_BLINK_INTERVAL, DAMAGE_EFFECT_TICKS, DEFAULT_ATTACK_COOLDOWN, DEFAULT_ATTACK_DAMAGE, DEFAULT_ATTACK_RANGE,
    DEFAULT_MAX_HEALTH, HEALTH_BAR_DISPLAY_TIME, HEALTH_BAR_HEIGHT, HEALTH_BAR_WIDTH, HEALTH_BAR_Y_OFFSET,
};
use crate::entity::Body;
use crate::error::RenderError;
use crate::events::{EventQueue, GameEvent};
use crate::render::RenderContext;

pub mod health_bar;

pub use health_bar::{HealthBar, HealthBarColors};

/// Names of the animation types every combat model registers.
pub mod animations {
    pub const HIT: &str = "hit";
    pub const DAMAGE: &str = "damage";
    pub const HEAL: &str = "heal";
    pub const BUFF: &str = "buff";
}

/// Tunables for a single combat model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombatOptions {
    pub max_health: u32,
    pub attack_damage: u32,
    /// Reach between entity centers, in pixels.
    pub attack_range: f32,
    pub attack_cooldown: Duration,
    pub health_bar_width: f32,
    pub health_bar_height: f32,
    pub health_bar_y_offset: f32,
    pub health_bar_colors: HealthBarColors,
    pub show_health_bar: bool,
}

impl Default for CombatOptions {
    fn default() -> Self {
        Self {
            max_health: DEFAULT_MAX_HEALTH,
            attack_damage: DEFAULT_ATTACK_DAMAGE,
            attack_range: DEFAULT_ATTACK_RANGE,
            attack_cooldown: DEFAULT_ATTACK_COOLDOWN,
            health_bar_width: HEALTH_BAR_WIDTH,
            health_bar_height: HEALTH_BAR_HEIGHT,
            health_bar_y_offset: HEALTH_BAR_Y_OFFSET,
            health_bar_colors: HealthBarColors::default(),
            show_health_bar: true,
        }
    }
}

/// What happens when health first reaches zero.
pub trait DefeatHandler {
    fn on_defeat(&mut self);
}

impl<F: FnMut()> DefeatHandler for F {
    fn on_defeat(&mut self) {
        self()
    }
}

/// Defeat handler that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreDefeat;

impl DefeatHandler for IgnoreDefeat {
    fn on_defeat(&mut self) {}
}

/// Defeat handler that reports the defeat through the event queue.
pub struct EmitOnDefeat {
    pub events: EventQueue,
    pub event: GameEvent,
}

impl DefeatHandler for EmitOnDefeat {
    fn on_defeat(&mut self) {
        self.events.send(self.event);
    }
}

pub struct Combat {
    max_health: u32,
    current_health: u32,
    pub attack_damage: u32,
    pub attack_range: f32,
    pub attack_cooldown: Duration,
    next_attack_time: Duration,
    is_damaged: bool,
    damage_effect_timer: u32,
    health_bar_hide_time: Duration,
    pub show_health_bar: bool,
    /// Set once the defeat handler has run; cleared once health is above zero again.
    defeated: bool,
    health_bar: HealthBar,
    animations: AnimationManager,
    on_defeat: Box<dyn DefeatHandler>,
    clock: SharedClock,
}

impl Combat {
    pub fn new(clock: SharedClock, options: CombatOptions) -> Self {
        let mut manager = AnimationManager::new();
        manager.register_animation_type(animations::HIT, HitAnimation::create);
        manager.register_animation_type(animations::DAMAGE, DamageNumber::create);
        manager.register_animation_type(animations::BUFF, BuffAnimation::create);

        let now = clock.now();
        Self {
            max_health: options.max_health,
            current_health: options.max_health,
            attack_damage: options.attack_damage,
            attack_range: options.attack_range,
            attack_cooldown: options.attack_cooldown,
            next_attack_time: Duration::ZERO,
            is_damaged: false,
            damage_effect_timer: 0,
            health_bar_hide_time: now + HEALTH_BAR_DISPLAY_TIME,
            show_health_bar: options.show_health_bar,
            defeated: false,
            health_bar: HealthBar {
                width: options.health_bar_width,
                height: options.health_bar_height,
                y_offset: options.health_bar_y_offset,
                colors: options.health_bar_colors,
            },
            animations: manager,
            on_defeat: Box::new(IgnoreDefeat),
            clock,
        }
    }

    pub fn with_defeat_handler(mut self, handler: impl DefeatHandler + 'static) -> Self {
        self.on_defeat = Box::new(handler);
        self
    }

    /// Registers an extra animation type on this entity's manager.
    pub fn with_animation(mut self, name: &str, factory: AnimationFactory) -> Self {
        self.animations.register_animation_type(name, factory);
        self
    }

    /// Applies `amount` damage, flooring health at zero.
    ///
    /// Returns whether the entity is defeated. The defeat handler only runs on the
    /// transition to zero, so repeated hits on a defeated entity still return `true`
    /// without running it again.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.current_health = self.current_health.saturating_sub(amount);
        self.health_bar_hide_time = self.clock.now() + HEALTH_BAR_DISPLAY_TIME;

        self.is_damaged = true;
        self.damage_effect_timer = DAMAGE_EFFECT_TICKS;

        self.animations.play(animations::HIT, AnimationPayload::default());
        self.animations.play(animations::DAMAGE, AnimationPayload::value(amount));

        trace!(amount, health = self.current_health, "Took damage");

        if self.current_health > 0 {
            return false;
        }

        if !self.defeated {
            self.defeated = true;
            debug!("Health reached zero");
            self.on_defeat.on_defeat();
        }
        true
    }

    /// Restores `amount` health, capped at the maximum.
    ///
    /// Plays `heal` when registered, otherwise `buff`, otherwise nothing.
    pub fn heal(&mut self, amount: u32) {
        self.current_health = self.current_health.saturating_add(amount).min(self.max_health);
        if self.current_health > 0 {
            self.defeated = false;
        }
        self.health_bar_hide_time = self.clock.now() + HEALTH_BAR_DISPLAY_TIME;

        let payload = AnimationPayload::value(amount);
        if self.animations.has_type(animations::HEAL) {
            self.animations.play(animations::HEAL, payload);
        } else if self.animations.has_type(animations::BUFF) {
            self.animations.play(animations::BUFF, payload);
        }
    }

    pub fn reset_health(&mut self) {
        self.current_health = self.max_health;
        self.is_damaged = false;
        self.damage_effect_timer = 0;
        self.defeated = false;
        self.animations.clear();
    }

    /// Whether the centers of `own` and `target` are within attack range.
    pub fn is_target_in_attack_range(&self, own: &Body, target: &Body) -> bool {
        own.center().distance(target.center()) <= self.attack_range
    }

    pub fn can_attack(&self) -> bool {
        self.clock.now() >= self.next_attack_time
    }

    /// Blocks attacks until the cooldown has elapsed.
    pub fn start_cooldown(&mut self) {
        self.next_attack_time = self.clock.now() + self.attack_cooldown;
    }

    /// Starts the cooldown and hits `target` with this entity's attack damage.
    ///
    /// Returns whether the target was defeated. Does not check range or cooldown.
    pub fn strike(&mut self, target: &mut Combat) -> bool {
        self.start_cooldown();
        target.take_damage(self.attack_damage)
    }

    /// Advances the damage flash and every active animation by one tick.
    pub fn update(&mut self) {
        if self.is_damaged {
            self.damage_effect_timer = self.damage_effect_timer.saturating_sub(1);
            if self.damage_effect_timer == 0 {
                self.is_damaged = false;
            }
        }

        self.animations.update();
    }

    /// Draws the health bar (when hurt and enabled) and the active animations.
    pub fn render(&self, ctx: &mut dyn RenderContext, screen: Vec2, size: Vec2) -> Result<(), RenderError> {
        if self.show_health_bar && self.current_health < self.max_health {
            self.health_bar
                .render(ctx, screen.x, screen.y, self.current_health, self.max_health, size.x)?;
        }

        self.animations.render(ctx, screen.x, screen.y, size.x, size.y)
    }

    /// False on every other blink interval while the damage flash is active.
    pub fn should_render_entity(&self) -> bool {
        if !self.is_damaged {
            return true;
        }
        let intervals = self.clock.now().as_millis() / DAMAGE_BLINK_INTERVAL.as_millis();
        intervals % 2 == 0
    }

    pub fn current_health(&self) -> u32 {
        self.current_health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health == 0
    }

    pub fn is_damaged(&self) -> bool {
        self.is_damaged
    }

    pub fn next_attack_time(&self) -> Duration {
        self.next_attack_time
    }

    /// Whether health changed recently enough for the bar to still be relevant.
    pub fn health_bar_recently_changed(&self) -> bool {
        self.clock.now() < self.health_bar_hide_time
    }

    pub fn animations(&self) -> &AnimationManager {
        &self.animations
    }

    pub fn animations_mut(&mut self) -> &mut AnimationManager {
        &mut self.animations
    }
}
