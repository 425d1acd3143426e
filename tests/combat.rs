use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use dragonlair::animation::HealNumber;
use dragonlair::combat::{animations, CombatOptions, EmitOnDefeat};
use dragonlair::constants::combat::{DAMAGE_BLINK_INTERVAL, DAMAGE_EFFECT_TICKS, HEALTH_BAR_DISPLAY_TIME};
use dragonlair::entity::Body;
use dragonlair::events::GameEvent;
use glam::Vec2;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

fn options(max_health: u32) -> CombatOptions {
    CombatOptions {
        max_health,
        ..CombatOptions::default()
    }
}

#[test]
fn test_damage_floors_health_at_zero() {
    let clock = common::manual_clock();
    let mut combat = common::combat(&clock, options(30));

    assert_that(&combat.take_damage(10)).is_false();
    assert_eq!(combat.current_health(), 20);

    assert_that(&combat.take_damage(50)).is_true();
    assert_eq!(combat.current_health(), 0);
    assert_that(&combat.is_defeated()).is_true();
}

#[test]
fn test_zero_damage_still_flashes() {
    let clock = common::manual_clock();
    let mut combat = common::combat(&clock, options(30));

    assert_that(&combat.take_damage(0)).is_false();
    assert_eq!(combat.current_health(), 30);
    assert_that(&combat.is_damaged()).is_true();
}

#[test]
fn test_defeat_handler_runs_once() {
    let clock = common::manual_clock();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let mut combat = common::combat(&clock, options(10)).with_defeat_handler(move || counter.set(counter.get() + 1));

    assert_that(&combat.take_damage(10)).is_true();
    assert_that(&combat.take_damage(10)).is_true();
    assert_that(&combat.take_damage(1)).is_true();
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_reset_health_rearms_defeat_handler() {
    let clock = common::manual_clock();
    let events = common::events();
    let mut combat = common::combat(&clock, options(10)).with_defeat_handler(EmitOnDefeat {
        events: events.clone(),
        event: GameEvent::PlayerDefeated,
    });

    combat.take_damage(20);
    combat.reset_health();
    assert_eq!(combat.current_health(), 10);
    assert_that(&combat.is_damaged()).is_false();

    combat.take_damage(20);
    assert_eq!(events.drain(), vec![GameEvent::PlayerDefeated, GameEvent::PlayerDefeated]);
}

#[test]
fn test_reset_health_drops_playing_effects() {
    let clock = common::manual_clock();
    let mut combat = common::combat(&clock, options(10));

    combat.take_damage(3);
    assert_eq!(combat.animations().active_count(), 2);
    combat.reset_health();
    assert_eq!(combat.animations().active_count(), 0);
}

#[test]
fn test_defeat_handler_runs_again_after_heal() {
    let clock = common::manual_clock();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let mut combat = common::combat(&clock, options(10)).with_defeat_handler(move || counter.set(counter.get() + 1));

    assert_that(&combat.take_damage(10)).is_true();
    combat.heal(10);
    assert_that(&combat.is_defeated()).is_false();
    assert_eq!(combat.current_health(), 10);

    assert_that(&combat.take_damage(10)).is_true();
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_zero_heal_keeps_defeat_latched() {
    let clock = common::manual_clock();
    let calls = Rc::new(Cell::new(0));
    let counter = calls.clone();
    let mut combat = common::combat(&clock, options(10)).with_defeat_handler(move || counter.set(counter.get() + 1));

    combat.take_damage(10);
    combat.heal(0);
    combat.take_damage(5);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_heal_caps_at_max_health() {
    let clock = common::manual_clock();
    let mut combat = common::combat(&clock, options(50));

    combat.take_damage(30);
    combat.heal(10);
    assert_eq!(combat.current_health(), 30);
    combat.heal(1000);
    assert_eq!(combat.current_health(), 50);
}

#[test]
fn test_heal_falls_back_to_buff_animation() {
    let clock = common::manual_clock();
    let mut combat = common::combat(&clock, options(50));
    assert_that(&combat.animations().has_type(animations::HEAL)).is_false();

    combat.heal(5);
    assert_eq!(combat.animations().active_count(), 1);
}

#[test]
fn test_heal_prefers_registered_heal_animation() {
    let clock = common::manual_clock();
    let mut combat = common::combat(&clock, options(50)).with_animation(animations::HEAL, HealNumber::create);

    combat.heal(5);
    assert_eq!(combat.animations().active_count(), 1);
    assert_that(&combat.animations().has_type(animations::HEAL)).is_true();
}

#[test]
fn test_damage_plays_hit_and_number() {
    let clock = common::manual_clock();
    let mut combat = common::combat(&clock, options(50));

    combat.take_damage(5);
    assert_eq!(combat.animations().active_count(), 2);
}

#[test]
fn test_attack_range_is_symmetric_between_centers() {
    let clock = common::manual_clock();
    let combat = common::combat(
        &clock,
        CombatOptions {
            attack_range: 40.0,
            ..CombatOptions::default()
        },
    );

    let size = Vec2::splat(32.0);
    let a = Body::new(Vec2::new(0.0, 0.0), size);
    let near = Body::new(Vec2::new(40.0, 0.0), size);
    let far = Body::new(Vec2::new(41.0, 0.0), size);

    assert_that(&combat.is_target_in_attack_range(&a, &near)).is_true();
    assert_that(&combat.is_target_in_attack_range(&near, &a)).is_true();
    assert_that(&combat.is_target_in_attack_range(&a, &far)).is_false();
    assert_that(&combat.is_target_in_attack_range(&far, &a)).is_false();
}

#[test]
fn test_cooldown_blocks_until_elapsed() {
    let clock = common::manual_clock();
    let cooldown = Duration::from_millis(500);
    let mut combat = common::combat(
        &clock,
        CombatOptions {
            attack_cooldown: cooldown,
            ..CombatOptions::default()
        },
    );

    assert_that(&combat.can_attack()).is_true();
    combat.start_cooldown();
    assert_eq!(combat.next_attack_time(), cooldown);
    assert_that(&combat.can_attack()).is_false();

    clock.advance(cooldown - Duration::from_millis(1));
    assert_that(&combat.can_attack()).is_false();
    clock.advance(Duration::from_millis(1));
    assert_that(&combat.can_attack()).is_true();
}

#[test]
fn test_strike_applies_attack_damage_and_cooldown() {
    let clock = common::manual_clock();
    let mut attacker = common::combat(
        &clock,
        CombatOptions {
            attack_damage: 7,
            ..CombatOptions::default()
        },
    );
    let mut target = common::combat(&clock, options(10));

    assert_that(&attacker.strike(&mut target)).is_false();
    assert_eq!(target.current_health(), 3);
    assert_that(&attacker.can_attack()).is_false();
}

#[test]
fn test_entity_blinks_while_damaged() {
    let clock = common::manual_clock();
    let mut combat = common::combat(&clock, options(50));
    assert_that(&combat.should_render_entity()).is_true();

    combat.take_damage(1);
    clock.set(Duration::ZERO);
    assert_that(&combat.should_render_entity()).is_true();
    clock.set(DAMAGE_BLINK_INTERVAL);
    assert_that(&combat.should_render_entity()).is_false();
    clock.set(DAMAGE_BLINK_INTERVAL * 2);
    assert_that(&combat.should_render_entity()).is_true();

    for _ in 0..DAMAGE_EFFECT_TICKS {
        combat.update();
    }
    clock.set(DAMAGE_BLINK_INTERVAL);
    assert_that(&combat.should_render_entity()).is_true();
}

#[test]
fn test_health_bar_change_window() {
    let clock = common::manual_clock();
    let mut combat = common::combat(&clock, options(50));

    clock.advance(HEALTH_BAR_DISPLAY_TIME * 2);
    assert_that(&combat.health_bar_recently_changed()).is_false();

    combat.take_damage(1);
    assert_that(&combat.health_bar_recently_changed()).is_true();
    clock.advance(HEALTH_BAR_DISPLAY_TIME);
    assert_that(&combat.health_bar_recently_changed()).is_false();
}
