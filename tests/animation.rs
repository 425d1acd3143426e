use dragonlair::animation::{AnimationManager, AnimationPayload, DamageNumber, HitAnimation};
use dragonlair::constants::animation::{DAMAGE_NUMBER_TICKS, HIT_TICKS};
use dragonlair::render::recording::{DrawCall, RecordingContext};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

#[test]
fn test_playing_unregistered_animation_is_a_no_op() {
    let mut manager = AnimationManager::new();

    assert_that(&manager.play("nonexistent", AnimationPayload::default())).is_false();
    assert_eq!(manager.active_count(), 0);
}

#[test]
fn test_hit_animation_expires_after_its_ticks() {
    let mut manager = AnimationManager::new();
    manager.register_animation_type("hit", HitAnimation::create);

    assert_that(&manager.play("hit", AnimationPayload::default())).is_true();
    for _ in 0..HIT_TICKS - 1 {
        manager.update();
    }
    assert_eq!(manager.active_count(), 1);

    manager.update();
    assert_eq!(manager.active_count(), 0);
}

#[test]
fn test_instances_run_independently() {
    let mut manager = AnimationManager::new();
    manager.register_animation_type("hit", HitAnimation::create);
    manager.register_animation_type("damage", DamageNumber::create);

    manager.play("damage", AnimationPayload::value(4));
    manager.play("hit", AnimationPayload::default());
    manager.play("hit", AnimationPayload::default());
    assert_eq!(manager.active_count(), 3);

    for _ in 0..HIT_TICKS {
        manager.update();
    }
    assert_eq!(manager.active_count(), 1);

    for _ in HIT_TICKS..DAMAGE_NUMBER_TICKS {
        manager.update();
    }
    assert_eq!(manager.active_count(), 0);
}

#[test]
fn test_registering_again_replaces_the_factory() {
    let mut manager = AnimationManager::new();
    manager.register_animation_type("effect", HitAnimation::create);
    manager.register_animation_type("effect", DamageNumber::create);

    manager.play("effect", AnimationPayload::value(9));
    let mut ctx = RecordingContext::new();
    manager.render(&mut ctx, 0.0, 0.0, 32.0, 32.0).unwrap();

    assert_eq!(ctx.texts(), vec!["9"]);
}

#[test]
fn test_render_draws_in_start_order() {
    let mut manager = AnimationManager::new();
    manager.register_animation_type("damage", DamageNumber::create);

    manager.play("damage", AnimationPayload::value(1));
    manager.play("damage", AnimationPayload::value(2));

    let mut ctx = RecordingContext::new();
    manager.render(&mut ctx, 100.0, 100.0, 32.0, 32.0).unwrap();
    assert_eq!(ctx.texts(), vec!["1", "2"]);
    assert_that(&ctx.calls.iter().all(|call| matches!(call, DrawCall::Text(..)))).is_true();
}

#[test]
fn test_clear_drops_every_instance() {
    let mut manager = AnimationManager::new();
    manager.register_animation_type("hit", HitAnimation::create);
    manager.play("hit", AnimationPayload::default());

    manager.clear();
    assert_eq!(manager.active_count(), 0);
}
