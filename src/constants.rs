//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// Upper bound for the time between two frames, so a backgrounded tab does not produce a huge jump.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(100);

/// The size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(800, 600);

/// The size of each map tile, in pixels.
pub const TILE_SIZE: u32 = 32;

/// The size of the player and NPC sprites, in pixels.
pub const ENTITY_SIZE: u32 = 32;

pub mod combat {
    use std::time::Duration;

    pub const DEFAULT_MAX_HEALTH: u32 = 100;
    pub const DEFAULT_ATTACK_DAMAGE: u32 = 10;
    /// Attack reach measured between entity centers, in pixels.
    pub const DEFAULT_ATTACK_RANGE: f32 = 40.0;
    pub const DEFAULT_ATTACK_COOLDOWN: Duration = Duration::from_millis(1000);

    /// How long the health bar stays up after health changes.
    pub const HEALTH_BAR_DISPLAY_TIME: Duration = Duration::from_millis(3000);

    /// Length of the damage flash, in frame ticks.
    pub const DAMAGE_EFFECT_TICKS: u32 = 20;
    /// Half-period of the damage blink.
    pub const DAMAGE_BLINK_INTERVAL: Duration = Duration::from_millis(100);

    pub const HEALTH_BAR_WIDTH: f32 = 32.0;
    pub const HEALTH_BAR_HEIGHT: f32 = 5.0;
    pub const HEALTH_BAR_Y_OFFSET: f32 = -10.0;
}

pub mod animation {
    pub const HIT_TICKS: u32 = 15;
    pub const DAMAGE_NUMBER_TICKS: u32 = 45;
    pub const HEAL_NUMBER_TICKS: u32 = 45;
    pub const BUFF_TICKS: u32 = 30;
    /// Vertical pixels a floating number climbs per tick.
    pub const NUMBER_RISE_PER_TICK: f32 = 0.6;
}

pub mod transition {
    use std::time::Duration;

    pub const FADE_OUT: Duration = Duration::from_millis(400);
    pub const FADE_IN: Duration = Duration::from_millis(400);
    /// Pause between the map swap and the fade-in.
    pub const SETTLE_DELAY: Duration = Duration::from_millis(100);
    /// Extra time the player stays locked after the fade-in finishes.
    pub const UNLOCK_BUFFER: Duration = Duration::from_millis(100);
}

pub mod mechanics {
    /// Player walking speed, in pixels per tick.
    pub const PLAYER_SPEED: f32 = 4.0;
    /// NPC walking speed, in pixels per second of update time.
    pub const NPC_SPEED: f32 = 96.0;
    /// Distance (in tiles) at which hostile NPCs notice the player.
    pub const AGGRO_RADIUS_TILES: u32 = 5;
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    pub const PLAYER_ATTACK_DAMAGE: u32 = 15;
    /// Health restored by the merchant's potion.
    pub const MERCHANT_HEAL: u32 = 50;
}

pub mod ui {
    pub const INVENTORY_SLOTS: usize = 40;
    pub const INVENTORY_SLOTS_PER_ROW: usize = 10;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_time() {
        // 60 FPS = 16.67ms per frame
        let expected_nanos = (1_000_000_000.0 / 60.0) as u64;
        assert_eq!(LOOP_TIME.as_nanos() as u64, expected_nanos);
    }

    #[test]
    fn test_max_frame_delta_exceeds_loop_time() {
        assert!(MAX_FRAME_DELTA > LOOP_TIME);
    }

    #[test]
    fn test_inventory_grid_is_rectangular() {
        assert_eq!(ui::INVENTORY_SLOTS % ui::INVENTORY_SLOTS_PER_ROW, 0);
    }

    #[test]
    fn test_entities_fit_in_tiles() {
        assert!(ENTITY_SIZE <= TILE_SIZE);
    }
}
