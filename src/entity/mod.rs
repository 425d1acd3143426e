//! Things that live on a map: the player and NPCs.

pub mod direction;
pub mod npc;
pub mod player;

use glam::{IVec2, UVec2, Vec2};

use crate::combat::Combat;
use crate::constants::ENTITY_SIZE;

pub use direction::Direction;
pub use npc::{Npc, NpcKind};
pub use player::{Interaction, Player};

/// Position, size and facing of an entity, in world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub size: Vec2,
    pub direction: Direction,
}

impl Body {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            direction: Direction::default(),
        }
    }

    /// A standard-sized body standing on `tile`.
    pub fn at_tile(tile: UVec2, tile_size: u32) -> Self {
        Self::new(tile_to_pixel(tile, tile_size), Vec2::splat(ENTITY_SIZE as f32))
    }

    pub fn center(&self) -> Vec2 {
        self.position + self.size / 2.0
    }

    /// The tile containing the body's center.
    pub fn tile(&self, tile_size: u32) -> UVec2 {
        (self.center() / tile_size as f32).floor().max(Vec2::ZERO).as_uvec2()
    }

    /// Faces the dominant axis of (`dx`, `dy`); ties face vertically.
    pub fn face_towards(&mut self, dx: f32, dy: f32) {
        self.direction = Direction::towards(Vec2::new(dx, dy));
    }

    /// Faces the center of `other`.
    pub fn face(&mut self, other: &Body) {
        let delta = other.center() - self.center();
        self.face_towards(delta.x, delta.y);
    }

    /// The tile directly in front of the body, if it is on the map's positive quadrant.
    pub fn faced_tile(&self, tile_size: u32) -> Option<UVec2> {
        neighbour(self.tile(tile_size), self.direction)
    }
}

/// An entity that can fight.
pub trait Combatant {
    fn body(&self) -> &Body;

    fn combat(&self) -> &Combat;

    fn combat_mut(&mut self) -> &mut Combat;

    /// Whether `target` is within this entity's attack range, measured between centers.
    fn is_target_in_attack_range(&self, target: &dyn Combatant) -> bool {
        self.combat().is_target_in_attack_range(self.body(), target.body())
    }
}

/// Top-left pixel of `tile`.
pub fn tile_to_pixel(tile: UVec2, tile_size: u32) -> Vec2 {
    (tile * tile_size).as_vec2()
}

/// Moves `position` up to `speed` pixels toward `target`, never overshooting.
pub fn step_towards(position: Vec2, target: Vec2, speed: f32) -> Vec2 {
    let delta = target - position;
    let distance = delta.length();
    if distance <= speed || distance == 0.0 {
        target
    } else {
        position + delta / distance * speed
    }
}

/// Adds a direction to a tile, returning `None` when it leaves the positive quadrant.
pub fn neighbour(tile: UVec2, direction: Direction) -> Option<UVec2> {
    let next: IVec2 = tile.as_ivec2() + direction.as_ivec2();
    (next.x >= 0 && next.y >= 0).then(|| next.as_uvec2())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_towards_never_overshoots() {
        let start = Vec2::new(0.0, 0.0);
        let target = Vec2::new(10.0, 0.0);

        assert_eq!(step_towards(start, target, 4.0), Vec2::new(4.0, 0.0));
        assert_eq!(step_towards(Vec2::new(8.0, 0.0), target, 4.0), target);
        assert_eq!(step_towards(target, target, 4.0), target);
    }

    #[test]
    fn test_body_tile_uses_center() {
        let body = Body::at_tile(UVec2::new(3, 2), 32);
        assert_eq!(body.position, Vec2::new(96.0, 64.0));
        assert_eq!(body.center(), Vec2::new(112.0, 80.0));
        assert_eq!(body.tile(32), UVec2::new(3, 2));
    }

    #[test]
    fn test_faced_tile() {
        let mut body = Body::at_tile(UVec2::new(0, 4), 32);
        body.direction = Direction::Left;
        assert_eq!(body.faced_tile(32), None);

        body.direction = Direction::Up;
        assert_eq!(body.faced_tile(32), Some(UVec2::new(0, 3)));
    }
}
