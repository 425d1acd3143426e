//! Non-player characters: friendly townsfolk and hostile creatures.

use std::time::Duration;

use glam::{UVec2, Vec2};
use pathfinding::prelude::astar;
use smallvec::SmallVec;
use strum_macros::{Display, EnumIter, IntoStaticStr};
use tracing::{debug, info};

use crate::clock::SharedClock;
use crate::combat::{Combat, CombatOptions, EmitOnDefeat};
use crate::constants::mechanics::{AGGRO_RADIUS_TILES, MERCHANT_HEAL, NPC_SPEED};
use crate::entity::direction::DIRECTIONS;
use crate::entity::player::{Interaction, Player};
use crate::entity::{neighbour, step_towards, tile_to_pixel, Body, Combatant};
use crate::error::RenderError;
use crate::events::{EventQueue, GameEvent};
use crate::map::TileGrid;
use crate::render::{Camera, Color, Rect, RenderContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum NpcKind {
    Guide,
    Merchant,
    Wolf,
    Spider,
    Dragon,
}

impl NpcKind {
    pub fn is_hostile(self) -> bool {
        matches!(self, NpcKind::Wolf | NpcKind::Spider | NpcKind::Dragon)
    }

    /// Gold dropped when defeated.
    pub fn gold(self) -> u32 {
        match self {
            NpcKind::Wolf => 5,
            NpcKind::Spider => 3,
            NpcKind::Dragon => 100,
            NpcKind::Guide | NpcKind::Merchant => 0,
        }
    }

    pub fn combat_options(self) -> CombatOptions {
        let defaults = CombatOptions::default();
        match self {
            NpcKind::Guide | NpcKind::Merchant => CombatOptions {
                show_health_bar: false,
                ..defaults
            },
            NpcKind::Wolf => CombatOptions {
                max_health: 30,
                attack_damage: 5,
                attack_cooldown: Duration::from_millis(1200),
                ..defaults
            },
            NpcKind::Spider => CombatOptions {
                max_health: 20,
                attack_damage: 4,
                attack_cooldown: Duration::from_millis(800),
                ..defaults
            },
            NpcKind::Dragon => CombatOptions {
                max_health: 300,
                attack_damage: 20,
                attack_range: 56.0,
                attack_cooldown: Duration::from_millis(2000),
                health_bar_width: 48.0,
                ..defaults
            },
        }
    }

    fn color(self) -> Color {
        match self {
            NpcKind::Guide => Color::rgb(90, 140, 230),
            NpcKind::Merchant => Color::rgb(220, 170, 60),
            NpcKind::Wolf => Color::rgb(130, 130, 140),
            NpcKind::Spider => Color::rgb(70, 40, 90),
            NpcKind::Dragon => Color::rgb(190, 40, 30),
        }
    }

    fn dialog(self) -> Option<Interaction> {
        let lines: &[&str] = match self {
            NpcKind::Guide => &[
                "Welcome to Home Town, traveler.",
                "The dark forest lies beyond the northern gate.",
                "Press Space to fight. Wolves and spiders bite back!",
                "Rumor has it a dragon sleeps deep below the forest.",
            ],
            NpcKind::Merchant => &["Ah, a customer! You look exhausted.", "Here, take this potion. On the house."],
            _ => return None,
        };

        Some(Interaction {
            messages: lines.iter().map(|line| line.to_string()).collect(),
            on_complete: (self == NpcKind::Merchant).then_some(GameEvent::HealPlayer(MERCHANT_HEAL)),
        })
    }
}

pub struct Npc {
    kind: NpcKind,
    body: Body,
    combat: Combat,
    /// Pixel position the NPC is currently walking to.
    target: Vec2,
    spawn: UVec2,
    /// Whether the NPC is currently chasing the player.
    aggro: bool,
}

impl Npc {
    pub fn new(kind: NpcKind, tile: UVec2, tile_size: u32, events: &EventQueue, clock: &SharedClock) -> Self {
        let mut combat = Combat::new(clock.clone(), kind.combat_options());
        if kind.is_hostile() {
            combat = combat.with_defeat_handler(EmitOnDefeat {
                events: events.clone(),
                event: GameEvent::NpcDefeated {
                    name: kind.into(),
                    gold: kind.gold(),
                },
            });
        }

        let body = Body::at_tile(tile, tile_size);
        Self {
            kind,
            target: body.position,
            body,
            combat,
            spawn: tile,
            aggro: false,
        }
    }

    pub fn kind(&self) -> NpcKind {
        self.kind
    }

    pub fn spawn_tile(&self) -> UVec2 {
        self.spawn
    }

    pub fn is_hostile(&self) -> bool {
        self.kind.is_hostile()
    }

    pub fn is_alive(&self) -> bool {
        !self.combat.is_defeated()
    }

    pub fn is_aggro(&self) -> bool {
        self.aggro
    }

    /// Tiles this NPC blocks: where it stands and where it is walking to.
    pub fn occupied_tiles(&self, tile_size: u32) -> [UVec2; 2] {
        let target = Body {
            position: self.target,
            ..self.body
        };
        [self.body.tile(tile_size), target.tile(tile_size)]
    }

    /// Turns toward the player and returns what this NPC has to say, if anything.
    pub fn talk(&mut self, player: &Body) -> Option<Interaction> {
        if !self.is_alive() {
            return None;
        }
        let dialog = self.kind.dialog()?;
        self.body.face(player);
        Some(dialog)
    }

    /// Ticks combat and, for hostile NPCs, chases and attacks the player.
    ///
    /// `occupied` lists the tiles blocked by other NPCs.
    pub fn update(&mut self, player: &mut Player, grid: &TileGrid, occupied: &[UVec2], tile_size: u32, dt: Duration) {
        self.combat.update();

        if !self.is_alive() || !self.is_hostile() {
            return;
        }

        let own_tile = self.body.tile(tile_size);
        let player_tile = player.body().tile(tile_size);
        let offset = (own_tile.as_ivec2() - player_tile.as_ivec2()).abs();
        let in_reach = offset.max_element() as u32 <= AGGRO_RADIUS_TILES;

        if !in_reach || player.is_transitioning || !player.is_alive() {
            if self.aggro {
                debug!(npc = %self.kind, "Lost interest in player");
                self.aggro = false;
            }
            self.walk(dt);
            return;
        }

        if !self.aggro {
            debug!(npc = %self.kind, "Noticed player");
            self.aggro = true;
        }

        self.body.face(player.body());

        if self.is_target_in_attack_range(&*player) {
            if self.combat.can_attack() {
                let defeated = self.combat.strike(player.combat_mut());
                if defeated {
                    info!(npc = %self.kind, "Player defeated");
                }
            }
        } else if self.body.position == self.target {
            let player_target = Body {
                position: player.target(),
                ..*player.body()
            }
            .tile(tile_size);

            if let Some(next) = self.next_step(grid, occupied, own_tile, player_tile) {
                if next != player_target {
                    self.target = tile_to_pixel(next, tile_size);
                }
            }
        }

        self.walk(dt);
    }

    /// First tile of the shortest walkable path toward `goal`, excluding the goal itself.
    fn next_step(&self, grid: &TileGrid, occupied: &[UVec2], from: UVec2, goal: UVec2) -> Option<UVec2> {
        let (path, _cost) = astar(
            &from,
            |&tile| {
                DIRECTIONS
                    .iter()
                    .filter_map(|direction| neighbour(tile, *direction))
                    .filter(|next| grid.is_walkable(*next) && (*next == goal || !occupied.contains(next)))
                    .map(|next| (next, 1u32))
                    .collect::<SmallVec<[_; 4]>>()
            },
            |tile| tile.x.abs_diff(goal.x) + tile.y.abs_diff(goal.y),
            |tile| *tile == goal,
        )?;

        path.get(1).copied().filter(|next| *next != goal)
    }

    fn walk(&mut self, dt: Duration) {
        let delta = self.target - self.body.position;
        if delta != Vec2::ZERO {
            self.body.face_towards(delta.x, delta.y);
        }
        self.body.position = step_towards(self.body.position, self.target, NPC_SPEED * dt.as_secs_f32());
    }

    pub fn render(&self, ctx: &mut dyn RenderContext, camera: &Camera, debug: bool) -> Result<(), RenderError> {
        if !self.is_alive() {
            return Ok(());
        }

        let screen = camera.to_screen(self.body.position);
        let size = self.body.size;

        if self.combat.should_render_entity() {
            ctx.fill_rect(Rect::new(screen.x + 2.0, screen.y + 2.0, size.x - 4.0, size.y - 4.0), self.kind.color())?;

            // Small marker on the side the NPC is facing
            let facing = self.body.direction.as_vec2();
            let marker = screen + size / 2.0 + facing * (size / 2.0 - Vec2::splat(6.0)) - Vec2::splat(2.0);
            ctx.fill_rect(Rect::new(marker.x, marker.y, 4.0, 4.0), Color::WHITE)?;
        }

        if debug {
            let label = if self.aggro {
                format!("{} !", self.kind)
            } else {
                self.kind.to_string()
            };
            ctx.fill_text(&label, screen + Vec2::new(0.0, size.y + 2.0), Color::WHITE)?;
        }

        self.combat.render(ctx, screen, size)
    }
}

impl Combatant for Npc {
    fn body(&self) -> &Body {
        &self.body
    }

    fn combat(&self) -> &Combat {
        &self.combat
    }

    fn combat_mut(&mut self) -> &mut Combat {
        &mut self.combat
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{ManualClock, SharedClock};
    use std::rc::Rc;

    fn clock() -> SharedClock {
        Rc::new(ManualClock::default())
    }

    #[test]
    fn test_only_merchant_heals() {
        let merchant = NpcKind::Merchant.dialog().unwrap();
        assert_eq!(merchant.on_complete, Some(GameEvent::HealPlayer(MERCHANT_HEAL)));

        let guide = NpcKind::Guide.dialog().unwrap();
        assert_eq!(guide.on_complete, None);

        assert!(NpcKind::Wolf.dialog().is_none());
    }

    #[test]
    fn test_defeat_emits_gold_once() {
        let events = EventQueue::new();
        let mut wolf = Npc::new(NpcKind::Wolf, UVec2::new(1, 1), 32, &events, &clock());

        assert!(wolf.combat_mut().take_damage(1000));
        assert!(wolf.combat_mut().take_damage(1));
        assert!(!wolf.is_alive());
        assert_eq!(
            events.drain(),
            vec![GameEvent::NpcDefeated {
                name: "Wolf",
                gold: 5
            }]
        );
    }

    #[test]
    fn test_occupied_tiles_include_walk_target() {
        let events = EventQueue::new();
        let mut spider = Npc::new(NpcKind::Spider, UVec2::new(2, 2), 32, &events, &clock());
        spider.target = tile_to_pixel(UVec2::new(3, 2), 32);
        assert_eq!(spider.occupied_tiles(32), [UVec2::new(2, 2), UVec2::new(3, 2)]);
    }
}
