use glam::Vec2;
use tracing::{debug, trace};

use crate::animation::HealNumber;
use crate::clock::SharedClock;
use crate::combat::{animations, Combat, CombatOptions, EmitOnDefeat};
use crate::constants::mechanics::{PLAYER_ATTACK_DAMAGE, PLAYER_MAX_HEALTH, PLAYER_SPEED};
use crate::constants::{ENTITY_SIZE, TILE_SIZE};
use crate::entity::{neighbour, step_towards, tile_to_pixel, Body, Combatant};
use crate::error::RenderError;
use crate::events::{EventQueue, GameEvent};
use crate::input::{Input, Key};
use crate::map::{Map, MapId};
use crate::render::{Camera, Color, Rect, RenderContext};
use crate::ui::InventoryUi;

const PLAYER_COLOR: Color = Color::rgb(60, 200, 90);

/// A conversation the player started by interacting with an NPC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub messages: Vec<String>,
    /// Sent once the last message is dismissed.
    pub on_complete: Option<GameEvent>,
}

pub struct Player {
    body: Body,
    combat: Combat,
    /// Pixel position of the tile the player is walking to.
    target: Vec2,
    /// Set while a map transition runs; blocks movement and actions.
    pub is_transitioning: bool,
    map: MapId,
    gold: u32,
    pub inventory: InventoryUi,
    debug: bool,
}

impl Player {
    pub fn new(position: Vec2, map: MapId, events: &EventQueue, clock: &SharedClock) -> Self {
        let options = CombatOptions {
            max_health: PLAYER_MAX_HEALTH,
            attack_damage: PLAYER_ATTACK_DAMAGE,
            ..CombatOptions::default()
        };
        let combat = Combat::new(clock.clone(), options)
            .with_animation(animations::HEAL, HealNumber::create)
            .with_defeat_handler(EmitOnDefeat {
                events: events.clone(),
                event: GameEvent::PlayerDefeated,
            });

        Self {
            body: Body::new(position, Vec2::splat(ENTITY_SIZE as f32)),
            combat,
            target: position,
            is_transitioning: false,
            map,
            gold: 0,
            inventory: InventoryUi::default(),
            debug: false,
        }
    }

    /// Ticks combat, then handles movement, interaction and attacks.
    ///
    /// Returns the conversation to show when the player talked to someone.
    pub fn update(&mut self, input: &Input, map: &mut Map) -> Option<Interaction> {
        self.combat.update();

        if self.is_transitioning || !self.is_alive() {
            return None;
        }

        let tile_size = map.tile_size();
        if self.is_aligned() {
            if input.is_pressed(Key::Interact) {
                if let Some(interaction) = self.interact(map) {
                    return Some(interaction);
                }
            }

            if let Some(direction) = input.held_direction() {
                self.body.direction = direction;
                if let Some(next) = neighbour(self.body.tile(tile_size), direction) {
                    if map.can_enter(next) {
                        self.target = tile_to_pixel(next, tile_size);
                    }
                }
            }
        }

        if input.is_pressed(Key::Attack) {
            self.attack(map);
        }

        self.body.position = step_towards(self.body.position, self.target, PLAYER_SPEED);
        None
    }

    fn interact(&mut self, map: &mut Map) -> Option<Interaction> {
        let tile = self.body.faced_tile(map.tile_size())?;
        let npc = map.npc_at_mut(tile)?;
        let interaction = npc.talk(&self.body)?;
        debug!(npc = %npc.kind(), "Started conversation");
        Some(interaction)
    }

    /// Swings at every living hostile NPC in range, if the cooldown allows.
    ///
    /// Returns how many NPCs were hit.
    pub fn attack(&mut self, map: &mut Map) -> usize {
        if !self.combat.can_attack() {
            return 0;
        }
        self.combat.start_cooldown();

        let mut hits = 0;
        for npc in map.npcs_mut().iter_mut().filter(|npc| npc.is_hostile() && npc.is_alive()) {
            if self.is_target_in_attack_range(&*npc) {
                npc.combat_mut().take_damage(self.combat.attack_damage);
                hits += 1;
            }
        }
        trace!(hits, "Player attacked");
        hits
    }

    /// Moves the player to `position` immediately, cancelling any step in progress.
    pub fn place_at(&mut self, position: Vec2) {
        self.body.position = position;
        self.target = position;
    }

    pub fn is_aligned(&self) -> bool {
        self.body.position == self.target
    }

    pub fn is_alive(&self) -> bool {
        !self.combat.is_defeated()
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn set_map(&mut self, map: MapId) {
        self.map = map;
    }

    pub fn map(&self) -> MapId {
        self.map
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn reset_health(&mut self) {
        self.combat.reset_health();
    }

    pub fn heal(&mut self, amount: u32) {
        self.combat.heal(amount);
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    pub fn render(&self, ctx: &mut dyn RenderContext, camera: &Camera) -> Result<(), RenderError> {
        let screen = camera.to_screen(self.body.position);
        let size = self.body.size;

        if self.combat.should_render_entity() {
            ctx.fill_rect(Rect::new(screen.x + 4.0, screen.y + 4.0, size.x - 8.0, size.y - 8.0), PLAYER_COLOR)?;

            let facing = self.body.direction.as_vec2();
            let marker = screen + size / 2.0 + facing * (size / 2.0 - Vec2::splat(8.0)) - Vec2::splat(3.0);
            ctx.fill_rect(Rect::new(marker.x, marker.y, 6.0, 6.0), Color::WHITE)?;
        }

        if self.debug {
            let tile = self.body.position / TILE_SIZE as f32;
            ctx.fill_text(
                &format!("{:.1},{:.1} {}", tile.x, tile.y, self.body.direction),
                screen + Vec2::new(0.0, size.y + 2.0),
                Color::WHITE,
            )?;
        }

        self.combat.render(ctx, screen, size)
    }
}

impl Combatant for Player {
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
