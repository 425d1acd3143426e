use std::rc::Rc;
use std::time::Duration;

use dragonlair::clock::ManualClock;
use dragonlair::constants::mechanics::MERCHANT_HEAL;
use dragonlair::entity::{tile_to_pixel, Combatant, Direction, Npc, NpcKind, Player};
use dragonlair::events::{EventQueue, GameEvent};
use dragonlair::input::{Input, Key};
use dragonlair::map::{Map, MapId, MapPalette};
use dragonlair::render::Color;
use glam::UVec2;
use speculoos::prelude::*;

mod common;

const TILE: u32 = 32;
const TICK: Duration = Duration::from_millis(100);

const CORRIDOR: [&str; 3] = ["############", "#P.........#", "############"];

const ROOM: [&str; 5] = ["#####", "#P..#", "#...#", "#...#", "#####"];

const PALETTE: MapPalette = MapPalette {
    floor: Color::WHITE,
    wall: Color::BLACK,
    pattern: Color::WHITE,
};

struct World {
    clock: Rc<ManualClock>,
    events: EventQueue,
    map: Map,
    player: Player,
}

impl World {
    fn new(layout: &[&str], npcs: &[(NpcKind, u32, u32)]) -> Self {
        let clock = common::manual_clock();
        let events = common::events();
        let shared = common::shared(&clock);

        let mut map = Map::new(MapId::Hometown, "Test", layout, TILE, PALETTE).unwrap();
        for &(kind, x, y) in npcs {
            map = map
                .with_npc(Npc::new(kind, UVec2::new(x, y), TILE, &events, &shared))
                .unwrap();
        }
        let player = Player::new(map.initial_player_position(), map.id, &events, &shared);

        Self {
            clock,
            events,
            map,
            player,
        }
    }

    /// Advances time by one tick and updates NPCs, then the player.
    fn tick(&mut self, input: &Input) {
        self.clock.advance(TICK);
        self.map.update(&mut self.player, TICK);
        self.player.update(input, &mut self.map);
    }

    fn npc(&self) -> &Npc {
        &self.map.npcs()[0]
    }
}

fn pressing(key: Key) -> Input {
    let mut input = Input::default();
    input.key_down(key);
    input
}

mod player_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_steps_one_tile_at_a_time() {
        let mut world = World::new(&CORRIDOR, &[]);
        let input = pressing(Key::Right);

        world.tick(&input);
        assert_eq!(world.player.target(), tile_to_pixel(UVec2::new(2, 1), TILE));
        assert_that(&world.player.is_aligned()).is_false();

        for _ in 0..7 {
            world.tick(&Input::default());
        }
        assert_that(&world.player.is_aligned()).is_true();
        assert_eq!(world.player.body().tile(TILE), UVec2::new(2, 1));
    }

    #[test]
    fn test_walls_block_movement_but_turn_the_player() {
        let mut world = World::new(&CORRIDOR, &[]);

        world.tick(&pressing(Key::Up));
        assert_that(&world.player.is_aligned()).is_true();
        assert_eq!(world.player.body().direction, Direction::Up);
        assert_eq!(world.player.position(), tile_to_pixel(UVec2::new(1, 1), TILE));
    }

    #[test]
    fn test_npcs_block_movement() {
        let mut world = World::new(&CORRIDOR, &[(NpcKind::Guide, 2, 1)]);

        world.tick(&pressing(Key::Right));
        assert_that(&world.player.is_aligned()).is_true();
    }

    #[test]
    fn test_transitioning_player_ignores_input() {
        let mut world = World::new(&CORRIDOR, &[]);
        world.player.is_transitioning = true;

        world.tick(&pressing(Key::Right));
        assert_eq!(world.player.target(), world.player.position());
    }

    #[test]
    fn test_interacting_with_merchant_offers_a_heal() {
        let mut world = World::new(&ROOM, &[(NpcKind::Merchant, 1, 2)]);

        world.clock.advance(TICK);
        let interaction = world.player.update(&pressing(Key::Interact), &mut world.map);

        let interaction = interaction.expect("merchant should talk");
        assert_that(&interaction.messages).is_not_empty();
        assert_eq!(interaction.on_complete, Some(GameEvent::HealPlayer(MERCHANT_HEAL)));
        // The merchant turns to face the player
        assert_eq!(world.npc().body().direction, Direction::Up);
    }

    #[test]
    fn test_interacting_with_nothing_returns_none() {
        let mut world = World::new(&ROOM, &[(NpcKind::Merchant, 3, 3)]);
        assert_that(&world.player.update(&pressing(Key::Interact), &mut world.map)).is_none();
    }

    #[test]
    fn test_attack_hits_hostile_npcs_in_range_and_respects_cooldown() {
        let mut world = World::new(&ROOM, &[(NpcKind::Spider, 2, 1)]);

        assert_eq!(world.player.attack(&mut world.map), 1);
        let health = world.npc().combat().current_health();
        assert_eq!(health, world.npc().combat().max_health() - world.player.combat().attack_damage);

        assert_eq!(world.player.attack(&mut world.map), 0);
        assert_eq!(world.npc().combat().current_health(), health);

        world.clock.advance(world.player.combat().attack_cooldown);
        assert_eq!(world.player.attack(&mut world.map), 1);
    }

    #[test]
    fn test_attack_ignores_friendly_npcs() {
        let mut world = World::new(&ROOM, &[(NpcKind::Guide, 2, 1)]);

        assert_eq!(world.player.attack(&mut world.map), 0);
        assert_eq!(world.npc().combat().current_health(), world.npc().combat().max_health());
    }

    #[test]
    fn test_defeating_an_npc_reports_its_gold() {
        let mut world = World::new(&ROOM, &[(NpcKind::Spider, 2, 1)]);

        while world.npc().is_alive() {
            world.clock.advance(world.player.combat().attack_cooldown);
            world.player.attack(&mut world.map);
        }

        assert_eq!(
            world.events.drain(),
            vec![GameEvent::NpcDefeated {
                name: "Spider",
                gold: NpcKind::Spider.gold()
            }]
        );
        assert_that(&world.map.can_enter(UVec2::new(2, 1))).is_true();
    }
}

mod npc_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_hostile_npc_chases_and_strikes() {
        let mut world = World::new(&CORRIDOR, &[(NpcKind::Wolf, 5, 1)]);
        let idle = Input::default();

        world.tick(&idle);
        assert_that(&world.npc().is_aggro()).is_true();

        for _ in 0..30 {
            world.tick(&idle);
        }

        assert_that(&world.player.combat().current_health()).is_less_than(world.player.combat().max_health());
        assert_eq!(world.npc().body().tile(TILE), UVec2::new(2, 1));
        assert_eq!(world.npc().body().direction, Direction::Left);
    }

    #[test]
    fn test_distant_npc_stays_put() {
        let mut world = World::new(&CORRIDOR, &[(NpcKind::Wolf, 8, 1)]);
        let start = world.npc().body().position;

        for _ in 0..10 {
            world.tick(&Input::default());
        }

        assert_that(&world.npc().is_aggro()).is_false();
        assert_eq!(world.npc().body().position, start);
    }

    #[test]
    fn test_npcs_leave_transitioning_player_alone() {
        let mut world = World::new(&CORRIDOR, &[(NpcKind::Wolf, 2, 1)]);
        world.player.is_transitioning = true;

        for _ in 0..20 {
            world.tick(&Input::default());
        }
        assert_eq!(world.player.combat().current_health(), world.player.combat().max_health());
    }

    #[test]
    fn test_friendly_npcs_talk_and_hostile_ones_do_not() {
        let clock = common::manual_clock();
        let events = common::events();
        let shared = common::shared(&clock);
        let player = Player::new(tile_to_pixel(UVec2::new(1, 1), TILE), MapId::Hometown, &events, &shared);

        let mut guide = Npc::new(NpcKind::Guide, UVec2::new(2, 1), TILE, &events, &shared);
        let mut wolf = Npc::new(NpcKind::Wolf, UVec2::new(2, 1), TILE, &events, &shared);

        let interaction = guide.talk(player.body());
        assert_that(&interaction.map(|i| i.on_complete)).is_equal_to(Some(None));
        assert_eq!(guide.body().direction, Direction::Left);
        assert_that(&wolf.talk(player.body())).is_none();
    }

    #[test]
    fn test_npc_combat_stats_follow_their_kind() {
        let dragon = NpcKind::Dragon.combat_options();
        let spider = NpcKind::Spider.combat_options();

        assert_that(&dragon.max_health).is_greater_than(spider.max_health);
        assert_that(&NpcKind::Merchant.combat_options().show_health_bar).is_false();
        assert_that(&NpcKind::Guide.is_hostile()).is_false();
        assert_that(&NpcKind::Wolf.is_hostile()).is_true();
    }
}
