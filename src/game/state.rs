use tracing::info;

use crate::clock::SharedClock;
use crate::entity::{tile_to_pixel, Player};
use crate::error::MapError;
use crate::events::EventQueue;
use crate::map::{Map, MapId, MapRegistry};
use crate::ui::MapChange;

/// The `GameState` struct holds the world: every map, which one is active and the player.
///
/// Overlays, input and timing live on [`crate::game::Game`]; everything here is what a
/// restart rebuilds or resets.
pub struct GameState {
    pub maps: MapRegistry,
    pub current: MapId,
    pub player: Player,
    pub debug: bool,
}

impl GameState {
    /// Builds every map and places the player at the home town's initial position.
    pub fn new(events: &EventQueue, clock: &SharedClock) -> Result<Self, MapError> {
        let maps = MapRegistry::build(events, clock)?;
        let current = MapId::Hometown;
        let player = Player::new(maps[current].initial_player_position(), current, events, clock);

        Ok(Self {
            maps,
            current,
            player,
            debug: false,
        })
    }

    pub fn current_map(&self) -> &Map {
        &self.maps[self.current]
    }

    pub fn current_map_mut(&mut self) -> &mut Map {
        &mut self.maps[self.current]
    }

    /// Makes `change.map` current and moves the player onto it.
    ///
    /// The destination tile is converted using the destination map's tile size; without one the
    /// map's initial position is used.
    pub fn apply_map_change(&mut self, change: MapChange) {
        self.current = change.map;
        let map = &self.maps[change.map];
        let position = match change.destination {
            Some(tile) => tile_to_pixel(tile, map.tile_size()),
            None => map.initial_player_position(),
        };

        self.player.place_at(position);
        self.player.set_map(change.map);
        info!(map = %change.map, x = position.x, y = position.y, "Map changed");
    }

    /// Discards every map and starts over in the home town with full health.
    pub fn reset(&mut self, events: &EventQueue, clock: &SharedClock) -> Result<(), MapError> {
        self.maps = MapRegistry::build(events, clock)?;
        self.current = MapId::Hometown;

        self.player.reset_health();
        self.player.is_transitioning = false;
        self.player.place_at(self.maps[self.current].initial_player_position());
        self.player.set_map(self.current);
        self.player.inventory.hide();
        self.sync_debug();
        Ok(())
    }

    /// Pushes the debug flag to the player and the current map.
    pub fn sync_debug(&mut self) {
        let debug = self.debug;
        self.player.set_debug(debug);
        self.current_map_mut().set_debug(debug);
    }
}
