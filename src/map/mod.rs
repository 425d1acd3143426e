//! Maps: a tile grid, the NPCs living on it and the zones leading to other maps.

use std::ops::{Index, IndexMut};
use std::time::Duration;

use glam::{UVec2, Vec2};
use smallvec::SmallVec;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

use crate::clock::SharedClock;
use crate::entity::{tile_to_pixel, Combatant, Npc, Player};
use crate::error::{MapError, RenderError};
use crate::events::EventQueue;
use crate::render::{Camera, Color, RenderContext};

pub mod layouts;
pub mod parser;
pub mod render;
pub mod zone;

pub use zone::TransitionZone;

use parser::MapTileParser;

/// Every map in the game. The serialized names are the ones used in map change requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum MapId {
    #[strum(serialize = "hometown")]
    Hometown,
    #[strum(serialize = "darkForest")]
    DarkForest,
    #[strum(serialize = "darkForestDepths")]
    DarkForestDepths,
    #[strum(serialize = "dragonLair")]
    DragonLair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
}

/// A rectangular grid of tiles, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    size: UVec2,
    tiles: Vec<Tile>,
}

impl TileGrid {
    pub fn new(size: UVec2, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), (size.x * size.y) as usize);
        Self { size, tiles }
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn get(&self, tile: UVec2) -> Option<Tile> {
        if tile.x >= self.size.x || tile.y >= self.size.y {
            return None;
        }
        self.tiles.get((tile.y * self.size.x + tile.x) as usize).copied()
    }

    /// Floor tiles inside the grid are walkable; walls and anything outside are not.
    pub fn is_walkable(&self, tile: UVec2) -> bool {
        matches!(self.get(tile), Some(Tile::Floor))
    }

    /// Iterates over every tile with its coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (UVec2, Tile)> + '_ {
        let width = self.size.x;
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, tile)| (UVec2::new(i as u32 % width, i as u32 / width), *tile))
    }
}

/// Colors a map is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapPalette {
    pub floor: Color,
    pub wall: Color,
    /// Small detail drawn on floor tiles.
    pub pattern: Color,
}

pub struct Map {
    pub id: MapId,
    pub name: &'static str,
    grid: TileGrid,
    tile_size: u32,
    initial_tile: UVec2,
    npcs: Vec<Npc>,
    zones: Vec<TransitionZone>,
    palette: MapPalette,
    debug: bool,
}

impl Map {
    /// Parses `layout` into a map without NPCs or zones.
    pub fn new(id: MapId, name: &'static str, layout: &[&str], tile_size: u32, palette: MapPalette) -> Result<Map, MapError> {
        let parsed = MapTileParser::parse_layout(layout).map_err(|e| MapError::InvalidLayout(format!("{name}: {e}")))?;

        Ok(Map {
            id,
            name,
            grid: parsed.grid,
            tile_size,
            initial_tile: parsed.player_start,
            npcs: Vec::new(),
            zones: Vec::new(),
            palette,
            debug: false,
        })
    }

    /// Adds an NPC, rejecting spawns inside walls.
    pub fn with_npc(mut self, npc: Npc) -> Result<Map, MapError> {
        let tile = npc.spawn_tile();
        if !self.grid.is_walkable(tile) {
            return Err(MapError::InvalidLayout(format!(
                "{}: {} spawns on a blocked tile ({}, {})",
                self.name,
                npc.kind(),
                tile.x,
                tile.y
            )));
        }
        self.npcs.push(npc);
        Ok(self)
    }

    pub fn with_zone(mut self, zone: TransitionZone) -> Map {
        self.zones.push(zone);
        self
    }

    /// Ticks every NPC against the player.
    pub fn update(&mut self, player: &mut Player, dt: Duration) {
        for i in 0..self.npcs.len() {
            let occupied: SmallVec<[UVec2; 16]> = self
                .npcs
                .iter()
                .enumerate()
                .filter(|(j, npc)| *j != i && npc.is_alive())
                .flat_map(|(_, npc)| npc.occupied_tiles(self.tile_size))
                .collect();

            self.npcs[i].update(player, &self.grid, &occupied, self.tile_size, dt);
        }
    }

    pub fn render(&self, ctx: &mut dyn RenderContext, camera: &Camera) -> Result<(), RenderError> {
        render::MapRenderer::render_tiles(ctx, camera, &self.grid, self.tile_size, &self.palette)?;
        if self.debug {
            render::MapRenderer::debug_render_zones(ctx, camera, &self.zones, self.tile_size)?;
        }

        for npc in self.npcs.iter() {
            npc.render(ctx, camera, self.debug)?;
        }
        Ok(())
    }

    /// Where the player appears when entering without an explicit destination.
    pub fn initial_player_position(&self) -> Vec2 {
        tile_to_pixel(self.initial_tile, self.tile_size)
    }

    pub fn initial_tile(&self) -> UVec2 {
        self.initial_tile
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Size of the whole map in pixels.
    pub fn pixel_size(&self) -> Vec2 {
        (self.grid.size() * self.tile_size).as_vec2()
    }

    pub fn set_debug(&mut self, enabled: bool) {
        if self.debug != enabled {
            debug!(map = %self.id, enabled = enabled, "Map debug toggled");
        }
        self.debug = enabled;
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn is_walkable(&self, tile: UVec2) -> bool {
        self.grid.is_walkable(tile)
    }

    /// Whether something can step onto `tile`: a floor tile no living NPC stands on or walks to.
    pub fn can_enter(&self, tile: UVec2) -> bool {
        self.grid.is_walkable(tile)
            && !self
                .npcs
                .iter()
                .any(|npc| npc.is_alive() && npc.occupied_tiles(self.tile_size).contains(&tile))
    }

    pub fn zone_at(&self, tile: UVec2) -> Option<&TransitionZone> {
        self.zones.iter().find(|zone| zone.contains(tile))
    }

    pub fn zones(&self) -> &[TransitionZone] {
        &self.zones
    }

    /// The living NPC standing on `tile`.
    pub fn npc_at_mut(&mut self, tile: UVec2) -> Option<&mut Npc> {
        let tile_size = self.tile_size;
        self.npcs
            .iter_mut()
            .find(|npc| npc.is_alive() && npc.body().tile(tile_size) == tile)
    }

    pub fn npcs(&self) -> &[Npc] {
        &self.npcs
    }

    pub fn npcs_mut(&mut self) -> &mut [Npc] {
        &mut self.npcs
    }
}

/// All maps of one play session.
pub struct MapRegistry {
    maps: [Map; 4],
}

impl MapRegistry {
    /// Builds every map from scratch, with fresh NPCs.
    pub fn build(events: &EventQueue, clock: &SharedClock) -> Result<MapRegistry, MapError> {
        Ok(MapRegistry {
            maps: [
                layouts::hometown(events, clock)?,
                layouts::dark_forest(events, clock)?,
                layouts::dark_forest_depths(events, clock)?,
                layouts::dragon_lair(events, clock)?,
            ],
        })
    }

    pub fn get(&self, id: MapId) -> &Map {
        &self.maps[id as usize]
    }

    pub fn get_mut(&mut self, id: MapId) -> &mut Map {
        &mut self.maps[id as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Map> {
        self.maps.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Map> {
        self.maps.iter_mut()
    }
}

impl Index<MapId> for MapRegistry {
    type Output = Map;

    fn index(&self, id: MapId) -> &Map {
        self.get(id)
    }
}

impl IndexMut<MapId> for MapRegistry {
    fn index_mut(&mut self, id: MapId) -> &mut Map {
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_map_id_names() {
        assert_eq!(MapId::DarkForestDepths.to_string(), "darkForestDepths");
        assert_eq!(MapId::from_str("dragonLair"), Ok(MapId::DragonLair));
        assert!(MapId::from_str("moon").is_err());
    }

    #[test]
    fn test_map_id_order_matches_registry_slots() {
        for (i, id) in MapId::iter().enumerate() {
            assert_eq!(id as usize, i);
        }
    }

    #[test]
    fn test_grid_bounds() {
        let grid = TileGrid::new(UVec2::new(2, 1), vec![Tile::Floor, Tile::Wall]);
        assert!(grid.is_walkable(UVec2::new(0, 0)));
        assert!(!grid.is_walkable(UVec2::new(1, 0)));
        assert!(!grid.is_walkable(UVec2::new(2, 0)));
        assert_eq!(grid.iter().nth(1), Some((UVec2::new(1, 0), Tile::Wall)));
    }
}
