//! The four maps of the game: layouts, inhabitants and the zones connecting them.
//!
//! Layout legend: `#` wall, `.` floor, `P` player start.

use glam::UVec2;

use crate::clock::SharedClock;
use crate::constants::TILE_SIZE;
use crate::entity::{Npc, NpcKind};
use crate::error::MapError;
use crate::events::EventQueue;
use crate::map::{Map, MapId, MapPalette, TransitionZone};
use crate::render::Color;

const HOMETOWN: [&str; 8] = [
    "####..####",
    "#........#",
    "#.#....#.#",
    "#...P....#",
    "#........#",
    "#.#....#.#",
    "#........#",
    "##########",
];

const DARK_FOREST: [&str; 12] = [
    "##..############",
    "#..............#",
    "#.P..###.......#",
    "#....#......##.#",
    "#....#.......#.#",
    "#...............",
    "#...............",
    "#...##.....#...#",
    "#....#.....#...#",
    "#..........###.#",
    "#..............#",
    "################",
];

const DARK_FOREST_DEPTHS: [&str; 12] = [
    "##############",
    "#............#",
    "#..##....##..#",
    "#..#......#..#",
    "#............#",
    "..P..........#",
    ".............#",
    "#...#....#...#",
    "#...#....#...#",
    "#............#",
    "#............#",
    "######..######",
];

const DRAGON_LAIR: [&str; 10] = [
    "#####..#####",
    "#....P.....#",
    "#..........#",
    "#.##....##.#",
    "#..........#",
    "#..........#",
    "#.##....##.#",
    "#..........#",
    "#..........#",
    "############",
];

fn npc(kind: NpcKind, x: u32, y: u32, events: &EventQueue, clock: &SharedClock) -> Npc {
    Npc::new(kind, UVec2::new(x, y), TILE_SIZE, events, clock)
}

pub fn hometown(events: &EventQueue, clock: &SharedClock) -> Result<Map, MapError> {
    let palette = MapPalette {
        floor: Color::rgb(150, 190, 120),
        wall: Color::rgb(90, 80, 70),
        pattern: Color::rgb(240, 240, 220),
    };

    Ok(Map::new(MapId::Hometown, "Home Town", &HOMETOWN, TILE_SIZE, palette)?
        .with_npc(npc(NpcKind::Guide, 2, 4, events, clock))?
        .with_npc(npc(NpcKind::Merchant, 8, 5, events, clock))?
        .with_zone(TransitionZone {
            name: "forest",
            xs: 4..=5,
            ys: 0..=0,
            destination: MapId::DarkForest,
            arrival: Some(UVec2::new(2, 2)),
        }))
}

pub fn dark_forest(events: &EventQueue, clock: &SharedClock) -> Result<Map, MapError> {
    let palette = MapPalette {
        floor: Color::rgb(40, 80, 45),
        wall: Color::rgb(20, 40, 25),
        pattern: Color::rgb(70, 110, 60),
    };

    Ok(Map::new(MapId::DarkForest, "Dark Forest", &DARK_FOREST, TILE_SIZE, palette)?
        .with_npc(npc(NpcKind::Wolf, 9, 4, events, clock))?
        .with_npc(npc(NpcKind::Wolf, 12, 8, events, clock))?
        .with_npc(npc(NpcKind::Spider, 7, 9, events, clock))?
        .with_zone(TransitionZone {
            name: "hometown",
            xs: 2..=3,
            ys: 0..=0,
            destination: MapId::Hometown,
            arrival: Some(UVec2::new(4, 1)),
        })
        .with_zone(TransitionZone {
            name: "depths",
            xs: 15..=15,
            ys: 5..=6,
            destination: MapId::DarkForestDepths,
            arrival: Some(UVec2::new(1, 5)),
        }))
}

pub fn dark_forest_depths(events: &EventQueue, clock: &SharedClock) -> Result<Map, MapError> {
    let palette = MapPalette {
        floor: Color::rgb(30, 50, 40),
        wall: Color::rgb(10, 20, 15),
        pattern: Color::rgb(60, 60, 90),
    };

    Ok(Map::new(
        MapId::DarkForestDepths,
        "Depths of the Dark Forest",
        &DARK_FOREST_DEPTHS,
        TILE_SIZE,
        palette,
    )?
    .with_npc(npc(NpcKind::Spider, 6, 4, events, clock))?
    .with_npc(npc(NpcKind::Spider, 11, 9, events, clock))?
    .with_npc(npc(NpcKind::Wolf, 9, 5, events, clock))?
    .with_zone(TransitionZone {
        name: "forest",
        xs: 0..=0,
        ys: 5..=6,
        destination: MapId::DarkForest,
        arrival: Some(UVec2::new(14, 5)),
    })
    .with_zone(TransitionZone {
        name: "lair",
        xs: 6..=7,
        ys: 11..=11,
        destination: MapId::DragonLair,
        arrival: None,
    }))
}

pub fn dragon_lair(events: &EventQueue, clock: &SharedClock) -> Result<Map, MapError> {
    let palette = MapPalette {
        floor: Color::rgb(80, 40, 30),
        wall: Color::rgb(40, 15, 10),
        pattern: Color::rgb(200, 90, 30),
    };

    Ok(Map::new(MapId::DragonLair, "Dragon's Lair", &DRAGON_LAIR, TILE_SIZE, palette)?
        .with_npc(npc(NpcKind::Dragon, 6, 6, events, clock))?
        .with_zone(TransitionZone {
            name: "depths",
            xs: 5..=6,
            ys: 0..=0,
            destination: MapId::DarkForestDepths,
            arrival: Some(UVec2::new(6, 10)),
        }))
}
