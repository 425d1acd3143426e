//! Map rendering functionality.

use glam::UVec2;

use crate::entity::tile_to_pixel;
use crate::error::RenderError;
use crate::map::{MapPalette, Tile, TileGrid, TransitionZone};
use crate::render::{Camera, Color, Rect, RenderContext};

const GRID_COLOR: Color = Color::rgba(255, 255, 255, 40);
const ZONE_COLOR: Color = Color::rgba(80, 160, 255, 90);

/// Handles rendering operations for the map.
pub struct MapRenderer;

impl MapRenderer {
    /// Draws every tile that intersects the camera viewport.
    pub fn render_tiles(
        ctx: &mut dyn RenderContext,
        camera: &Camera,
        grid: &TileGrid,
        tile_size: u32,
        palette: &MapPalette,
    ) -> Result<(), RenderError> {
        let size = tile_size as f32;
        for (tile, kind) in grid.iter() {
            let screen = camera.to_screen(tile_to_pixel(tile, tile_size));
            if screen.x + size < 0.0 || screen.y + size < 0.0 || screen.x > camera.viewport.x || screen.y > camera.viewport.y {
                continue;
            }

            match kind {
                Tile::Wall => ctx.fill_rect(Rect::new(screen.x, screen.y, size, size), palette.wall)?,
                Tile::Floor => {
                    ctx.fill_rect(Rect::new(screen.x, screen.y, size, size), palette.floor)?;
                    // Checkerboard speckles so movement is visible on large open areas
                    if (tile.x + tile.y) % 2 == 0 {
                        ctx.fill_rect(
                            Rect::new(screen.x + size / 4.0, screen.y + size / 4.0, 2.0, 2.0),
                            palette.pattern,
                        )?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Outlines each tile and highlights transition zones.
    pub fn debug_render_zones(
        ctx: &mut dyn RenderContext,
        camera: &Camera,
        zones: &[TransitionZone],
        tile_size: u32,
    ) -> Result<(), RenderError> {
        let size = tile_size as f32;
        for zone in zones {
            for x in zone.xs.clone() {
                for y in zone.ys.clone() {
                    let screen = camera.to_screen(tile_to_pixel(UVec2::new(x, y), tile_size));
                    ctx.fill_rect(Rect::new(screen.x, screen.y, size, size), ZONE_COLOR)?;
                    ctx.stroke_rect(Rect::new(screen.x, screen.y, size, size), GRID_COLOR)?;
                }
            }

            let label = camera.to_screen(tile_to_pixel(UVec2::new(*zone.xs.start(), *zone.ys.start()), tile_size));
            ctx.fill_text(zone.name, label, Color::WHITE)?;
        }
        Ok(())
    }
}
