//! Dragon's Lair: a small tile-based action RPG.
//!
//! The game logic is independent of any windowing backend and draws through
//! [`render::RenderContext`]. The `sdl` feature adds the desktop/browser shell in [`app`].

pub mod animation;
#[cfg(feature = "sdl")]
pub mod app;
pub mod clock;
pub mod combat;
pub mod constants;
pub mod entity;
pub mod error;
pub mod events;
pub mod formatter;
pub mod game;
pub mod input;
pub mod map;
pub mod platform;
pub mod render;
pub mod ui;
