//! Keyboard state and the optional on-screen controls.

use std::collections::HashSet;

use smallvec::SmallVec;
use strum_macros::{Display, EnumIter};
use tracing::debug;

use crate::entity::Direction;

#[cfg(feature = "sdl")]
pub mod bindings;

/// A logical key, independent of the backend that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Talk to whoever the player is facing (E).
    Interact,
    /// Swing at nearby enemies (Space).
    Attack,
    /// Open or close the inventory (I).
    Inventory,
    /// Open or close the menu (Escape).
    Menu,
    /// Confirm on the intro and game-over screens (Enter).
    Confirm,
}

impl Key {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// On-screen controls for touch devices.
///
/// Every method has a no-op default so platforms without touch input can use [`NoTouchControls`].
pub trait TouchControls {
    fn show(&mut self) {}

    fn hide(&mut self) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoTouchControls;

impl TouchControls for NoTouchControls {}

pub struct Input {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    /// Held directions, most recently pressed last.
    directions: SmallVec<[Direction; 4]>,
    controls: Box<dyn TouchControls>,
    controls_visible: bool,
}

impl Default for Input {
    fn default() -> Self {
        Self::new(Box::new(NoTouchControls))
    }
}

impl Input {
    pub fn new(controls: Box<dyn TouchControls>) -> Self {
        Self {
            held: HashSet::new(),
            pressed: HashSet::new(),
            directions: SmallVec::new(),
            controls,
            controls_visible: false,
        }
    }

    pub fn key_down(&mut self, key: Key) {
        if self.held.insert(key) {
            self.pressed.insert(key);
            if let Some(direction) = key.direction() {
                self.directions.push(direction);
            }
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
        if let Some(direction) = key.direction() {
            self.directions.retain(|d| *d != direction);
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Whether `key` went down during the current frame.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    /// The most recently pressed direction that is still held.
    pub fn held_direction(&self) -> Option<Direction> {
        self.directions.last().copied()
    }

    /// Forgets this frame's key presses. Held keys stay held.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }

    /// Releases every key, used when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
        self.pressed.clear();
        self.directions.clear();
    }

    pub fn show_controls(&mut self) {
        debug!("Showing touch controls");
        self.controls.show();
        self.controls_visible = true;
    }

    pub fn hide_controls(&mut self) {
        debug!("Hiding touch controls");
        self.controls.hide();
        self.controls_visible = false;
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }
}
