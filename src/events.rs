use std::cell::RefCell;
use std::rc::Rc;

use bevy_ecs::event::Events;
use bevy_ecs::prelude::*;
use glam::UVec2;

use crate::map::MapId;

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// The player's health reached zero.
    PlayerDefeated,
    /// A hostile NPC was defeated and drops its gold.
    NpcDefeated { name: &'static str, gold: u32 },
    /// Restore some of the player's health (merchant dialog, items).
    HealPlayer(u32),
    /// Request a map change, optionally to a specific destination tile.
    ChangeMap { map: MapId, destination: Option<UVec2> },
}

/// Shared handle to the game's event buffer.
///
/// Entities push into it from deep inside their update (defeat handlers, dialog
/// completion) and the controller drains it once the update step is over.
#[derive(Clone, Default)]
pub struct EventQueue {
    inner: Rc<RefCell<Events<GameEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&self, event: GameEvent) {
        self.inner.borrow_mut().send(event);
    }

    /// Removes and returns every pending event, oldest first.
    pub fn drain(&self) -> Vec<GameEvent> {
        self.inner.borrow_mut().drain().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_buffer() {
        let queue = EventQueue::new();
        let handle = queue.clone();

        handle.send(GameEvent::PlayerDefeated);
        handle.send(GameEvent::HealPlayer(5));
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained, vec![GameEvent::PlayerDefeated, GameEvent::HealPlayer(5)]);
        assert!(handle.is_empty());
    }
}
