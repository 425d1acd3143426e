use std::collections::HashMap;

use sdl2::keyboard::Keycode;

use crate::input::Key;

/// Maps SDL keycodes to logical keys.
#[derive(Debug, Clone)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, Key>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // Movement
        key_bindings.insert(Keycode::Up, Key::Up);
        key_bindings.insert(Keycode::W, Key::Up);
        key_bindings.insert(Keycode::Down, Key::Down);
        key_bindings.insert(Keycode::S, Key::Down);
        key_bindings.insert(Keycode::Left, Key::Left);
        key_bindings.insert(Keycode::A, Key::Left);
        key_bindings.insert(Keycode::Right, Key::Right);
        key_bindings.insert(Keycode::D, Key::Right);

        // Actions
        key_bindings.insert(Keycode::E, Key::Interact);
        key_bindings.insert(Keycode::Space, Key::Attack);
        key_bindings.insert(Keycode::I, Key::Inventory);
        key_bindings.insert(Keycode::Escape, Key::Menu);
        key_bindings.insert(Keycode::Return, Key::Confirm);
        key_bindings.insert(Keycode::KpEnter, Key::Confirm);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn get(&self, keycode: Keycode) -> Option<Key> {
        self.key_bindings.get(&keycode).copied()
    }
}
