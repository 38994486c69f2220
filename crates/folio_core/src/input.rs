//! Raw input flags
//!
//! Input capture collaborators (keyboard handlers, gamepad polling) write
//! boolean flags here; scenes read them each frame. No derived logic.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Directional keys tracked by the input store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKey {
    Up,
    Down,
    Left,
    Right,
}

impl InputKey {
    /// All tracked keys in declaration order
    pub const ALL: [InputKey; 4] = [InputKey::Up, InputKey::Down, InputKey::Left, InputKey::Right];

    /// Map a DOM-style key name (`"ArrowUp"`, `"w"`, ...) to a tracked key
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" | "w" | "W" => Some(InputKey::Up),
            "ArrowDown" | "s" | "S" => Some(InputKey::Down),
            "ArrowLeft" | "a" | "A" => Some(InputKey::Left),
            "ArrowRight" | "d" | "D" => Some(InputKey::Right),
            _ => None,
        }
    }
}

/// Key/value store of input flags
#[derive(Clone, Debug, Default)]
pub struct InputState {
    flags: FxHashMap<InputKey, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a single flag
    pub fn set_input(&mut self, key: InputKey, pressed: bool) {
        self.flags.insert(key, pressed);
    }

    /// Read a flag (keys never written read as released)
    pub fn is_pressed(&self, key: InputKey) -> bool {
        self.flags.get(&key).copied().unwrap_or(false)
    }

    /// Keys currently held, in `InputKey::ALL` order
    pub fn pressed(&self) -> impl Iterator<Item = InputKey> + '_ {
        InputKey::ALL.into_iter().filter(|key| self.is_pressed(*key))
    }

    /// Release every key (e.g. on window blur)
    pub fn clear(&mut self) {
        self.flags.clear();
    }
}
