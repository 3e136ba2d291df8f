//! Keyboard state
//!
//! Key handlers write into [`KeyState`] between ticks; the tick only reads it.

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Debug,
    Autopilot,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            " " => Some(Key::Fire),
            "d" | "D" => Some(Key::Debug),
            "i" | "I" => Some(Key::Autopilot),
            _ => None,
        }
    }
}

/// Currently held directional keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl KeyState {
    /// Record a press or release. Returns false for keys that are not held
    /// (fire and toggles act on the press itself).
    pub fn set(&mut self, key: Key, held: bool) -> bool {
        match key {
            Key::Up => self.up = held,
            Key::Down => self.down = held,
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Fire | Key::Debug | Key::Autopilot => return false,
        }
        true
    }

    /// Net vertical intent: -1 up, 1 down, 0 none or both
    pub fn vertical(&self) -> i8 {
        match (self.up, self.down) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }

    /// Net horizontal intent: -1 left, 1 right, 0 none or both
    pub fn horizontal(&self) -> i8 {
        match (self.left, self.right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}
