//! Held-key state fed by host key events.
//!
//! One `InputState` exists per game session. The host delivers key-down
//! and key-up events carrying numeric key identifiers; the simulation
//! only ever queries it, once per tick, through a shared reference.

use std::collections::HashMap;

/// Virtual key code for the left arrow.
pub const KEY_LEFT: u32 = 37;

/// Virtual key code for the right arrow.
pub const KEY_RIGHT: u32 = 39;

/// Virtual key code for the space bar.
pub const KEY_SPACE: u32 = 32;

/// Map from key code to currently-held status.
///
/// Keys never seen report as not held.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashMap<u32, bool>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Host key-pressed callback.
    pub fn key_down(&mut self, code: u32) {
        self.held.insert(code, true);
    }

    /// Host key-released callback.
    pub fn key_up(&mut self, code: u32) {
        self.held.insert(code, false);
    }

    /// Whether the key is currently held.
    pub fn is_down(&self, code: u32) -> bool {
        self.held.get(&code).copied().unwrap_or(false)
    }
}
