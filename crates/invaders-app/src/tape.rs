//! Scripted input for the demo loop.
//!
//! A tape of frame-stamped key transitions stands in for the host's
//! keyboard events: the loop applies due entries to the `InputState`
//! between frames, exactly where a real host would deliver them.

use invaders_core::input::{InputState, KEY_LEFT, KEY_RIGHT, KEY_SPACE};

/// A key transition scheduled for a frame.
#[derive(Debug, Clone, Copy)]
pub enum KeyEdge {
    Down(u32),
    Up(u32),
}

/// Frame-stamped key events, replayed in order.
pub struct InputTape {
    entries: Vec<(u64, KeyEdge)>,
    next: usize,
}

impl InputTape {
    pub fn new(mut entries: Vec<(u64, KeyEdge)>) -> Self {
        entries.sort_by_key(|entry| entry.0);
        Self { entries, next: 0 }
    }

    /// Apply every event stamped at or before `frame`.
    pub fn apply(&mut self, frame: u64, input: &mut InputState) {
        while let Some(&(at, edge)) = self.entries.get(self.next) {
            if at > frame {
                break;
            }
            match edge {
                KeyEdge::Down(code) => input.key_down(code),
                KeyEdge::Up(code) => input.key_up(code),
            }
            self.next += 1;
        }
    }
}

/// The attract-mode script: sweep the ship left and right under the
/// formation, firing a short burst each pass.
pub fn attract_script(frames: u64) -> InputTape {
    let mut entries = Vec::new();
    let mut frame = 0;
    let mut leftward = true;
    while frame < frames {
        let arrow = if leftward { KEY_LEFT } else { KEY_RIGHT };
        entries.push((frame, KeyEdge::Down(arrow)));
        entries.push((frame + 70, KeyEdge::Up(arrow)));
        entries.push((frame + 20, KeyEdge::Down(KEY_SPACE)));
        entries.push((frame + 24, KeyEdge::Up(KEY_SPACE)));
        leftward = !leftward;
        frame += 80;
    }
    InputTape::new(entries)
}
