//! Frame snapshot — the complete visible state produced by each tick.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::BodyKind;
use crate::events::GameEvent;

/// Everything a frontend needs to present one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    /// Tick counter after this frame's update.
    pub tick: u64,
    /// All live bodies, in collection order, including bullets fired
    /// this tick that have not yet had their first move.
    pub bodies: Vec<BodyView>,
    /// Events that occurred during this tick.
    pub events: Vec<GameEvent>,
}

/// A body as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub kind: BodyKind,
    /// Center position.
    pub center: DVec2,
    /// Full width and height.
    pub size: DVec2,
}
