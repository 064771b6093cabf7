//! Events emitted by the simulation for frontend feedback.

use serde::{Deserialize, Serialize};

use crate::enums::BodyKind;

/// Things that happened during a tick, drained into the frame snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A body fired a bullet.
    BulletFired { shooter: BodyKind },
    /// A body was removed by the collision pass.
    BodyDestroyed { kind: BodyKind },
}
