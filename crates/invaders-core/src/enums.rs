//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The three kinds of simulated body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Player,
    Invader,
    Bullet,
}
