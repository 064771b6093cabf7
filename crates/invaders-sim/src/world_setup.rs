//! Spawn factories for setting up the simulation world.

use glam::DVec2;

use invaders_core::constants::*;

use crate::bodies::{Body, Invader, Player};

/// Build the opening formation of 24 invaders.
///
/// Columns cycle through `i % 8`, rows through `i % 3`: consecutive
/// indices walk diagonally through the grid rather than row-major, but
/// every one of the 8x3 slots is filled exactly once.
pub fn create_invaders() -> Vec<Body> {
    let mut invaders = Vec::with_capacity(INVADER_COUNT);
    for i in 0..INVADER_COUNT {
        let x = INVADER_MARGIN + (i % INVADER_COLUMNS) as f64 * INVADER_SPACING;
        let y = INVADER_MARGIN + (i % INVADER_ROWS) as f64 * INVADER_SPACING;
        invaders.push(Body::Invader(Invader::new(DVec2::new(x, y))));
    }
    invaders
}

/// Spawn the player ship for the given viewport.
pub fn spawn_player(bounds: DVec2) -> Body {
    Body::Player(Player::new(bounds))
}
