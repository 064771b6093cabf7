//! Demo frontend for the invaders simulation.
//!
//! Wires the headless world to a terminal renderer, a scripted input
//! tape, and a refresh-rate frame scheduler.

pub mod game_loop;
pub mod surface;
pub mod tape;

pub use invaders_core as core;
