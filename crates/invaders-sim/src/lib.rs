//! Headless simulation for the invaders arcade loop.
//!
//! Owns the body collection, runs the collision and update phases each
//! tick, and produces `FrameSnapshot`s for a frontend. Completely
//! headless (drawing and scheduling are collaborator traits), enabling
//! deterministic testing.

pub mod bodies;
pub mod collision;
pub mod scheduler;
pub mod surface;
pub mod world;
pub mod world_setup;

pub use invaders_core as core;
pub use world::{World, WorldConfig};
