//! The game world — the core of the simulation.
//!
//! `World` owns the ordered body collection, advances it one tick at a
//! time, and produces `FrameSnapshot`s. Bodies are stored in insertion
//! order: invaders first, then the player, then appended bullets.

use glam::DVec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use invaders_core::constants::{DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH};
use invaders_core::events::GameEvent;
use invaders_core::input::InputState;
use invaders_core::state::{BodyView, FrameSnapshot};

use crate::bodies::{Body, Invader, TickCtx};
use crate::collision::overlaps;
use crate::surface::Surface;
use crate::world_setup;

/// Configuration for starting a new game.
pub struct WorldConfig {
    /// RNG seed for determinism. Same seed + same inputs = same game.
    pub seed: u64,
    /// Drawing-surface viewport, queried from the host once at startup.
    pub bounds: DVec2,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            bounds: DVec2::new(DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT),
        }
    }
}

/// The simulation world. Owns all bodies and all per-session state.
pub struct World {
    bodies: Vec<Body>,
    /// Bodies added mid-tick; they join `bodies` at the next tick
    /// boundary, after that tick's collision pass.
    spawned: Vec<Body>,
    bounds: DVec2,
    rng: ChaCha8Rng,
    tick: u64,
    events: Vec<GameEvent>,
}

impl World {
    /// Create a world with the standard opening population: the invader
    /// formation, then the player.
    pub fn new(config: WorldConfig) -> Self {
        let mut bodies = world_setup::create_invaders();
        bodies.push(world_setup::spawn_player(config.bounds));
        Self::with_bodies(config, bodies)
    }

    /// Create a world with a hand-picked population instead of the
    /// standard opening.
    pub fn with_bodies(config: WorldConfig, bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            spawned: Vec::new(),
            bounds: config.bounds,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tick: 0,
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    ///
    /// Phases: collision pass over the established collection, then the
    /// join of bodies spawned last tick, then one update per body in
    /// collection order. A body spawned during tick t is therefore
    /// updated for the first time at tick t+1 and enters the collision
    /// scan at t+2 — never while still sitting at its spawn point.
    pub fn tick(&mut self, input: &InputState) -> FrameSnapshot {
        self.remove_collided();
        let joined = std::mem::take(&mut self.spawned);
        self.bodies.extend(joined);
        self.run_updates(input);
        self.tick += 1;
        self.build_snapshot()
    }

    /// Append a body. It joins the live collection at the next tick
    /// boundary. No validation, no capacity limit.
    pub fn add_body(&mut self, body: Body) {
        self.spawned.push(body);
    }

    /// The established bodies, in collection order. Bodies spawned this
    /// tick are not yet included.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Bodies waiting to join at the next tick boundary.
    pub fn pending(&self) -> &[Body] {
        &self.spawned
    }

    /// Viewport extents.
    pub fn bounds(&self) -> DVec2 {
        self.bounds
    }

    /// Ticks run so far.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// True iff some invader is further down than `invader` and not far
    /// to its right: `b.center.y > invader.center.y` and
    /// `b.center.x - invader.center.x < invader.size.x`.
    ///
    /// The horizontal test is one-sided — an invader far to the LEFT
    /// still counts. Deliberately loose: it only decides whether an
    /// invader holds fire to avoid hitting its own.
    pub fn invaders_below(&self, invader: &Invader) -> bool {
        self.bodies.iter().any(|b| match b {
            Body::Invader(other) => {
                other.center.y > invader.center.y
                    && other.center.x - invader.center.x < invader.size.x
            }
            _ => false,
        })
    }

    /// Render pass: clear the full viewport, then one filled rectangle
    /// per body, top-left cornered at `center - size / 2`.
    ///
    /// Covers pending spawns too, so a bullet is visible from the tick
    /// it was fired.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear_rect(0.0, 0.0, self.bounds.x, self.bounds.y);
        for body in self.bodies.iter().chain(self.spawned.iter()) {
            let (center, size) = (body.center(), body.size());
            surface.fill_rect(
                center.x - size.x / 2.0,
                center.y - size.y / 2.0,
                size.x,
                size.y,
            );
        }
    }

    /// All-pairs collision pass. A body survives only if it overlaps no
    /// other body, so overlapping pairs are removed together.
    fn remove_collided(&mut self) {
        let bodies = std::mem::take(&mut self.bodies);
        let mut survivors = Vec::with_capacity(bodies.len());
        for b1 in &bodies {
            if bodies.iter().any(|b2| overlaps(b1, b2)) {
                self.events.push(GameEvent::BodyDestroyed { kind: b1.kind() });
            } else {
                survivors.push(b1.clone());
            }
        }
        self.bodies = survivors;
    }

    /// Update every body once, in collection order. Spawns go to the
    /// staging buffer, not the live collection.
    fn run_updates(&mut self, input: &InputState) {
        // Sibling queries are answered against the collection as it
        // stands at the start of the pass. Invaders never move
        // vertically and patrol in lockstep, so this matches a live
        // query for every reachable formation.
        let below: Vec<bool> = self
            .bodies
            .iter()
            .map(|b| match b {
                Body::Invader(inv) => self.invaders_below(inv),
                _ => false,
            })
            .collect();

        let Self {
            bodies,
            spawned,
            rng,
            events,
            ..
        } = self;

        for (body, invader_below) in bodies.iter_mut().zip(below) {
            let mut ctx = TickCtx {
                input,
                rng: &mut *rng,
                spawned: &mut *spawned,
                events: &mut *events,
                invader_below,
            };
            body.update(&mut ctx);
        }
    }

    /// Build the frame snapshot, draining this tick's events.
    fn build_snapshot(&mut self) -> FrameSnapshot {
        let events = std::mem::take(&mut self.events);
        let bodies = self
            .bodies
            .iter()
            .chain(self.spawned.iter())
            .map(|b| BodyView {
                kind: b.kind(),
                center: b.center(),
                size: b.size(),
            })
            .collect();
        FrameSnapshot {
            tick: self.tick,
            bodies,
            events,
        }
    }
}
