//! The simulated bodies: player ship, invaders, bullets.
//!
//! `Body` is a tagged variant; each variant owns its per-tick behavior.
//! Bodies never touch the world's collection directly — spawning goes
//! through the `TickCtx` staging buffer, and the sibling query result
//! an invader needs is precomputed by the world before the pass.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use invaders_core::constants::*;
use invaders_core::enums::BodyKind;
use invaders_core::events::GameEvent;
use invaders_core::input::{InputState, KEY_LEFT, KEY_RIGHT, KEY_SPACE};

/// Per-tick services handed to a body's update.
pub struct TickCtx<'a> {
    /// Held-key state, read-only for the simulation.
    pub input: &'a InputState,
    /// World RNG driving invader fire decisions.
    pub rng: &'a mut ChaCha8Rng,
    /// Staging buffer for bodies spawned this tick. They join the live
    /// collection at the next tick boundary.
    pub spawned: &'a mut Vec<Body>,
    /// Event accumulator for the frame snapshot.
    pub events: &'a mut Vec<GameEvent>,
    /// Whether another invader sits below this body (always false for
    /// non-invaders).
    pub invader_below: bool,
}

/// Any simulated entity with a position and size, participating in
/// collision and rendering.
#[derive(Debug, Clone)]
pub enum Body {
    Player(Player),
    Invader(Invader),
    Bullet(Bullet),
}

impl Body {
    pub fn kind(&self) -> BodyKind {
        match self {
            Body::Player(_) => BodyKind::Player,
            Body::Invader(_) => BodyKind::Invader,
            Body::Bullet(_) => BodyKind::Bullet,
        }
    }

    /// Center position.
    pub fn center(&self) -> DVec2 {
        match self {
            Body::Player(p) => p.center,
            Body::Invader(i) => i.center,
            Body::Bullet(b) => b.center,
        }
    }

    /// Full width and height. Fixed at creation.
    pub fn size(&self) -> DVec2 {
        match self {
            Body::Player(p) => p.size,
            Body::Invader(i) => i.size,
            Body::Bullet(b) => b.size,
        }
    }

    /// Advance this body by one tick.
    pub fn update(&mut self, ctx: &mut TickCtx) {
        match self {
            Body::Player(p) => p.update(ctx),
            Body::Invader(i) => i.update(ctx),
            Body::Bullet(b) => b.update(ctx),
        }
    }
}

/// The player ship. Exactly one per game.
#[derive(Debug, Clone)]
pub struct Player {
    pub center: DVec2,
    pub size: DVec2,
}

impl Player {
    /// Place the ship at horizontal mid-screen, one ship-height above
    /// the bottom edge.
    pub fn new(bounds: DVec2) -> Self {
        Self {
            center: DVec2::new(bounds.x / 2.0, bounds.y - PLAYER_SIZE),
            size: DVec2::splat(PLAYER_SIZE),
        }
    }

    pub fn update(&mut self, ctx: &mut TickCtx) {
        // LEFT wins when both arrows are held.
        if ctx.input.is_down(KEY_LEFT) {
            self.center.x -= PLAYER_SPEED;
        } else if ctx.input.is_down(KEY_RIGHT) {
            self.center.x += PLAYER_SPEED;
        }

        // One bullet per tick while SPACE is held. No clip, no cooldown.
        if ctx.input.is_down(KEY_SPACE) {
            let center = DVec2::new(self.center.x, self.center.y - self.size.y / 2.0);
            let velocity = DVec2::new(0.0, -PLAYER_BULLET_SPEED);
            ctx.spawned.push(Body::Bullet(Bullet::new(center, velocity)));
            ctx.events.push(GameEvent::BulletFired {
                shooter: BodyKind::Player,
            });
        }
    }
}

/// A patrolling invader.
#[derive(Debug, Clone)]
pub struct Invader {
    pub center: DVec2,
    pub size: DVec2,
    /// Horizontal displacement since the last direction reversal.
    pub patrol_x: f64,
    /// Signed horizontal speed, magnitude `INVADER_SPEED`.
    pub speed_x: f64,
}

impl Invader {
    pub fn new(center: DVec2) -> Self {
        Self {
            center,
            size: DVec2::splat(INVADER_SIZE),
            patrol_x: 0.0,
            speed_x: INVADER_SPEED,
        }
    }

    pub fn update(&mut self, ctx: &mut TickCtx) {
        // Checked before the move: the reversal lands one tick after
        // the patrol window is exceeded, not at the bound.
        if self.patrol_x < 0.0 || self.patrol_x > INVADER_PATROL_RANGE {
            self.speed_x = -self.speed_x;
        }

        self.center.x += self.speed_x;
        self.patrol_x += self.speed_x;

        // One roll per tick; fires on the top 0.5%, and only with a
        // clear line below.
        let roll: f64 = ctx.rng.gen();
        if roll > INVADER_FIRE_THRESHOLD && !ctx.invader_below {
            let center = DVec2::new(self.center.x, self.center.y + self.size.y / 2.0);
            let velocity = DVec2::new(
                ctx.rng.gen::<f64>() - INVADER_BULLET_DRIFT,
                INVADER_BULLET_SPEED,
            );
            ctx.spawned.push(Body::Bullet(Bullet::new(center, velocity)));
            ctx.events.push(GameEvent::BulletFired {
                shooter: BodyKind::Invader,
            });
        }
    }
}

/// A bullet in constant-velocity flight. No bounds clamp and no
/// off-screen despawn: a bullet persists until it hits something.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub center: DVec2,
    pub size: DVec2,
    pub velocity: DVec2,
}

impl Bullet {
    pub fn new(center: DVec2, velocity: DVec2) -> Self {
        Self {
            center,
            size: DVec2::splat(BULLET_SIZE),
            velocity,
        }
    }

    pub fn update(&mut self, _ctx: &mut TickCtx) {
        self.center += self.velocity;
    }
}
