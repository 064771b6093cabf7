//! Simulation constants and tuning parameters.
//!
//! All speeds are per-frame deltas: the simulation has no delta-time
//! scaling, so real-world speed tracks the actual frame rate.

/// Target frame rate (Hz). The host scheduler aims for this cadence.
pub const TICK_RATE: u32 = 60;

// --- Viewport ---

/// Default drawing-surface width in game units.
pub const DEFAULT_VIEW_WIDTH: f64 = 310.0;

/// Default drawing-surface height in game units.
pub const DEFAULT_VIEW_HEIGHT: f64 = 300.0;

// --- Player ---

/// Player ship width and height (square).
pub const PLAYER_SIZE: f64 = 15.0;

/// Horizontal movement per frame while LEFT or RIGHT is held.
pub const PLAYER_SPEED: f64 = 2.0;

/// Upward speed of a player bullet, per frame.
pub const PLAYER_BULLET_SPEED: f64 = 6.0;

// --- Invaders ---

/// Invader width and height (square).
pub const INVADER_SIZE: f64 = 12.0;

/// Magnitude of an invader's horizontal patrol speed, per frame.
pub const INVADER_SPEED: f64 = 0.3;

/// Horizontal displacement an invader travels before reversing.
/// The reversal check runs before the move, so the turn lands one
/// frame after the bound is exceeded.
pub const INVADER_PATROL_RANGE: f64 = 40.0;

/// An invader fires when a uniform roll in [0, 1) exceeds this,
/// giving a 0.5% chance per frame.
pub const INVADER_FIRE_THRESHOLD: f64 = 0.995;

/// Downward speed of an invader bullet, per frame.
pub const INVADER_BULLET_SPEED: f64 = 2.0;

/// Half-width of the uniform horizontal drift on an invader bullet.
pub const INVADER_BULLET_DRIFT: f64 = 0.5;

/// Number of invaders in the opening formation.
pub const INVADER_COUNT: usize = 24;

/// Columns in the opening formation.
pub const INVADER_COLUMNS: usize = 8;

/// Rows in the opening formation.
pub const INVADER_ROWS: usize = 3;

/// Spacing between formation slots, both axes.
pub const INVADER_SPACING: f64 = 30.0;

/// Offset of the formation's first slot from the viewport origin.
pub const INVADER_MARGIN: f64 = 30.0;

// --- Bullets ---

/// Bullet width and height (square).
pub const BULLET_SIZE: f64 = 3.0;
