//! Demo binary: builds one world over a fixed-size surface and drives
//! the tick loop with a scripted input tape.

use anyhow::bail;
use clap::Parser;
use glam::DVec2;

use invaders_core::constants::{DEFAULT_VIEW_HEIGHT, DEFAULT_VIEW_WIDTH};
use invaders_sim::surface::Surface;
use invaders_sim::{World, WorldConfig};

use invaders_app::game_loop;
use invaders_app::surface::{TextSurface, DEFAULT_COLS, DEFAULT_ROWS};
use invaders_app::tape;

/// Replay a scripted session of the invaders loop, either rendered in
/// the terminal or as a JSON snapshot stream.
#[derive(Parser)]
#[command(name = "invaders", version, about)]
struct Cli {
    /// RNG seed for the simulation.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of frames to run.
    #[arg(long, default_value_t = 1800)]
    frames: u64,

    /// Viewport width in game units.
    #[arg(long, default_value_t = DEFAULT_VIEW_WIDTH)]
    width: f64,

    /// Viewport height in game units.
    #[arg(long, default_value_t = DEFAULT_VIEW_HEIGHT)]
    height: f64,

    /// Emit frame snapshots as JSON lines instead of rendering.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // A surface without positive extent cannot host the game; fail at
    // startup instead of running against a degenerate viewport.
    if cli.width <= 0.0 || cli.height <= 0.0 {
        bail!(
            "drawing surface must have positive extent, got {}x{}",
            cli.width,
            cli.height
        );
    }

    let script = tape::attract_script(cli.frames);

    if cli.json {
        // Headless: no surface, the viewport comes straight from the CLI.
        let config = WorldConfig {
            seed: cli.seed,
            bounds: DVec2::new(cli.width, cli.height),
        };
        game_loop::run_json(World::new(config), cli.frames, script)
    } else {
        // The surface reports the viewport; it is queried exactly once,
        // here, to bind the world.
        let surface = TextSurface::new(
            DVec2::new(cli.width, cli.height),
            DEFAULT_COLS,
            DEFAULT_ROWS,
        );
        let config = WorldConfig {
            seed: cli.seed,
            bounds: surface.size(),
        };
        game_loop::run_terminal(World::new(config), surface, cli.frames, script)
    }
}
