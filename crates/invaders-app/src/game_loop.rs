//! Frame pacing and the demo session loop.
//!
//! `RefreshScheduler` paces frames at the display refresh rate with
//! sleep-until-deadline timing; the session functions compose the tape,
//! the world, and a sink (terminal renderer or JSON stream).

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;

use invaders_core::constants::TICK_RATE;
use invaders_core::input::InputState;
use invaders_sim::scheduler::{FrameScheduler, SteppedScheduler};
use invaders_sim::World;

use crate::surface::TextSurface;
use crate::tape::InputTape;

/// Nominal duration of one frame at the target rate.
const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Scheduler that re-invokes the frame callback once per display
/// refresh interval.
pub struct RefreshScheduler {
    frame_duration: Duration,
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self {
            frame_duration: FRAME_DURATION,
        }
    }
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameScheduler for RefreshScheduler {
    fn run(&mut self, frame: &mut dyn FnMut() -> bool) {
        let mut next_frame_time = Instant::now();
        loop {
            if !frame() {
                return;
            }

            next_frame_time += self.frame_duration;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > self.frame_duration * 2 {
                // Too far behind — reset to avoid a catch-up spiral
                next_frame_time = now;
            }
        }
    }
}

/// Run a session against the terminal renderer.
pub fn run_terminal(
    mut world: World,
    mut surface: TextSurface,
    frames: u64,
    mut tape: InputTape,
) -> Result<()> {
    let mut input = InputState::new();
    let mut out = io::stdout().lock();

    // Clear once; each frame afterwards repaints in place.
    out.write_all(b"\x1b[2J")?;

    let mut io_error: Option<io::Error> = None;
    let mut scheduler = RefreshScheduler::new();
    scheduler.run(&mut || {
        if world.current_tick() >= frames {
            return false;
        }
        tape.apply(world.current_tick(), &mut input);
        world.tick(&input);
        world.draw(&mut surface);
        if let Err(err) = surface.present(&mut out) {
            io_error = Some(err);
            return false;
        }
        true
    });

    match io_error {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

/// Run a session headless, streaming one JSON snapshot per line.
pub fn run_json(mut world: World, frames: u64, mut tape: InputTape) -> Result<()> {
    let mut input = InputState::new();
    let mut out = io::stdout().lock();

    let mut result = Ok(());
    let mut scheduler = SteppedScheduler::new(frames);
    scheduler.run(&mut || {
        tape.apply(world.current_tick(), &mut input);
        let snapshot = world.tick(&input);
        match serde_json::to_string(&snapshot) {
            Ok(line) => {
                if let Err(err) = writeln!(out, "{line}") {
                    result = Err(err.into());
                    return false;
                }
            }
            Err(err) => {
                result = Err(err.into());
                return false;
            }
        }
        true
    });

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_constant() {
        // 60Hz = 16.667ms per frame
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(FRAME_DURATION.as_nanos(), expected_nanos as u128);
    }

    #[test]
    fn test_refresh_scheduler_stops_when_frame_declines() {
        let mut scheduler = RefreshScheduler::new();
        let mut count = 0;
        scheduler.run(&mut || {
            count += 1;
            count < 3
        });
        assert_eq!(count, 3);
    }
}
