//! The game loop driver
//!
//! A single-threaded cooperative polling loop. Each iteration fires a combat
//! tick if one is due, drains at most one completed input line, and sleeps
//! briefly to bound CPU. The sleep is not synchronized with the tick
//! interval, so tick timing is approximate, with up to one iteration of
//! jitter. Within an iteration, scheduled combat always resolves before
//! input handling.

use std::io::Write;
use std::thread;
use std::time::Instant;

use skirmish_core::{Battle, TickTimer, TICK_INTERVAL};

use crate::error::Result;
use crate::input::{self, LineBuffer};

const WELCOME: [&str; 3] = [
    "Welcome to the Hero vs Monsters game!",
    "Type 'attack orc + Enter' or 'attack dragon + Enter' to attack monsters.",
    "Defeat both monsters to win the game. Good luck!",
];

/// Run one battle to completion.
///
/// Returns once the battle reaches a terminal phase; the win or loss banner
/// has been printed by then as a regular battle event.
pub fn run(battle: &mut Battle, out: &mut impl Write) -> Result<()> {
    for line in WELCOME {
        print_line(out, line)?;
    }

    let mut timer = TickTimer::new(Instant::now(), TICK_INTERVAL);
    let mut line = LineBuffer::new();

    while !battle.phase().is_terminal() {
        if timer.fire(Instant::now()) {
            for event in battle.advance_tick() {
                print_line(out, &event.to_string())?;
            }
        }

        if let Some(command) = input::poll_line(&mut line, out)? {
            for event in battle.handle_line(&command) {
                print_line(out, &event.to_string())?;
            }
        }

        thread::sleep(TICK_INTERVAL);
    }

    log::debug!("battle over after {} ticks: {:?}", battle.tick(), battle.phase());
    Ok(())
}

// Raw mode does not translate \n, so lines need an explicit carriage return
fn print_line(out: &mut impl Write, text: &str) -> Result<()> {
    write!(out, "{text}\r\n")?;
    out.flush()?;
    Ok(())
}
