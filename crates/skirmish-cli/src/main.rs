//! Hero vs Monsters - a real-time terminal battle
//!
//! The hero fights an orc and a dragon that attack on a fixed 100ms combat
//! clock; the player types `attack orc` or `attack dragon` (plus Enter) to
//! fight back. Input is polled without ever blocking the clock, and the
//! terminal runs in raw mode for the duration of the session.

mod error;
mod input;
mod run;
mod terminal;

use std::io::stdout;

use skirmish_core::Battle;

use crate::error::Result;
use crate::terminal::RawModeGuard;

fn main() -> Result<()> {
    env_logger::init();

    // The guard restores cooked mode on drop, whatever the exit path
    let _raw = RawModeGuard::enable()?;

    let mut battle = Battle::standard();
    run::run(&mut battle, &mut stdout())
}
