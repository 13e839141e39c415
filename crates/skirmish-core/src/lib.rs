//! Skirmish Core - battle logic for a real-time terminal fight
//!
//! This crate provides the game state and rules, free of any terminal I/O:
//! - `Combatant` - shared health/death with a `Hero`/`Monster` role tag
//! - `Command` - parsing of line-oriented player commands
//! - `Battle` - the tick-scheduled state machine with win/loss evaluation
//! - `TickTimer` - wall-clock gating for the fixed-tick loop
//!
//! Everything here is driven by explicit inputs (tick advancement, completed
//! input lines, an explicit `Instant`), so the whole crate is testable with a
//! synthetic clock and scripted commands.

mod battle;
mod combatant;
mod command;
pub mod time;

pub use battle::{Battle, Event, Phase};
pub use combatant::{AttackOutcome, Combatant, Role, HERO_ATTACK_DAMAGE};
pub use command::Command;
pub use time::{Tick, TickTimer, TICK_INTERVAL};
