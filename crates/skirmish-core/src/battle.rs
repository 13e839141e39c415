//! Battle state machine
//!
//! A `Battle` owns the hero and an ordered registry of monsters, advances on
//! discrete ticks, applies player commands between ticks, and evaluates the
//! win/loss outcome. Each monster carries its own attack cadence, so the
//! registry generalizes to any roster; the shipped roster is the classic
//! orc-and-dragon pair.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::combatant::{AttackOutcome, Combatant};
use crate::command::Command;
use crate::time::Tick;

/// Session phase; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// The fight is still going
    #[default]
    Running,
    /// All monsters are dead
    Won,
    /// The hero is dead
    Lost,
}

impl Phase {
    /// Check whether the session has ended
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Running)
    }
}

/// A monster plus its place on the combat clock
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MonsterSlot {
    combatant: Combatant,
    /// Attacks on every tick divisible by this
    cadence: Tick,
}

/// A user-visible battle event; `Display` gives the exact status line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A monster landed its scheduled attack
    MonsterHit { name: String, hero_health: i32 },
    /// The hero attacked a monster by command
    HeroHit { name: String, monster_health: i32 },
    /// A dead monster was asked to act and skipped its attack
    MonsterCannotAct { name: String },
    /// All monsters are dead
    Won,
    /// The hero is dead
    Lost,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::MonsterHit { name, hero_health } => write!(
                f,
                "{} hits hero. Hero health is {}",
                capitalized(name),
                hero_health
            ),
            Event::HeroHit {
                name,
                monster_health,
            } => write!(
                f,
                "Hero hits {}. {} health is {}",
                name,
                capitalized(name),
                monster_health
            ),
            Event::MonsterCannotAct { name } => {
                write!(f, "{} is dead and cannot attack.", capitalized(name))
            }
            Event::Won => write!(f, "Congratulations! You have defeated both monsters!"),
            Event::Lost => write!(f, "Game over. The hero has been defeated."),
        }
    }
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The whole game state: hero, monster registry, tick counter, phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Battle {
    hero: Combatant,
    monsters: IndexMap<String, MonsterSlot>,
    tick: Tick,
    phase: Phase,
}

impl Battle {
    /// Start a battle with the given hero and an empty monster registry
    pub fn new(hero: Combatant) -> Self {
        Self {
            hero,
            monsters: IndexMap::new(),
            tick: 0,
            phase: Phase::Running,
        }
    }

    /// Register a monster that attacks on every `cadence`-th tick
    pub fn with_monster(mut self, monster: Combatant, cadence: Tick) -> Self {
        self.monsters.insert(
            monster.name.clone(),
            MonsterSlot {
                combatant: monster,
                cadence,
            },
        );
        self
    }

    /// The shipped roster: hero 40 hp, an orc with 7 hp hitting for 1 every
    /// 15th tick, a dragon with 20 hp hitting for 3 every 20th tick
    pub fn standard() -> Self {
        Battle::new(Combatant::hero("hero", 40))
            .with_monster(Combatant::monster("orc", 7, 1), 15)
            .with_monster(Combatant::monster("dragon", 20, 3), 20)
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current tick number
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// The hero
    pub fn hero(&self) -> &Combatant {
        &self.hero
    }

    /// Look up a monster by name
    pub fn monster(&self, name: &str) -> Option<&Combatant> {
        self.monsters.get(name).map(|slot| &slot.combatant)
    }

    /// Advance one combat tick.
    ///
    /// Fires every living monster whose cadence divides the new tick number
    /// (the checks are independent; a tick like 60 fires both shipped
    /// monsters), then evaluates termination. Win is checked before loss, so
    /// a tick on which everyone is dead resolves to `Won`. No-op once the
    /// phase is terminal.
    pub fn advance_tick(&mut self) -> Vec<Event> {
        if self.phase.is_terminal() {
            return Vec::new();
        }
        self.tick += 1;
        let mut events = Vec::new();

        for slot in self.monsters.values() {
            if self.tick % slot.cadence != 0 || slot.combatant.is_dead() {
                continue;
            }
            log::debug!("tick {}: {} attacks hero", self.tick, slot.combatant.name);
            match slot.combatant.attack(&mut self.hero) {
                AttackOutcome::Hit => events.push(Event::MonsterHit {
                    name: slot.combatant.name.clone(),
                    hero_health: self.hero.health(),
                }),
                AttackOutcome::AttackerDead => events.push(Event::MonsterCannotAct {
                    name: slot.combatant.name.clone(),
                }),
            }
        }

        if self.monsters.values().all(|slot| slot.combatant.is_dead()) {
            log::debug!("tick {}: all monsters dead, hero wins", self.tick);
            self.phase = Phase::Won;
            events.push(Event::Won);
        } else if self.hero.is_dead() {
            log::debug!("tick {}: hero dead", self.tick);
            self.phase = Phase::Lost;
            events.push(Event::Lost);
        }
        events
    }

    /// Apply one completed input line.
    ///
    /// Unrecognized commands, unknown targets and empty lines are silently
    /// ignored. A dead hero's attack is skipped without effect. No-op once
    /// the phase is terminal.
    pub fn handle_line(&mut self, line: &str) -> Vec<Event> {
        if self.phase.is_terminal() {
            return Vec::new();
        }
        let Some(Command::Attack(target)) = Command::parse(line) else {
            log::trace!("ignoring input line {line:?}");
            return Vec::new();
        };
        let Some(slot) = self.monsters.get_mut(&target) else {
            log::trace!("ignoring unknown attack target {target:?}");
            return Vec::new();
        };
        match self.hero.attack(&mut slot.combatant) {
            AttackOutcome::Hit => vec![Event::HeroHit {
                name: target,
                monster_health: slot.combatant.health(),
            }],
            AttackOutcome::AttackerDead => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_cadence() {
        let mut battle = Battle::standard();
        let mut orc_ticks = Vec::new();
        let mut dragon_ticks = Vec::new();

        for tick in 1..=60u64 {
            for event in battle.advance_tick() {
                match event {
                    Event::MonsterHit { ref name, .. } if name == "orc" => orc_ticks.push(tick),
                    Event::MonsterHit { ref name, .. } if name == "dragon" => {
                        dragon_ticks.push(tick)
                    }
                    _ => {}
                }
            }
        }

        assert_eq!(orc_ticks, vec![15, 30, 45, 60]);
        assert_eq!(dragon_ticks, vec![20, 40, 60]);
        // 4 orc hits at 1 damage, 3 dragon hits at 3 damage
        assert_eq!(battle.hero().health(), 40 - 4 - 9);
    }

    #[test]
    fn test_both_monsters_fire_on_tick_60() {
        let mut battle = Battle::standard();
        for _ in 1..60 {
            battle.advance_tick();
        }

        let events = battle.advance_tick();
        assert_eq!(
            events,
            vec![
                Event::MonsterHit {
                    name: "orc".to_string(),
                    hero_health: 30,
                },
                Event::MonsterHit {
                    name: "dragon".to_string(),
                    hero_health: 27,
                },
            ]
        );
    }

    #[test]
    fn test_attack_command_hits_for_two() {
        let mut battle = Battle::standard();

        let events = battle.handle_line("attack orc");
        assert_eq!(
            events,
            vec![Event::HeroHit {
                name: "orc".to_string(),
                monster_health: 5,
            }]
        );

        let events = battle.handle_line("attack dragon");
        assert_eq!(
            events,
            vec![Event::HeroHit {
                name: "dragon".to_string(),
                monster_health: 18,
            }]
        );
    }

    #[test]
    fn test_noise_lines_change_nothing() {
        let mut battle = Battle::standard();

        for line in ["", "Attack Orc", "attack goblin", "help"] {
            assert!(battle.handle_line(line).is_empty());
        }
        assert_eq!(battle.hero().health(), 40);
        assert_eq!(battle.monster("orc").unwrap().health(), 7);
        assert_eq!(battle.monster("dragon").unwrap().health(), 20);
    }

    #[test]
    fn test_dead_hero_commands_are_skipped() {
        let mut battle = Battle::new(Combatant::hero("hero", 0))
            .with_monster(Combatant::monster("orc", 7, 1), 15);

        assert!(battle.handle_line("attack orc").is_empty());
        assert_eq!(battle.monster("orc").unwrap().health(), 7);
    }

    #[test]
    fn test_loss_when_hero_dies() {
        let mut battle = Battle::new(Combatant::hero("hero", 1))
            .with_monster(Combatant::monster("orc", 7, 5), 1);

        let events = battle.advance_tick();
        assert_eq!(battle.phase(), Phase::Lost);
        assert_eq!(events.last(), Some(&Event::Lost));

        // Terminal phases are absorbing
        assert!(battle.advance_tick().is_empty());
        assert!(battle.handle_line("attack orc").is_empty());
        assert_eq!(battle.tick(), 1);
    }

    #[test]
    fn test_win_checked_before_loss() {
        // Everyone is dead at evaluation time; the outcome is a win
        let mut battle = Battle::new(Combatant::hero("hero", 0))
            .with_monster(Combatant::monster("orc", 0, 1), 15)
            .with_monster(Combatant::monster("dragon", 0, 3), 20);

        let events = battle.advance_tick();
        assert_eq!(battle.phase(), Phase::Won);
        assert_eq!(events, vec![Event::Won]);
    }

    #[test]
    fn test_full_fight_to_victory() {
        let mut battle = Battle::standard();

        // A few quiet ticks first; no scheduled attack lands before tick 15
        for _ in 0..5 {
            assert!(battle.advance_tick().is_empty());
        }

        // Four hero attacks overkill the orc to -1
        for _ in 0..4 {
            battle.handle_line("attack orc");
        }
        let orc = battle.monster("orc").unwrap();
        assert_eq!(orc.health(), -1);
        assert!(orc.is_dead());

        // Ten more bring the dragon to exactly 0
        for _ in 0..10 {
            battle.handle_line("attack dragon");
        }
        let dragon = battle.monster("dragon").unwrap();
        assert_eq!(dragon.health(), 0);
        assert!(dragon.is_dead());

        // The next tick evaluation ends the session
        let events = battle.advance_tick();
        assert_eq!(events, vec![Event::Won]);
        assert_eq!(battle.phase(), Phase::Won);
        assert_eq!(battle.hero().health(), 40);
    }

    #[test]
    fn test_event_wording() {
        let hit = Event::MonsterHit {
            name: "orc".to_string(),
            hero_health: 39,
        };
        assert_eq!(hit.to_string(), "Orc hits hero. Hero health is 39");

        let hit = Event::HeroHit {
            name: "dragon".to_string(),
            monster_health: 18,
        };
        assert_eq!(hit.to_string(), "Hero hits dragon. Dragon health is 18");

        assert_eq!(
            Event::Won.to_string(),
            "Congratulations! You have defeated both monsters!"
        );
        assert_eq!(
            Event::Lost.to_string(),
            "Game over. The hero has been defeated."
        );
    }
}
