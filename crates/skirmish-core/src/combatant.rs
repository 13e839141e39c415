//! Combatant types
//!
//! A single `Combatant` record with a role tag replaces a class hierarchy:
//! - `Role::Hero` - player-controlled, attacks for a fixed amount
//! - `Role::Monster` - timer-controlled adversary with its own attack power

use serde::{Deserialize, Serialize};

/// Damage dealt by every hero attack
pub const HERO_ATTACK_DAMAGE: i32 = 2;

/// What a combatant is, and how hard it hits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Player-controlled combatant
    Hero,
    /// Adversary attacking on the combat clock
    Monster {
        /// Damage dealt per attack, fixed at creation
        attack_power: i32,
    },
}

/// Result of asking a combatant to attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Damage was applied to the target
    Hit,
    /// The attacker is dead; the action was skipped entirely
    AttackerDead,
}

/// A named combatant with mutable health
///
/// Health may go negative from overkill; death is `health <= 0` and is
/// permanent - there is no revival path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Combatant {
    /// Display name; doubles as the command target key for monsters
    pub name: String,
    health: i32,
    role: Role,
}

impl Combatant {
    /// Create the player-controlled hero
    pub fn hero(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            health,
            role: Role::Hero,
        }
    }

    /// Create a monster with a fixed attack power
    pub fn monster(name: impl Into<String>, health: i32, attack_power: i32) -> Self {
        Self {
            name: name.into(),
            health,
            role: Role::Monster { attack_power },
        }
    }

    /// Current health; negative once overkilled
    pub fn health(&self) -> i32 {
        self.health
    }

    /// Role tag
    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether this combatant is dead (`health <= 0`)
    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Apply damage. A dead combatant cannot be damaged further.
    pub fn damage(&mut self, amount: i32) {
        if self.is_dead() {
            return;
        }
        self.health -= amount;
    }

    /// Attack another combatant.
    ///
    /// A dead attacker applies no damage: the whole action short-circuits and
    /// the caller gets `AttackOutcome::AttackerDead` to report. A live hero
    /// hits for `HERO_ATTACK_DAMAGE`; a live monster hits for its attack
    /// power.
    pub fn attack(&self, target: &mut Combatant) -> AttackOutcome {
        if self.is_dead() {
            return AttackOutcome::AttackerDead;
        }
        let amount = match self.role {
            Role::Hero => HERO_ATTACK_DAMAGE,
            Role::Monster { attack_power } => attack_power,
        };
        target.damage(amount);
        AttackOutcome::Hit
    }
}
