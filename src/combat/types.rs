use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::progression::LevelUp;
use crate::error::GameError;

/// Immutable description of an opponent kind.
///
/// Templates are never fought directly; every encounter fights a fresh
/// [`Enemy`] produced by [`EnemyTemplate::spawn`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub name: String,
    pub health: i32,
    pub strength: i32,
    pub experience_reward: i32,
}

impl EnemyTemplate {
    pub fn new(name: impl Into<String>, health: i32, strength: i32, experience_reward: i32) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
            experience_reward,
        }
    }

    pub fn spawn(&self) -> Enemy {
        Enemy::new(
            self.name.clone(),
            self.health,
            self.strength,
            self.experience_reward,
        )
    }
}

/// An opponent instance for a single encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    pub name: String,
    pub health: i32,
    pub strength: i32,
    pub experience_reward: i32,
}

impl Enemy {
    pub fn new(name: impl Into<String>, health: i32, strength: i32, experience_reward: i32) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
            experience_reward,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// One action chosen by the player for a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatAction {
    Attack,
    /// Skip attacking and take a fixed health penalty.
    Hold,
}

impl FromStr for CombatAction {
    type Err = GameError;

    /// Accepts the menu numbers ("1", "2") or the action names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "attack" => Ok(CombatAction::Attack),
            "2" | "hold" => Ok(CombatAction::Hold),
            _ => Err(GameError::InvalidAction(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    Engaged,
    PlayerVictorious,
    PlayerDefeated,
    PlayerDefeatedButRecovered,
}

impl EncounterState {
    pub fn is_terminal(self) -> bool {
        self != EncounterState::Engaged
    }

    /// Whether the player came out alive. `None` while still engaged.
    pub fn survived(self) -> Option<bool> {
        match self {
            EncounterState::Engaged => None,
            EncounterState::PlayerVictorious | EncounterState::PlayerDefeatedButRecovered => {
                Some(true)
            }
            EncounterState::PlayerDefeated => Some(false),
        }
    }
}

impl fmt::Display for EncounterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EncounterState::Engaged => "engaged",
            EncounterState::PlayerVictorious => "victorious",
            EncounterState::PlayerDefeated => "defeated",
            EncounterState::PlayerDefeatedButRecovered => "recovered",
        };
        f.write_str(label)
    }
}

/// Something observable that happened during a turn, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack { damage: i32 },
    EnemyAttack { damage: i32 },
    /// Player chose not to attack and paid the penalty.
    PlayerHeld { penalty: i32 },
    EnemyDefeated { enemy: String },
    PlayerDefeated { enemy: String },
    RecoveryItemUsed { item: String, health: i32 },
    LootFound { munnies: i32 },
    ExperienceGained { amount: i32 },
    LevelUp(LevelUp),
}

/// Result of resolving one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub state: EncounterState,
    /// Set once the encounter is over.
    pub survived: Option<bool>,
    pub events: Vec<CombatEvent>,
}
