use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

use super::types::*;
use crate::character::Player;
use crate::core::constants::*;
use crate::core::economy::grant_munnies;
use crate::core::progression::grant_experience;
use crate::error::GameError;

/// Picks a template uniformly and spawns a fresh enemy from it.
/// Returns `None` for an empty roster.
pub fn spawn_enemy<R: Rng>(templates: &[EnemyTemplate], rng: &mut R) -> Option<Enemy> {
    templates.choose(rng).map(EnemyTemplate::spawn)
}

/// Resolves one turn with the recovery decision supplied up front.
///
/// `recovery_choice` is only consulted when the turn would defeat the
/// player and a recovery item is held; `None` counts as declining.
pub fn resolve_turn<R: Rng>(
    player: &mut Player,
    enemy: &mut Enemy,
    action: CombatAction,
    recovery_choice: Option<bool>,
    rng: &mut R,
) -> TurnOutcome {
    resolve_turn_with(player, enemy, action, rng, |_| {
        recovery_choice.unwrap_or(false)
    })
}

/// Resolves one turn, asking `use_recovery` whether to drink the recovery
/// item if the player is knocked to zero health while holding one.
///
/// Rewards (loot and the enemy's experience) are granted on both
/// [`EncounterState::PlayerVictorious`] and
/// [`EncounterState::PlayerDefeatedButRecovered`].
pub fn resolve_turn_with<R, F>(
    player: &mut Player,
    enemy: &mut Enemy,
    action: CombatAction,
    rng: &mut R,
    use_recovery: F,
) -> TurnOutcome
where
    R: Rng,
    F: FnOnce(&Player) -> bool,
{
    let mut events = Vec::new();

    match action {
        CombatAction::Attack => {
            let damage = player.strength;
            enemy.health = enemy.health.saturating_sub(damage);
            events.push(CombatEvent::PlayerAttack { damage });
            debug!(enemy = %enemy.name, damage, enemy_health = enemy.health, "player attacks");

            if enemy.health <= 0 {
                enemy.health = 0;
                events.push(CombatEvent::EnemyDefeated {
                    enemy: enemy.name.clone(),
                });
                return finish(player, enemy, EncounterState::PlayerVictorious, events, rng);
            }

            // A surviving enemy always strikes back
            let damage = enemy.strength;
            player.health = player.health.saturating_sub(damage);
            events.push(CombatEvent::EnemyAttack { damage });
            debug!(enemy = %enemy.name, damage, player_health = player.health, "enemy attacks");
        }
        CombatAction::Hold => {
            player.health = player.health.saturating_sub(HOLD_HEALTH_PENALTY);
            events.push(CombatEvent::PlayerHeld {
                penalty: HOLD_HEALTH_PENALTY,
            });
            debug!(penalty = HOLD_HEALTH_PENALTY, player_health = player.health, "player holds");
        }
    }

    if player.health > 0 {
        return TurnOutcome {
            state: EncounterState::Engaged,
            survived: None,
            events,
        };
    }

    player.health = 0;
    events.push(CombatEvent::PlayerDefeated {
        enemy: enemy.name.clone(),
    });

    if player.has_item(RECOVERY_ITEM)
        && use_recovery(&*player)
        && player.use_item(RECOVERY_ITEM).is_ok()
    {
        events.push(CombatEvent::RecoveryItemUsed {
            item: RECOVERY_ITEM.to_string(),
            health: player.health,
        });
        return finish(
            player,
            enemy,
            EncounterState::PlayerDefeatedButRecovered,
            events,
            rng,
        );
    }

    finish(player, enemy, EncounterState::PlayerDefeated, events, rng)
}

fn finish<R: Rng>(
    player: &mut Player,
    enemy: &Enemy,
    state: EncounterState,
    mut events: Vec<CombatEvent>,
    rng: &mut R,
) -> TurnOutcome {
    let survived = state.survived();
    if survived == Some(true) {
        events.extend(grant_encounter_rewards(player, enemy, rng));
    }
    info!(player = %player.name, enemy = %enemy.name, %state, "encounter over");
    TurnOutcome {
        state,
        survived,
        events,
    }
}

/// Grants a random munnies drop and the enemy's experience reward.
pub fn grant_encounter_rewards<R: Rng>(
    player: &mut Player,
    enemy: &Enemy,
    rng: &mut R,
) -> Vec<CombatEvent> {
    let mut events = Vec::new();

    let loot = rng.gen_range(LOOT_MIN_MUNNIES..=LOOT_MAX_MUNNIES);
    grant_munnies(player, loot);
    events.push(CombatEvent::LootFound { munnies: loot });

    events.push(CombatEvent::ExperienceGained {
        amount: enemy.experience_reward,
    });
    if let Some(level_up) = grant_experience(player, enemy.experience_reward) {
        events.push(CombatEvent::LevelUp(level_up));
    }

    events
}

/// A single fight against one freshly spawned enemy.
#[derive(Debug, Clone)]
pub struct Encounter {
    enemy: Enemy,
    state: EncounterState,
}

impl Encounter {
    pub fn new(enemy: Enemy) -> Self {
        Self {
            enemy,
            state: EncounterState::Engaged,
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Plays one turn. Fails without touching anything once the encounter
    /// has reached a terminal state.
    pub fn turn<R, F>(
        &mut self,
        player: &mut Player,
        action: CombatAction,
        rng: &mut R,
        use_recovery: F,
    ) -> Result<TurnOutcome, GameError>
    where
        R: Rng,
        F: FnOnce(&Player) -> bool,
    {
        if self.is_over() {
            return Err(GameError::EncounterOver);
        }
        let outcome = resolve_turn_with(player, &mut self.enemy, action, rng, use_recovery);
        self.state = outcome.state;
        Ok(outcome)
    }
}
