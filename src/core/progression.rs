//! Experience and leveling.
//!
//! A level-up fires at most once per grant. Experience past the threshold
//! is discarded rather than carried into the next level.

use tracing::info;

use crate::character::Player;
use crate::core::constants::*;

/// Announcement produced when a player gains a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub name: String,
    pub new_level: u32,
}

/// Adds experience and levels up once if the threshold is reached.
pub fn grant_experience(player: &mut Player, amount: i32) -> Option<LevelUp> {
    player.experience = player.experience.saturating_add(amount);
    if player.experience >= XP_PER_LEVEL {
        Some(level_up(player))
    } else {
        None
    }
}

/// Raises level by one, adds health and strength, and resets experience.
///
/// Health is increased without clamping.
pub fn level_up(player: &mut Player) -> LevelUp {
    player.level = player.level.saturating_add(1);
    player.health = player.health.saturating_add(LEVEL_UP_HEALTH_BONUS);
    player.strength = player.strength.saturating_add(LEVEL_UP_STRENGTH_BONUS);
    player.experience = 0;

    info!(player = %player.name, level = player.level, "level up");
    LevelUp {
        name: player.name.clone(),
        new_level: player.level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_experience_below_threshold() {
        let mut player = Player::new("Hero", 100, 10);
        assert_eq!(grant_experience(&mut player, 50), None);
        assert_eq!(player.experience, 50);
        assert_eq!(player.level, 1);
    }

    #[test]
    fn test_grant_experience_accumulates_to_level() {
        let mut player = Player::new("Hero", 100, 10);
        grant_experience(&mut player, 50);
        let event = grant_experience(&mut player, 50);
        assert_eq!(
            event,
            Some(LevelUp {
                name: "Hero".to_string(),
                new_level: 2
            })
        );
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
    }

    #[test]
    fn test_level_up_stat_gains() {
        let mut player = Player::new("Hero", 100, 10);
        grant_experience(&mut player, 100);
        assert_eq!(player.level, 2);
        assert_eq!(player.health, 120);
        assert_eq!(player.strength, 15);
    }

    #[test]
    fn test_overshoot_is_single_level_and_discarded() {
        let mut player = Player::new("Hero", 100, 10);
        grant_experience(&mut player, 350);
        assert_eq!(player.level, 2);
        assert_eq!(player.experience, 0);
        assert_eq!(player.health, 120);
        assert_eq!(player.strength, 15);
    }

    #[test]
    fn test_level_up_does_not_clamp_health() {
        let mut player = Player::new("Hero", 95, 10);
        level_up(&mut player);
        assert_eq!(player.health, 115);
    }

    #[test]
    fn test_level_up_when_defeated_health() {
        let mut player = Player::new("Hero", 0, 10);
        level_up(&mut player);
        assert_eq!(player.health, 20);
        assert_eq!(player.level, 2);
    }

    #[test]
    fn test_level_up_saturates_stats() {
        let mut player = Player::new("Hero", i32::MAX, i32::MAX);
        player.experience = i32::MAX;
        let event = grant_experience(&mut player, i32::MAX).unwrap();
        assert_eq!(event.new_level, 2);
        assert_eq!(player.health, i32::MAX);
        assert_eq!(player.strength, i32::MAX);
        assert_eq!(player.experience, 0);
    }
}
