use tracing::info;

use crate::core::constants::*;
use crate::error::GameError;

/// The player-controlled character.
///
/// Constructor arguments are not validated; negative health or strength are
/// stored as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub health: i32,
    pub strength: i32,
    pub munnies: i32,
    pub level: u32,
    pub experience: i32,
    /// Item names in acquisition order. Duplicates are separate entries.
    pub inventory: Vec<String>,
}

impl Player {
    pub fn new(name: impl Into<String>, health: i32, strength: i32) -> Self {
        Self {
            name: name.into(),
            health,
            strength,
            munnies: STARTING_MUNNIES,
            level: STARTING_LEVEL,
            experience: 0,
            inventory: Vec::new(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    pub fn item_count(&self, item: &str) -> usize {
        self.inventory.iter().filter(|i| *i == item).count()
    }

    /// Removes the first instance of `item`. Returns false if none was held.
    pub fn remove_item(&mut self, item: &str) -> bool {
        match self.inventory.iter().position(|i| i == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    /// Consumes one usable item from the inventory.
    ///
    /// Only the recovery item has an effect: health is set to exactly
    /// [`RECOVERY_HEALTH`], even if it was higher.
    pub fn use_item(&mut self, item: &str) -> Result<(), GameError> {
        if item != RECOVERY_ITEM || !self.remove_item(item) {
            return Err(GameError::ItemNotFound(item.to_string()));
        }
        self.health = RECOVERY_HEALTH;
        info!(player = %self.name, item, health = self.health, "item used");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_defaults() {
        let player = Player::new("Hero", 100, 10);
        assert_eq!(player.name, "Hero");
        assert_eq!(player.health, 100);
        assert_eq!(player.strength, 10);
        assert_eq!(player.munnies, 30);
        assert_eq!(player.level, 1);
        assert_eq!(player.experience, 0);
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn test_negative_stats_accepted() {
        let player = Player::new("Ghost", -5, -1);
        assert_eq!(player.health, -5);
        assert_eq!(player.strength, -1);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_remove_item_removes_one_instance() {
        let mut player = Player::new("Hero", 100, 10);
        player.inventory = vec![
            "Health Potion".to_string(),
            "Sword".to_string(),
            "Health Potion".to_string(),
        ];
        assert!(player.remove_item("Health Potion"));
        assert_eq!(player.inventory, vec!["Sword", "Health Potion"]);
        assert_eq!(player.item_count("Health Potion"), 1);
    }

    #[test]
    fn test_remove_missing_item() {
        let mut player = Player::new("Hero", 100, 10);
        assert!(!player.remove_item("Shield"));
    }

    #[test]
    fn test_use_health_potion() {
        let mut player = Player::new("Hero", 50, 10);
        player.inventory.push("Health Potion".to_string());
        assert_eq!(player.use_item("Health Potion"), Ok(()));
        assert_eq!(player.health, 100);
        assert!(!player.has_item("Health Potion"));
    }

    #[test]
    fn test_use_potion_sets_absolute_health() {
        let mut player = Player::new("Hero", 140, 10);
        player.inventory.push("Health Potion".to_string());
        player.use_item("Health Potion").unwrap();
        assert_eq!(player.health, 100);
    }

    #[test]
    fn test_use_item_without_potion() {
        let mut player = Player::new("Hero", 50, 10);
        let result = player.use_item("Health Potion");
        assert_eq!(
            result,
            Err(GameError::ItemNotFound("Health Potion".to_string()))
        );
        assert_eq!(player.health, 50);
    }

    #[test]
    fn test_use_non_consumable_item() {
        let mut player = Player::new("Hero", 50, 10);
        player.inventory.push("Sword".to_string());
        assert!(player.use_item("Sword").is_err());
        assert_eq!(player.inventory, vec!["Sword"]);
        assert_eq!(player.health, 50);
    }
}
