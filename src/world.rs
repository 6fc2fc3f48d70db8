//! Session configuration: the hero, the enemy roster and the town.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::character::Player;
use crate::combat::EnemyTemplate;
use crate::error::ConfigError;
use crate::town::{Catalog, ShopItem, Town};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub name: String,
    pub health: i32,
    pub strength: i32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            name: "Hero".to_string(),
            health: 100,
            strength: 10,
        }
    }
}

/// Everything needed to start a session.
///
/// Missing fields in a config file fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub hero: HeroConfig,
    pub enemies: Vec<EnemyTemplate>,
    pub town: Town,
    /// Fixed seed for loot and enemy selection. Random when unset.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            hero: HeroConfig::default(),
            enemies: vec![
                EnemyTemplate::new("Goblin", 30, 5, 20),
                EnemyTemplate::new("Wolf", 40, 8, 30),
            ],
            town: Town::new(
                "Greenville",
                Catalog::new(vec![
                    ShopItem::new("Sword", 30),
                    ShopItem::new("Shield", 20),
                    ShopItem::new("Health Potion", 50),
                ]),
            ),
            seed: None,
        }
    }
}

impl WorldConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WorldConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enemies.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one enemy is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn new_player(&self) -> Player {
        Player::new(self.hero.name.clone(), self.hero.health, self.hero.strength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_world() {
        let config = WorldConfig::default();
        assert_eq!(config.enemies.len(), 2);
        assert_eq!(config.town.name, "Greenville");
        assert_eq!(config.town.catalog.price("Health Potion"), Some(50));

        let player = config.new_player();
        assert_eq!(player.name, "Hero");
        assert_eq!(player.health, 100);
        assert_eq!(player.strength, 10);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WorldConfig::from_json(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.hero, HeroConfig::default());
        assert_eq!(config.enemies.len(), 2);
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "hero": {"name": "Ayla", "health": 80, "strength": 12},
            "enemies": [{"name": "Rat", "health": 5, "strength": 1, "experience_reward": 5}],
            "town": {"name": "Dunmore", "catalog": [{"name": "Rope", "price": 3}]}
        }"#;
        let config = WorldConfig::from_json(json).unwrap();
        assert_eq!(config.hero.name, "Ayla");
        assert_eq!(config.enemies[0], EnemyTemplate::new("Rat", 5, 1, 5));
        assert_eq!(config.town.catalog.price("Rope"), Some(3));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_empty_roster_rejected() {
        let result = WorldConfig::from_json(r#"{"enemies": []}"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = WorldConfig::from_json("{ hero: ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = WorldConfig::load(Path::new("/nonexistent/adventure.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
