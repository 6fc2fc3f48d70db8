//! Munnies and item purchases.

use tracing::{info, warn};

use crate::character::Player;
use crate::error::GameError;

/// A completed purchase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub item: String,
    pub price: i32,
    pub remaining_munnies: i32,
}

/// Adds munnies to the player. Any amount is accepted, with no upper bound.
pub fn grant_munnies(player: &mut Player, amount: i32) {
    player.munnies = player.munnies.saturating_add(amount);
}

/// Buys `item` at `price` if the player can afford it.
///
/// The price is trusted as given; catalog lookup is the caller's job.
/// On failure nothing is mutated.
pub fn purchase(player: &mut Player, item: &str, price: i32) -> Result<Receipt, GameError> {
    if player.munnies < price {
        warn!(player = %player.name, item, price, munnies = player.munnies, "purchase declined");
        return Err(GameError::InsufficientFunds {
            item: item.to_string(),
            price,
            available: player.munnies,
        });
    }

    player.munnies = player.munnies.saturating_sub(price);
    player.inventory.push(item.to_string());
    info!(player = %player.name, item, price, munnies = player.munnies, "item purchased");

    Ok(Receipt {
        item: item.to_string(),
        price,
        remaining_munnies: player.munnies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grant_munnies() {
        let mut player = Player::new("Hero", 100, 10);
        grant_munnies(&mut player, 20);
        assert_eq!(player.munnies, 50);
    }

    #[test]
    fn test_grant_negative_munnies() {
        let mut player = Player::new("Hero", 100, 10);
        grant_munnies(&mut player, -10);
        assert_eq!(player.munnies, 20);
    }

    #[test]
    fn test_purchase_success() {
        let mut player = Player::new("Hero", 100, 10);
        let receipt = purchase(&mut player, "Sword", 20).unwrap();
        assert_eq!(receipt.item, "Sword");
        assert_eq!(receipt.remaining_munnies, 10);
        assert_eq!(player.munnies, 10);
        assert_eq!(player.inventory, vec!["Sword"]);
    }

    #[test]
    fn test_purchase_exact_funds() {
        let mut player = Player::new("Hero", 100, 10);
        assert!(purchase(&mut player, "Sword", 30).is_ok());
        assert_eq!(player.munnies, 0);
    }

    #[test]
    fn test_purchase_insufficient_funds_no_mutation() {
        let mut player = Player::new("Hero", 100, 10);
        player.munnies = 5;
        let before = player.clone();

        let result = purchase(&mut player, "Shield", 10);
        assert_eq!(
            result,
            Err(GameError::InsufficientFunds {
                item: "Shield".to_string(),
                price: 10,
                available: 5,
            })
        );
        assert_eq!(player, before);
    }

    #[test]
    fn test_purchase_allows_duplicates() {
        let mut player = Player::new("Hero", 100, 10);
        player.munnies = 100;
        purchase(&mut player, "Health Potion", 50).unwrap();
        purchase(&mut player, "Health Potion", 50).unwrap();
        assert_eq!(player.item_count("Health Potion"), 2);
        assert_eq!(player.munnies, 0);
    }

    #[test]
    fn test_grant_munnies_saturates() {
        let mut player = Player::new("Hero", 100, 10);
        grant_munnies(&mut player, i32::MAX);
        assert_eq!(player.munnies, i32::MAX);
    }

    #[test]
    fn test_negative_price_saturates() {
        let mut player = Player::new("Hero", 100, 10);
        player.munnies = i32::MAX;
        let receipt = purchase(&mut player, "Refund", -5).unwrap();
        assert_eq!(receipt.remaining_munnies, i32::MAX);
    }
}
