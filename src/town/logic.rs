use tracing::warn;

use super::types::*;
use crate::character::Player;
use crate::core::economy::{purchase, Receipt};
use crate::error::GameError;

impl Town {
    /// Everything on sale, in listing order.
    pub fn list_catalog(&self) -> &[ShopItem] {
        self.catalog.items()
    }

    /// Sells `item_name` to the player at the catalog price.
    pub fn sell(&self, player: &mut Player, item_name: &str) -> Result<Receipt, GameError> {
        let Some(price) = self.catalog.price(item_name) else {
            warn!(town = %self.name, item = item_name, "item not in catalog");
            return Err(GameError::ItemNotFound(item_name.to_string()));
        };
        purchase(player, item_name, price)
    }
}
