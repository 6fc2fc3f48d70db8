use serde::{Deserialize, Serialize};

/// One purchasable entry in a town shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub name: String,
    pub price: i32,
}

impl ShopItem {
    pub fn new(name: impl Into<String>, price: i32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Item names bound to prices, kept in listing order.
///
/// Read-only once built. If a name appears more than once the first
/// entry wins on lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<ShopItem>,
}

impl Catalog {
    pub fn new(items: Vec<ShopItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ShopItem] {
        &self.items
    }

    pub fn price(&self, name: &str) -> Option<i32> {
        self.items.iter().find(|i| i.name == name).map(|i| i.price)
    }
}

/// A town with a single shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Town {
    pub name: String,
    pub catalog: Catalog,
}

impl Town {
    pub fn new(name: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            name: name.into(),
            catalog,
        }
    }
}
