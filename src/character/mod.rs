//! Player character record and inventory.

pub mod player;

pub use player::*;
