//! Towns and their shops.

pub mod logic;
pub mod types;

pub use types::*;
