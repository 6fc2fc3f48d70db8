//! Turn-based encounter types and resolution.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
