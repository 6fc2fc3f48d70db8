//! Game rules shared by combat and the marketplace.

pub mod constants;
pub mod economy;
pub mod progression;

pub use constants::*;
pub use economy::*;
pub use progression::*;
