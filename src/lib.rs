//! Adventure - Text-Driven Turn-Based RPG Library
//!
//! Exposes the encounter, progression and marketplace rules along with the
//! line-oriented session driver used by the binary.

pub mod character;
pub mod combat;
pub mod core;
pub mod error;
pub mod input;
pub mod session;
pub mod town;
pub mod world;

pub use character::Player;
pub use combat::{
    resolve_turn, resolve_turn_with, spawn_enemy, CombatAction, CombatEvent, Encounter,
    EncounterState, Enemy, EnemyTemplate, TurnOutcome,
};
pub use error::{ConfigError, GameError};
pub use session::{Session, SessionEnd};
pub use town::{Catalog, ShopItem, Town};
pub use world::WorldConfig;
