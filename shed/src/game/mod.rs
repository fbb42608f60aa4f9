//! Shed game core.
//!
//! This module provides the dealing and ownership model:
//! - Cards, suits, and the 52-card deck
//! - Players holding a hand / visible table / hidden table partition
//! - The hand state machine that categorises hand size
//! - The engine that deals a deck across players and owns the piles

// Submodules
pub mod config;
pub mod constants;
pub mod engine;
pub mod entities;
pub mod errors;
pub mod player;
pub mod random;
pub mod state_machine;

pub use config::GameConfig;
pub use engine::{GameEngine, GameView, PlayerView};
pub use errors::{InvalidConfiguration, InvalidInput};
pub use player::{Player, PlayerCards};
pub use state_machine::{HandInputs, HandState, next_hand_state};
