//! # Shed
//!
//! Dealing and hand-state tracking for a round of Shed, a trick-based card
//! game where every player holds a hand, three face-up table cards, and three
//! face-down table cards.
//!
//! ## Architecture
//!
//! A game is built bottom-up:
//!
//! - **Deck**: the 52-card domain set, shuffled with an injected
//!   [`RandomSource`](game::random::RandomSource)
//! - **Player**: a partition of nine dealt cards into hand, visible table, and
//!   hidden table cards, plus the player's current [`HandState`]
//! - **Hand state machine**: a pure function categorising hand size, gated on
//!   whether the draw pile is exhausted
//! - **GameEngine**: deals one deck across the players and owns the unplayed
//!   pile
//!
//! ## Core Modules
//!
//! - [`game`]: cards, deck, players, the hand state machine, and the engine
//!
//! ## Example
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use shed::{GameEngine, HandState};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let engine = GameEngine::new(&["nancy", "mae"], &mut rng).unwrap();
//!
//! assert_eq!(engine.unplayed_count(), 52 - 2 * 9);
//! for player in engine.players() {
//!     assert_eq!(player.hand_state(), HandState::Replenishing);
//! }
//! ```

/// Core game logic: entities, dealing, and the hand state machine.
pub mod game;
pub use game::{
    GameConfig, GameEngine, GameView, HandInputs, HandState, InvalidConfiguration, InvalidInput,
    Player, PlayerCards, PlayerView,
    constants::{self, CARDS_PER_GROUP, CARDS_PER_PLAYER, DECK_SIZE, MAX_PLAYERS, MIN_PLAYERS},
    entities::{self, Card, CardGroup, Deck, PlayerName, Suit, Value},
    next_hand_state,
    random::RandomSource,
};
