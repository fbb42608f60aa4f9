//! Error types for dealing and hand-state transitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    entities::{Card, CardGroup, PlayerName, Suit, Value},
    state_machine::HandState,
};

/// A game that can't be constructed. Nothing is dealt when this is returned.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum InvalidConfiguration {
    #[error("at least 2 players required, got {count}")]
    NotEnoughPlayers { count: usize },
    #[error("at most {max} players can be dealt from one deck, got {count}")]
    TooManyPlayers { count: usize, max: usize },
    #[error("player name {0} is taken")]
    DuplicatePlayerName(PlayerName),
    #[error("invalid game state: dealt an invalid partition ({0})")]
    InvalidDeal(InvalidInput),
}

/// An operation was asked to do something outside its contract. The target
/// is left exactly as it was.
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum InvalidInput {
    #[error("hand count cannot be negative, got {0}")]
    NegativeHandCount(i32),
    #[error("cards remaining cannot be true once the pile is exhausted (state {state})")]
    PileExhausted { state: HandState },
    #[error("{group} needs {expected} cards, got {actual}")]
    WrongGroupSize {
        group: CardGroup,
        expected: usize,
        actual: usize,
    },
    #[error("card value must be between 1 and 13, got {value} of {suit}")]
    InvalidCardValue { value: Value, suit: Suit },
    #[error("{0} dealt more than once")]
    DuplicateCard(Card),
    #[error("{card} has the wrong visibility for the {group} cards")]
    VisibilityMismatch { group: CardGroup, card: Card },
    #[error("cards already dealt")]
    CardsAlreadyDealt,
    #[error("cards can only be reorganised before the first draw or play")]
    ReorganisationUnavailable,
    #[error("pick 3 distinct cards out of 6")]
    InvalidReorganisation,
    #[error("{0} isn't in the hand")]
    CardNotInHand(Card),
    #[error("no player named {0}")]
    UnknownPlayer(PlayerName),
    #[error("no cards left to draw")]
    EmptyPile,
}
