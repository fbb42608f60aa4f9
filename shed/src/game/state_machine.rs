//! Hand state machine.
//!
//! A player's hand is tracked as a category rather than a raw count. The
//! category depends on the previous category, whether the draw pile still
//! has cards, and the new hand size. Once the pile runs out a hand can only
//! move between [`HandState::Exhausted`] and [`HandState::Empty`]; there's
//! no way back to the replenishing states.
//!
//! ```text
//! from    | (true, >3) | (true, <=3) | (false, >0) | (false, 0)
//! --------+------------+-------------+-------------+-----------
//! A, B    | B          | A           | C           | D
//! C, D    | invalid    | invalid     | C           | D
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{constants::HAND_LIMIT, errors::InvalidInput};

/// Hand-size category.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum HandState {
    /// `A`: at most three cards and the pile can still top the hand up.
    #[default]
    #[serde(rename = "A")]
    Replenishing,
    /// `B`: more than three cards while the pile still has cards.
    #[serde(rename = "B")]
    Surplus,
    /// `C`: some cards left in hand, nothing left to draw.
    #[serde(rename = "C")]
    Exhausted,
    /// `D`: no cards in hand, nothing left to draw.
    #[serde(rename = "D")]
    Empty,
}

impl HandState {
    /// Letter code for the state.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Replenishing => 'A',
            Self::Surplus => 'B',
            Self::Exhausted => 'C',
            Self::Empty => 'D',
        }
    }

    /// Whether this state can only be reached after the pile ran out.
    #[must_use]
    pub const fn is_pile_exhausted(self) -> bool {
        matches!(self, Self::Exhausted | Self::Empty)
    }

    /// Computes the state that follows `self` given `inputs`.
    pub fn next(self, inputs: HandInputs) -> Result<Self, InvalidInput> {
        let HandInputs {
            cards_remaining,
            next_hand_count,
        } = inputs;
        if next_hand_count < 0 {
            return Err(InvalidInput::NegativeHandCount(next_hand_count));
        }

        // Non-negative, so the cast is lossless.
        let count = next_hand_count as usize;
        let next = if cards_remaining {
            if self.is_pile_exhausted() {
                return Err(InvalidInput::PileExhausted { state: self });
            }
            if count > HAND_LIMIT {
                Self::Surplus
            } else {
                Self::Replenishing
            }
        } else if count > 0 {
            Self::Exhausted
        } else {
            Self::Empty
        };

        if next != self {
            debug!("hand state {self} -> {next} ({count} cards, pile empty: {})", !cards_remaining);
        }
        Ok(next)
    }
}

impl fmt::Display for HandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// What changed about a hand.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HandInputs {
    /// Whether the draw pile still has cards.
    pub cards_remaining: bool,
    /// Hand size after the change. Signed so that callers computing a count
    /// can't underflow silently; negative counts are rejected.
    pub next_hand_count: i32,
}

impl HandInputs {
    #[must_use]
    pub const fn new(cards_remaining: bool, next_hand_count: i32) -> Self {
        Self {
            cards_remaining,
            next_hand_count,
        }
    }
}

/// Next hand state.
///
/// With no current state or no inputs this is the start of a game, which is
/// always [`HandState::Replenishing`]. Otherwise see [`HandState::next`].
pub fn next_hand_state(
    current: Option<HandState>,
    inputs: Option<HandInputs>,
) -> Result<HandState, InvalidInput> {
    match (current, inputs) {
        (Some(state), Some(inputs)) => state.next(inputs),
        _ => Ok(HandState::Replenishing),
    }
}
