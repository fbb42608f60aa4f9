//! Players and the cards they own.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{
    constants::CARDS_PER_GROUP,
    entities::{Card, CardGroup, PlayerName},
    errors::InvalidInput,
    state_machine::{HandInputs, HandState},
};

/// A full partition of a player's dealt cards.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct PlayerCards {
    pub hand_cards: Vec<Card>,
    pub visible_table_cards: Vec<Card>,
    pub hidden_table_cards: Vec<Card>,
    pub hand_state: HandState,
}

impl PlayerCards {
    /// A partition starting from the initial hand state.
    #[must_use]
    pub fn new(
        hand_cards: Vec<Card>,
        visible_table_cards: Vec<Card>,
        hidden_table_cards: Vec<Card>,
    ) -> Self {
        Self {
            hand_cards,
            visible_table_cards,
            hidden_table_cards,
            hand_state: HandState::default(),
        }
    }

    fn validate(&self) -> Result<(), InvalidInput> {
        let groups = [
            (CardGroup::Hand, &self.hand_cards),
            (CardGroup::VisibleTable, &self.visible_table_cards),
            (CardGroup::HiddenTable, &self.hidden_table_cards),
        ];

        for (group, cards) in groups {
            if cards.len() != CARDS_PER_GROUP {
                return Err(InvalidInput::WrongGroupSize {
                    group,
                    expected: CARDS_PER_GROUP,
                    actual: cards.len(),
                });
            }
        }

        if let Some(card) = groups
            .iter()
            .flat_map(|(_, cards)| cards.iter())
            .find(|c| !c.has_valid_value())
        {
            return Err(invalid_value(card));
        }

        let mut seen = HashSet::with_capacity(3 * CARDS_PER_GROUP);
        for (_, cards) in groups {
            for card in cards {
                if !seen.insert(*card) {
                    return Err(InvalidInput::DuplicateCard(*card));
                }
            }
        }

        if let Some(card) = self
            .visible_table_cards
            .iter()
            .find(|c| !c.is_visible_to_all())
        {
            return Err(InvalidInput::VisibilityMismatch {
                group: CardGroup::VisibleTable,
                card: *card,
            });
        }
        if let Some(card) = self
            .hidden_table_cards
            .iter()
            .find(|c| c.is_visible_to_all())
        {
            return Err(InvalidInput::VisibilityMismatch {
                group: CardGroup::HiddenTable,
                card: *card,
            });
        }

        Ok(())
    }
}

fn invalid_value(card: &Card) -> InvalidInput {
    InvalidInput::InvalidCardValue {
        value: card.value,
        suit: card.suit,
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    name: PlayerName,
    hand_cards: Vec<Card>,
    visible_table_cards: Vec<Card>,
    hidden_table_cards: Vec<Card>,
    hand_state: HandState,
    dealt: bool,
    /// Set by the first draw or play. Cards can't be reorganised after that.
    hand_changed: bool,
}

impl Player {
    #[must_use]
    pub fn new(name: PlayerName) -> Self {
        Self {
            name,
            hand_cards: Vec::with_capacity(CARDS_PER_GROUP),
            visible_table_cards: Vec::with_capacity(CARDS_PER_GROUP),
            hidden_table_cards: Vec::with_capacity(CARDS_PER_GROUP),
            hand_state: HandState::default(),
            dealt: false,
            hand_changed: false,
        }
    }

    /// Assigns the player's dealt cards. This can only happen once.
    pub fn set_cards(&mut self, cards: PlayerCards) -> Result<(), InvalidInput> {
        if self.dealt {
            return Err(InvalidInput::CardsAlreadyDealt);
        }
        cards.validate()?;

        let PlayerCards {
            hand_cards,
            visible_table_cards,
            hidden_table_cards,
            hand_state,
        } = cards;
        self.hand_cards = hand_cards;
        self.visible_table_cards = visible_table_cards;
        self.hidden_table_cards = hidden_table_cards;
        self.hand_state = hand_state;
        self.dealt = true;
        Ok(())
    }

    /// Adds drawn cards to the hand. Drawing implies the pile had cards, so
    /// the transition is always made with cards remaining.
    pub fn add_cards_to_hand(&mut self, cards: Vec<Card>) -> Result<HandState, InvalidInput> {
        self.receive_cards(cards, true)
    }

    /// Adds cards to the hand and transitions the hand state. `cards_remaining`
    /// says whether the pile still has cards after these were taken.
    ///
    /// Receiving no cards changes nothing, so it doesn't count as the first
    /// hand change either.
    pub fn receive_cards(
        &mut self,
        cards: Vec<Card>,
        cards_remaining: bool,
    ) -> Result<HandState, InvalidInput> {
        if cards.is_empty() {
            return Ok(self.hand_state);
        }

        let mut incoming = HashSet::with_capacity(cards.len());
        for card in &cards {
            if !card.has_valid_value() {
                return Err(invalid_value(card));
            }
            if !incoming.insert(*card) || self.owns(card) {
                return Err(InvalidInput::DuplicateCard(*card));
            }
        }

        let next = self.transition(self.hand_cards.len() + cards.len(), cards_remaining)?;
        self.hand_cards.extend(cards);
        self.commit(next);
        Ok(next)
    }

    /// Takes `cards` out of the hand and returns them in the order asked for.
    /// Nothing is removed unless every card is in the hand, and removing no
    /// cards leaves the player untouched.
    pub fn remove_from_hand(
        &mut self,
        cards: &[Card],
        cards_remaining: bool,
    ) -> Result<Vec<Card>, InvalidInput> {
        if cards.is_empty() {
            return Ok(Vec::new());
        }

        let mut remaining = self.hand_cards.clone();
        let mut removed = Vec::with_capacity(cards.len());
        for card in cards {
            let idx = remaining
                .iter()
                .position(|c| c == card)
                .ok_or(InvalidInput::CardNotInHand(*card))?;
            removed.push(remaining.remove(idx));
        }

        let next = self.transition(remaining.len(), cards_remaining)?;
        self.hand_cards = remaining;
        self.commit(next);
        Ok(removed)
    }

    /// Swaps cards between the hand and the visible table before play
    /// starts.
    ///
    /// The hand followed by the visible table cards are numbered 0 to 5. The
    /// three chosen positions become the new hand and the other three,
    /// revealed, become the visible table cards. Both keep their numbered
    /// order.
    pub fn reorganise(&mut self, hand_choices: [usize; 3]) -> Result<(), InvalidInput> {
        if !self.dealt
            || self.hand_changed
            || self.hand_cards.len() != CARDS_PER_GROUP
            || self.visible_table_cards.len() != CARDS_PER_GROUP
        {
            return Err(InvalidInput::ReorganisationUnavailable);
        }

        let mut choices = hand_choices;
        choices.sort_unstable();
        let all_visible = 2 * CARDS_PER_GROUP;
        if choices.windows(2).any(|w| w[0] == w[1]) || choices.iter().any(|&i| i >= all_visible) {
            return Err(InvalidInput::InvalidReorganisation);
        }

        let mut hand = Vec::with_capacity(CARDS_PER_GROUP);
        let mut visible = Vec::with_capacity(CARDS_PER_GROUP);
        let cards = self.hand_cards.drain(..).chain(self.visible_table_cards.drain(..));
        for (i, mut card) in cards.enumerate() {
            if choices.contains(&i) {
                hand.push(card);
            } else {
                card.reveal();
                visible.push(card);
            }
        }
        debug!("{} reorganised hand to {:?}", self.name, choices);
        self.hand_cards = hand;
        self.visible_table_cards = visible;
        Ok(())
    }

    fn owns(&self, card: &Card) -> bool {
        self.hand_cards.contains(card)
            || self.visible_table_cards.contains(card)
            || self.hidden_table_cards.contains(card)
    }

    fn transition(&self, hand_count: usize, cards_remaining: bool) -> Result<HandState, InvalidInput> {
        let next_hand_count = i32::try_from(hand_count).unwrap_or(i32::MAX);
        self.hand_state
            .next(HandInputs::new(cards_remaining, next_hand_count))
    }

    fn commit(&mut self, next: HandState) {
        self.hand_state = next;
        self.hand_changed = true;
    }

    #[must_use]
    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    #[must_use]
    pub fn hand_state(&self) -> HandState {
        self.hand_state
    }

    /// Snapshot of the hand.
    #[must_use]
    pub fn hand(&self) -> Vec<Card> {
        self.hand_cards.clone()
    }

    /// Snapshot of the table cards, visible ones first.
    #[must_use]
    pub fn table_cards(&self) -> Vec<Card> {
        self.visible_table_cards
            .iter()
            .chain(&self.hidden_table_cards)
            .copied()
            .collect()
    }

    #[must_use]
    pub fn visible_table_cards(&self) -> &[Card] {
        &self.visible_table_cards
    }

    #[must_use]
    pub fn hidden_table_cards(&self) -> &[Card] {
        &self.hidden_table_cards
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand_cards.len() + self.visible_table_cards.len() + self.hidden_table_cards.len()
    }
}
