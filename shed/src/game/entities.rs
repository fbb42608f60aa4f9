use serde::{Deserialize, Deserializer, Serialize, de};
use std::{
    borrow::Cow,
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use super::{constants, random::RandomSource};

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        };
        write!(f, "{repr}")
    }
}

/// Placeholder for card values (ace=1 ... king=13).
pub type Value = u8;

/// A playing card.
///
/// A card's identity is its face, the `(value, suit)` pair. Equality,
/// hashing, and ordering ignore the visibility and in-play flags, so the same
/// face compares equal whether or not it has been revealed.
///
/// Deserializing rejects values outside `1..=13`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Card {
    pub value: Value,
    pub suit: Suit,
    visible_to_all: bool,
    in_play: bool,
}

impl Card {
    /// A fresh, face-down card that's in play.
    #[must_use]
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self {
            value,
            suit,
            visible_to_all: false,
            in_play: true,
        }
    }

    /// Human-readable name, e.g. "Ace of Spades" or "7 of Hearts".
    #[must_use]
    pub fn name(&self) -> String {
        let label: Cow<'static, str> = match self.value {
            1 => "Ace".into(),
            11 => "Jack".into(),
            12 => "Queen".into(),
            13 => "King".into(),
            v => v.to_string().into(),
        };
        format!("{label} of {}", self.suit)
    }

    /// Whether the value is one a real deck holds (ace to king).
    #[must_use]
    pub const fn has_valid_value(&self) -> bool {
        self.value >= 1 && self.value <= constants::MAX_VALUE
    }

    #[must_use]
    pub const fn is_visible_to_all(&self) -> bool {
        self.visible_to_all
    }

    #[must_use]
    pub const fn is_in_play(&self) -> bool {
        self.in_play
    }

    /// Turns the card face up for everyone. Once revealed, a card stays
    /// revealed.
    pub(crate) fn reveal(&mut self) {
        self.visible_to_all = true;
    }

    fn face(&self) -> (Value, Suit) {
        (self.value, self.suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Fields {
            value: Value,
            suit: Suit,
            visible_to_all: bool,
            in_play: bool,
        }

        let Fields {
            value,
            suit,
            visible_to_all,
            in_play,
        } = Fields::deserialize(deserializer)?;
        let card = Self {
            value,
            suit,
            visible_to_all,
            in_play,
        };
        if !card.has_valid_value() {
            return Err(de::Error::custom(format!(
                "card value must be between 1 and {}, got {value}",
                constants::MAX_VALUE
            )));
        }
        Ok(card)
    }
}

impl Eq for Card {}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.face() == other.face()
    }
}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.face().hash(state);
    }
}

impl Ord for Card {
    // Suit-major so a sorted set of cards reads one suit at a time.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.suit, self.value).cmp(&(other.suit, other.value))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The three groups a player's cards are partitioned into.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum CardGroup {
    Hand,
    VisibleTable,
    HiddenTable,
}

impl fmt::Display for CardGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Hand => "hand",
            Self::VisibleTable => "visible table",
            Self::HiddenTable => "hidden table",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full deck, shuffled with `rng`.
    pub fn new<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Fisher-Yates: walk down from the last card, swapping each position
    /// with a uniformly chosen position at or below it.
    pub fn shuffle<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.index_below(i + 1);
            self.cards.swap(i, j);
        }
    }

    /// Restores canonical order: by suit, then by value.
    pub fn order(&mut self) {
        self.cards.sort();
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::ALL
            .into_iter()
            .flat_map(|suit| (1..=constants::MAX_VALUE).map(move |value| Card::new(value, suit)))
            .collect();
        Self { cards }
    }
}

/// A player's display name. Names are addressable, so whitespace is replaced
/// and length is capped.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(s: &str) -> Self {
        let name: String = s
            .trim()
            .chars()
            .map(|c| if c.is_whitespace() { '_' } else { c })
            .take(constants::MAX_NAME_LENGTH)
            .collect();
        Self(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<'de> Deserialize<'de> for PlayerName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::new(&s))
    }
}

impl From<&str> for PlayerName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for PlayerName {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;

    /// Replays a fixed list of indices.
    struct ScriptedSource(Vec<usize>);

    impl RandomSource for ScriptedSource {
        fn index_below(&mut self, bound: usize) -> usize {
            let idx = self.0.remove(0);
            assert!(idx < bound);
            idx
        }
    }

    // === Card Tests ===

    #[test]
    fn test_card_names() {
        assert_eq!(Card::new(1, Suit::Spades).name(), "Ace of Spades");
        assert_eq!(Card::new(7, Suit::Hearts).name(), "7 of Hearts");
        assert_eq!(Card::new(10, Suit::Clubs).name(), "10 of Clubs");
        assert_eq!(Card::new(11, Suit::Diamonds).name(), "Jack of Diamonds");
        assert_eq!(Card::new(12, Suit::Hearts).name(), "Queen of Hearts");
        assert_eq!(Card::new(13, Suit::Spades).to_string(), "King of Spades");
    }

    #[test]
    fn test_card_value_range() {
        assert!(Card::new(1, Suit::Clubs).has_valid_value());
        assert!(Card::new(13, Suit::Clubs).has_valid_value());
        assert!(!Card::new(0, Suit::Clubs).has_valid_value());
        assert!(!Card::new(14, Suit::Clubs).has_valid_value());
    }

    #[test]
    fn test_card_deserialize_checks_value() {
        let mut card = Card::new(12, Suit::Hearts);
        card.reveal();
        let json = serde_json::to_string(&card).unwrap();
        let parsed: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, card);
        assert!(parsed.is_visible_to_all());

        for value in [0, 14, 200] {
            let json = format!(
                r#"{{"value":{value},"suit":"Clubs","visible_to_all":false,"in_play":true}}"#
            );
            let err = serde_json::from_str::<Card>(&json).unwrap_err();
            assert!(err.to_string().contains("between 1 and 13"));
        }
    }

    #[test]
    fn test_new_card_flags() {
        let card = Card::new(5, Suit::Clubs);
        assert!(!card.is_visible_to_all());
        assert!(card.is_in_play());
    }

    #[test]
    fn test_reveal_is_sticky() {
        let mut card = Card::new(5, Suit::Clubs);
        card.reveal();
        card.reveal();
        assert!(card.is_visible_to_all());
    }

    #[test]
    fn test_card_identity_ignores_visibility() {
        let hidden = Card::new(9, Suit::Diamonds);
        let mut shown = hidden;
        shown.reveal();
        assert_eq!(hidden, shown);

        let set: HashSet<Card> = [hidden, shown].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_card_ordering_is_suit_major() {
        assert!(Card::new(13, Suit::Clubs) < Card::new(1, Suit::Diamonds));
        assert!(Card::new(2, Suit::Spades) < Card::new(3, Suit::Spades));
    }

    // === Deck Tests ===

    #[test]
    fn test_deck_initialization() {
        let deck = Deck::default();
        assert_eq!(deck.len(), constants::DECK_SIZE);
        assert_eq!(deck.cards()[0], Card::new(1, Suit::Clubs));
        assert_eq!(deck.cards()[51], Card::new(13, Suit::Spades));
        assert!(deck.cards().iter().all(|c| !c.is_visible_to_all() && c.is_in_play()));
    }

    #[test]
    fn test_deck_has_every_face_once() {
        let deck = Deck::default();
        let faces: HashSet<(Value, Suit)> =
            deck.cards().iter().map(|c| (c.value, c.suit)).collect();
        assert_eq!(faces.len(), 52);
        for suit in Suit::ALL {
            for value in 1..=13 {
                assert!(faces.contains(&(value, suit)));
            }
        }
    }

    #[test]
    fn test_deck_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(1);
        let deck = Deck::new(&mut rng);
        assert_eq!(deck.len(), 52);

        let mut sorted = deck.clone().into_cards();
        sorted.sort();
        assert_eq!(sorted, Deck::default().into_cards());
    }

    #[test]
    fn test_deck_shuffle_changes_order() {
        let mut rng = StdRng::seed_from_u64(2);
        let deck = Deck::new(&mut rng);
        assert_ne!(deck, Deck::default());
    }

    #[test]
    fn test_seeded_shuffles_match() {
        let a = Deck::new(&mut StdRng::seed_from_u64(77));
        let b = Deck::new(&mut StdRng::seed_from_u64(77));
        assert_eq!(a.cards(), b.cards());
    }

    #[test]
    fn test_fisher_yates_swaps_from_the_back() {
        let mut deck = Deck::default();
        // Choosing j == i for every step leaves the deck untouched.
        let identity: Vec<usize> = (1..52).rev().collect();
        deck.shuffle(&mut ScriptedSource(identity));
        assert_eq!(deck, Deck::default());

        // Choosing 0 every time rotates the first card to the back.
        let mut deck = Deck::default();
        deck.shuffle(&mut ScriptedSource(vec![0; 51]));
        assert_eq!(deck.cards()[51], Card::new(1, Suit::Clubs));
        assert_eq!(deck.cards()[0], Card::new(2, Suit::Clubs));
    }

    #[test]
    fn test_deck_order_restores_canonical() {
        let mut deck = Deck::new(&mut StdRng::seed_from_u64(3));
        deck.order();
        assert_eq!(deck, Deck::default());
    }

    // === PlayerName Tests ===

    #[test]
    fn test_player_name_replaces_whitespace() {
        let name = PlayerName::new("mae  west");
        assert_eq!(name.as_str(), "mae__west");
    }

    #[test]
    fn test_player_name_trims_and_truncates() {
        let name = PlayerName::new(&format!("  {}  ", "x".repeat(100)));
        assert_eq!(name.as_str().len(), constants::MAX_NAME_LENGTH);
    }

    #[test]
    fn test_player_name_equality() {
        let a: PlayerName = "nancy".into();
        let b: PlayerName = "nancy".to_string().into();
        assert_eq!(a, b);
    }

    #[test]
    fn test_player_name_deserialize_sanitizes() {
        let name: PlayerName = serde_json::from_str("\"a b\"").unwrap();
        assert_eq!(name.to_string(), "a_b");
    }
}
