//! Dealing and pile ownership.
//!
//! The engine builds a single shuffled deck per game, hands each player a
//! contiguous run of nine cards, and keeps the rest as the unplayed pile.
//! Draws and plays go through the engine so the owning player's hand state is
//! always computed against the real state of the pile.

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::{
    config::{GameConfig, validate_player_names},
    constants::{CARDS_PER_GROUP, CARDS_PER_PLAYER},
    entities::{Card, Deck, PlayerName},
    errors::{InvalidConfiguration, InvalidInput},
    player::{Player, PlayerCards},
    random::RandomSource,
    state_machine::HandState,
};

/// A player's cards as the presentation layer sees them.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PlayerView {
    pub name: PlayerName,
    pub hand: Vec<Card>,
    /// Visible table cards followed by hidden ones.
    pub table_cards: Vec<Card>,
    pub hand_state: HandState,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().clone(),
            hand: player.hand(),
            table_cards: player.table_cards(),
            hand_state: player.hand_state(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GameView {
    pub unplayed_count: usize,
    pub played_count: usize,
    pub players: Vec<PlayerView>,
}

/// A dealt game.
#[derive(Debug)]
pub struct GameEngine {
    players: Vec<Player>,
    /// Draw pile. The front of the vector is the top of the pile.
    unplayed: Vec<Card>,
    /// Cards played out of hands.
    played: Vec<Card>,
}

impl GameEngine {
    /// Deals a new game to `names`, shuffling with `rng`.
    ///
    /// Fails without dealing anything if there are fewer than two players,
    /// more than a deck can serve, or repeated names.
    pub fn new<S, R>(names: &[S], rng: &mut R) -> Result<Self, InvalidConfiguration>
    where
        S: AsRef<str>,
        R: RandomSource + ?Sized,
    {
        let names: Vec<PlayerName> = names.iter().map(|n| PlayerName::new(n.as_ref())).collect();
        validate_player_names(&names)?;

        let mut cards = Deck::new(rng).into_cards();
        let unplayed = cards.split_off(CARDS_PER_PLAYER * names.len());

        let mut players = Vec::with_capacity(names.len());
        for (name, dealt) in names.into_iter().zip(cards.chunks_exact(CARDS_PER_PLAYER)) {
            let (hand, table) = dealt.split_at(CARDS_PER_GROUP);
            let (visible, hidden) = table.split_at(CARDS_PER_GROUP);
            let mut visible = visible.to_vec();
            visible.iter_mut().for_each(Card::reveal);

            let mut player = Player::new(name);
            player
                .set_cards(PlayerCards::new(hand.to_vec(), visible, hidden.to_vec()))
                .map_err(InvalidConfiguration::InvalidDeal)?;
            players.push(player);
        }

        info!(
            "dealt {} players, {} cards left to draw",
            players.len(),
            unplayed.len()
        );
        Ok(Self {
            players,
            unplayed,
            played: Vec::new(),
        })
    }

    /// Deals a game from `config`, seeding the shuffle when a seed is set.
    pub fn from_config(config: &GameConfig) -> Result<Self, InvalidConfiguration> {
        config.validate()?;
        match config.seed {
            Some(seed) => {
                debug!("shuffling with seed {seed}");
                Self::new(config.player_names.as_slice(), &mut StdRng::seed_from_u64(seed))
            }
            None => Self::new(config.player_names.as_slice(), &mut rand::rng()),
        }
    }

    /// Moves up to `count` cards from the top of the pile into `name`'s hand.
    /// A draw of zero leaves the player as they were.
    pub fn draw(&mut self, name: &PlayerName, count: usize) -> Result<HandState, InvalidInput> {
        let idx = self.player_index(name)?;
        if self.unplayed.is_empty() {
            return Err(InvalidInput::EmptyPile);
        }

        let take = count.min(self.unplayed.len());
        let drawn = self.unplayed[..take].to_vec();
        let cards_remaining = self.unplayed.len() > take;
        let state = self.players[idx].receive_cards(drawn, cards_remaining)?;
        self.unplayed.drain(..take);

        debug!("{name} drew {take}, {} left to draw", self.unplayed.len());
        Ok(state)
    }

    /// Moves `cards` out of `name`'s hand onto the play pile.
    pub fn play(&mut self, name: &PlayerName, cards: &[Card]) -> Result<HandState, InvalidInput> {
        let idx = self.player_index(name)?;
        let cards_remaining = !self.unplayed.is_empty();
        let player = &mut self.players[idx];
        let played = player.remove_from_hand(cards, cards_remaining)?;

        debug!("{name} played {} cards", played.len());
        self.played.extend(played);
        Ok(player.hand_state())
    }

    /// Lets `name` swap cards between hand and visible table before play.
    /// See [`Player::reorganise`].
    pub fn reorganise(
        &mut self,
        name: &PlayerName,
        hand_choices: [usize; 3],
    ) -> Result<(), InvalidInput> {
        let idx = self.player_index(name)?;
        self.players[idx].reorganise(hand_choices)
    }

    fn player_index(&self, name: &PlayerName) -> Result<usize, InvalidInput> {
        self.players
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| InvalidInput::UnknownPlayer(name.clone()))
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, name: &PlayerName) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    #[must_use]
    pub fn unplayed_count(&self) -> usize {
        self.unplayed.len()
    }

    #[must_use]
    pub fn unplayed_cards(&self) -> &[Card] {
        &self.unplayed
    }

    #[must_use]
    pub fn played_count(&self) -> usize {
        self.played.len()
    }

    #[must_use]
    pub fn player_views(&self) -> Vec<PlayerView> {
        self.players.iter().map(PlayerView::from).collect()
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        GameView {
            unplayed_count: self.unplayed_count(),
            played_count: self.played_count(),
            players: self.player_views(),
        }
    }
}
