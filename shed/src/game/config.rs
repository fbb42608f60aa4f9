//! Game configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{
    constants::{MAX_PLAYERS, MIN_PLAYERS},
    entities::PlayerName,
    errors::InvalidConfiguration,
};

/// Everything needed to deal a game.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct GameConfig {
    /// Names of the players, in seating order.
    pub player_names: Vec<String>,

    /// Seed for a reproducible shuffle. A fresh thread-local generator is
    /// used when unset.
    pub seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub fn new(player_names: Vec<String>, seed: Option<u64>) -> Self {
        Self { player_names, seed }
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn names(&self) -> Vec<PlayerName> {
        self.player_names.iter().map(|n| PlayerName::new(n)).collect()
    }

    /// Checks that there are between two and five players and that no two
    /// names are the same once sanitised.
    pub fn validate(&self) -> Result<(), InvalidConfiguration> {
        validate_player_names(&self.names())
    }
}

/// Checks that a deck can be dealt to `names` and that each name is unique.
pub fn validate_player_names(names: &[PlayerName]) -> Result<(), InvalidConfiguration> {
    let count = names.len();
    if count < MIN_PLAYERS {
        return Err(InvalidConfiguration::NotEnoughPlayers { count });
    }
    if count > MAX_PLAYERS {
        return Err(InvalidConfiguration::TooManyPlayers {
            count,
            max: MAX_PLAYERS,
        });
    }

    let mut seen = HashSet::with_capacity(count);
    for name in names {
        if !seen.insert(name) {
            return Err(InvalidConfiguration::DuplicatePlayerName(name.clone()));
        }
    }
    Ok(())
}
