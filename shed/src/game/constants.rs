/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Highest card value (King). Aces are 1.
pub const MAX_VALUE: u8 = 13;

/// Cards in each of a player's three groups (hand, visible table, hidden table).
pub const CARDS_PER_GROUP: usize = 3;

/// Cards dealt to each player at the start of a game.
pub const CARDS_PER_PLAYER: usize = 3 * CARDS_PER_GROUP;

/// Hand size above which a player is holding a surplus.
pub const HAND_LIMIT: usize = CARDS_PER_GROUP;

/// The fewest players a game can be dealt to.
pub const MIN_PLAYERS: usize = 2;

/// The most players a single deck can deal nine cards to.
pub const MAX_PLAYERS: usize = DECK_SIZE / CARDS_PER_PLAYER;

/// Player names are truncated to this many characters.
pub const MAX_NAME_LENGTH: usize = 32;
