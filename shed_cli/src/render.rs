//! Plain-text rendering of a dealt game.

use shed::{Card, GameView, PlayerView};
use std::fmt::Write;

const FACE_DOWN: &str = "[face down]";

/// Renders every player's cards and the pile sizes.
pub fn render_game(view: &GameView) -> String {
    let mut out = String::new();
    for player in &view.players {
        out.push_str(&render_player(player));
        out.push('\n');
    }
    let _ = writeln!(out, "Cards left to draw: {}", view.unplayed_count);
    if view.played_count > 0 {
        let _ = writeln!(out, "Cards played: {}", view.played_count);
    }
    out
}

/// Renders one player's hand and table. Hidden table cards are shown face
/// down.
pub fn render_player(player: &PlayerView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (hand state {})", player.name, player.hand_state);
    let _ = writeln!(out, "  Hand:  {}", join(player.hand.iter().map(Card::name)));
    let table = player.table_cards.iter().map(|card| {
        if card.is_visible_to_all() {
            card.name()
        } else {
            FACE_DOWN.to_string()
        }
    });
    let _ = writeln!(out, "  Table: {}", join(table));
    out
}

fn join(names: impl Iterator<Item = String>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};
    use shed::GameEngine;

    fn view() -> GameView {
        GameEngine::new(&["nancy", "mae"], &mut StdRng::seed_from_u64(5))
            .unwrap()
            .view()
    }

    #[test]
    fn test_render_player_hides_face_down_cards() {
        let view = view();
        let rendered = render_player(&view.players[0]);
        assert!(rendered.starts_with("nancy (hand state A)"));
        assert_eq!(rendered.matches(FACE_DOWN).count(), 3);
        for card in &view.players[0].hand {
            assert!(rendered.contains(&card.name()));
        }
    }

    #[test]
    fn test_render_game_lists_pile() {
        let rendered = render_game(&view());
        assert!(rendered.contains("mae (hand state A)"));
        assert!(rendered.contains("Cards left to draw: 34"));
        assert!(!rendered.contains("Cards played"));
    }
}
