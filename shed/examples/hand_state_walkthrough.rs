//! Hand State Walkthrough
//!
//! Deals a two-player game from a fixed seed and walks one hand through every
//! hand state as cards are drawn and played.

use rand::{SeedableRng, rngs::StdRng};
use shed::{GameEngine, PlayerName};

fn main() {
    println!("=== Shed Hand State Walkthrough ===\n");

    let mut rng = StdRng::seed_from_u64(2024);
    let mut engine = match GameEngine::new(&["nancy", "mae"], &mut rng) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("couldn't deal: {err}");
            return;
        }
    };
    let nancy = PlayerName::new("nancy");
    let mae = PlayerName::new("mae");

    println!("Dealt cards ({} left to draw)", engine.unplayed_count());
    for player in engine.players() {
        let hand: Vec<String> = player.hand().iter().map(ToString::to_string).collect();
        println!("  {}: hand [{}], state {}", player.name(), hand.join(", "), player.hand_state());
    }

    println!("\nStep 1: nancy draws two cards");
    report(engine.draw(&nancy, 2));

    println!("Step 2: nancy plays three cards");
    let hand = engine.player(&nancy).map(|p| p.hand()).unwrap_or_default();
    report(engine.play(&nancy, &hand[..3]));

    println!("Step 3: mae draws the rest of the pile");
    let remaining = engine.unplayed_count();
    report(engine.draw(&mae, remaining));

    println!("Step 4: nancy plays one card with the pile empty");
    let hand = engine.player(&nancy).map(|p| p.hand()).unwrap_or_default();
    report(engine.play(&nancy, &hand[..1]));

    println!("Step 5: nancy plays the rest of the hand");
    let hand = engine.player(&nancy).map(|p| p.hand()).unwrap_or_default();
    report(engine.play(&nancy, &hand));

    println!("Step 6: nancy tries to draw again");
    report(engine.draw(&nancy, 1));
}

fn report<E: std::fmt::Display>(result: Result<shed::HandState, E>) {
    match result {
        Ok(state) => println!("  -> state {state}\n"),
        Err(err) => println!("  -> error: {err}\n"),
    }
}
