use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use shed::{Deck, GameEngine, HandInputs, HandState, PlayerName};
use std::hint::black_box;

fn player_names(n_players: usize) -> Vec<String> {
    (0..n_players).map(|i| format!("player{i}")).collect()
}

/// Benchmark building and shuffling a deck
fn bench_deck_shuffle(c: &mut Criterion) {
    c.bench_function("deck_shuffle", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| Deck::new(&mut rng));
    });
}

/// Benchmark restoring canonical order after a shuffle
fn bench_deck_order(c: &mut Criterion) {
    c.bench_function("deck_order", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter_batched(
            || Deck::new(&mut rng),
            |mut deck| {
                deck.order();
                deck
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

/// Benchmark dealing with different player counts
fn bench_deal(c: &mut Criterion) {
    let mut group = c.benchmark_group("deal");

    for n_players in [2, 3, 4, 5].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_players", n_players)),
            n_players,
            |b, &n| {
                let names = player_names(n);
                let mut rng = StdRng::seed_from_u64(0);
                b.iter(|| GameEngine::new(&names, &mut rng));
            },
        );
    }

    group.finish();
}

/// Benchmark hand state transitions across every input category
fn bench_hand_state_transitions(c: &mut Criterion) {
    let inputs = [
        HandInputs::new(true, 4),
        HandInputs::new(true, 2),
        HandInputs::new(false, 3),
        HandInputs::new(false, 0),
    ];
    c.bench_function("hand_state_transitions", |b| {
        b.iter(|| {
            let mut state = HandState::Replenishing;
            for input in inputs {
                state = black_box(state).next(input).unwrap_or(state);
            }
            state
        });
    });
}

/// Benchmark drawing the whole pile one card at a time
fn bench_draw_pile(c: &mut Criterion) {
    let names = player_names(2);
    let drawer = PlayerName::new("player0");
    c.bench_function("draw_pile", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter_batched(
            || GameEngine::new(&names, &mut rng).unwrap(),
            |mut engine| {
                while engine.draw(&drawer, 1).is_ok() {}
                engine
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(deck_operations, bench_deck_shuffle, bench_deck_order,);

criterion_group!(
    game_operations,
    bench_deal,
    bench_hand_state_transitions,
    bench_draw_pile,
);

criterion_main!(deck_operations, game_operations);
