//! Engine benchmarks: dealing, legal play, and undo.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use klondike_engine::{CardId, GameRng, GameState, PileId, Settings};

/// Play greedily: safe foundation moves, then any tableau move, else the stock.
fn playout(seed: u64, steps: u64) -> GameState {
    let mut state = GameState::deal(Settings::default(), &mut GameRng::new(seed));

    for now in 0..steps {
        if state.is_won || state.auto_complete(now) > 0 {
            continue;
        }

        let tops: Vec<CardId> = std::iter::once(&state.waste)
            .chain(state.tableau.iter())
            .filter_map(|p| p.top())
            .filter(|c| c.face_up)
            .map(|c| c.id())
            .collect();
        let moved = tops.into_iter().any(|card| {
            (0..7).any(|to| state.move_cards(&[card], PileId::Tableau(to), now))
        });

        if !moved {
            if state.stock.is_empty() {
                state.reset_stock(now);
            } else {
                state.draw(now);
            }
        }
    }
    state
}

fn bench_deal(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("deal", |b| {
        b.iter(|| {
            seed += 1;
            GameState::deal(Settings::default(), &mut GameRng::new(black_box(seed)))
        })
    });
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("playout_200", |b| b.iter(|| playout(black_box(7), 200)));
}

fn bench_undo_all(c: &mut Criterion) {
    let played = playout(7, 200);
    c.bench_function("undo_all", |b| {
        b.iter(|| {
            let mut state = played.clone();
            while state.can_undo() {
                state.undo();
            }
            state
        })
    });
}

fn bench_clone(c: &mut Criterion) {
    let played = playout(7, 200);
    c.bench_function("state_clone", |b| b.iter(|| black_box(&played).clone()));
}

criterion_group!(benches, bench_deal, bench_playout, bench_undo_all, bench_clone);
criterion_main!(benches);
