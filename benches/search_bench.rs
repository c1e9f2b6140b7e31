use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use floe::ai::choose_placement;
use floe::ai::search::{search, SearchOptions};
use floe::core::game::{Game, GameConfig};

fn placed_game() -> Game {
    let mut rng = StdRng::seed_from_u64(9);
    let config = GameConfig::new(2, 2).expect("valid config");
    let mut game = Game::new(config, &mut rng).expect("fresh game");
    while let Some(hex) = choose_placement(&game, &mut rng) {
        if !game.submit_placement(hex) {
            break;
        }
    }
    game
}

fn search_benchmark(c: &mut Criterion) {
    let game = placed_game();
    let options = SearchOptions {
        move_time: 60_000,
        max_depth: 4,
    };

    c.bench_function("search_depth_4", |b| {
        b.iter(|| {
            let mut game = game.clone();
            // prevent the result from being optimized away
            black_box(search(black_box(&mut game), black_box(&options)));
        })
    });
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
