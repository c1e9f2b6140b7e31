use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use floe::ai::choose_placement;
use floe::ai::evaluate;
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

fn eval_benchmark(c: &mut Criterion) {
    let game = placed_game();

    c.bench_function("position evaluation", |b| {
        b.iter(|| evaluate(black_box(&game), black_box(0)))
    });
}

criterion_group!(benches, eval_benchmark);
criterion_main!(benches);
