use criterion::{Criterion, criterion_group, criterion_main};
use slither_core::{Direction, GameConfig, PlayEngine, RandomFoodGenerator, TickOutcome};
use std::hint::black_box;

fn run_ticks(ticks: usize, seed: u64) -> u32 {
    let mut engine = PlayEngine::new(GameConfig::classic());
    let mut food = RandomFoodGenerator::new(seed);
    engine.start(&mut food).unwrap();

    let mut best = 0;
    for step in 0..ticks {
        if step % 5 == 0 {
            let _ = engine.turn(Direction::ALL[step / 5 % Direction::ALL.len()]);
        }
        if engine.tick(&mut food) == TickOutcome::Crashed {
            best = best.max(engine.score());
            engine.start(&mut food).unwrap();
        }
    }
    best.max(engine.score())
}

fn tick_loop(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    for ticks in [100, 1_000, 10_000] {
        group.bench_function(format!("{ticks} ticks"), |b| {
            b.iter(|| run_ticks(black_box(ticks), black_box(17)))
        });
    }
    group.finish();
}

criterion_group!(benches, tick_loop);
criterion_main!(benches);
