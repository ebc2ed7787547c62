use criterion::{criterion_group, criterion_main, Criterion};

use snake_agent::models::{Body, Food, Vector, World};
use snake_agent::strategy::{GreedyStrategy, Strategy};

fn bench(c: &mut Criterion) {
    let mut you = Body::new();
    for y in 5..10 {
        you.add_part(Vector::new(5, y));
    }
    let mut other = Body::new();
    for x in 0..8 {
        other.add_part(Vector::new(x, 3));
    }
    let mut world = World::new(11, 11);
    world.add_body(you.clone());
    world.add_body(other);
    let food: Vec<Food> = [(0, 0), (10, 4), (6, 9)]
        .iter()
        .map(|&(x, y)| Food {
            point_: Vector::new(x, y),
        })
        .collect();

    c.bench_function("GreedyStrategy::decide", |b| {
        let mut strategy = GreedyStrategy::new();
        b.iter(|| strategy.decide(0, &world, &food, &you))
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
