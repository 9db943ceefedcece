use criterion::{criterion_group, criterion_main, Criterion};
use torus_life::{GridStore, NaiveGrid, RuleEngine, ToroidalGrid};

const N: i64 = 256;
const SEED: u64 = 42;

fn bench_sparse_dense_soup(c: &mut Criterion) {
    let mut life = GridStore::new(N, N).unwrap();
    life.randomize(0.3, Some(SEED));
    c.bench_function("sparse_dense_soup", |b| b.iter(|| RuleEngine::step(&mut life)));
}

// a few gliders on a big field: the case the live set is built for
fn bench_sparse_few_cells(c: &mut Criterion) {
    let mut life = GridStore::new(N * 8, N * 8).unwrap();
    for i in 0..16 {
        let (x, y) = (i * 97, i * 61);
        for (dx, dy) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            life.set((x + dx, y + dy).into(), true);
        }
    }
    c.bench_function("sparse_few_cells", |b| b.iter(|| RuleEngine::step(&mut life)));
}

fn bench_naive(c: &mut Criterion) {
    let mut life = NaiveGrid::new(N, N).unwrap();
    life.randomize(0.3, Some(SEED));
    c.bench_function("naive", |b| b.iter(|| life.update(1)));
}

criterion_group!(
    benches,
    bench_sparse_dense_soup,
    bench_sparse_few_cells,
    bench_naive,
);
criterion_main!(benches);
