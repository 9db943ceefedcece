#[cfg(test)]
mod tests {
    use torus_life::{Coord, GridStore, NaiveGrid, RuleEngine, ToroidalGrid};

    const SEED: u64 = 42;
    const FILL_RATE: f64 = 0.3;

    fn randomly_filled(width: i64, height: i64, seed: u64) -> (GridStore, NaiveGrid) {
        let mut life_sparse = GridStore::new(width, height).unwrap();
        let mut life_naive = NaiveGrid::new(width, height).unwrap();
        life_sparse.randomize(FILL_RATE, Some(seed));
        life_naive.randomize(FILL_RATE, Some(seed));

        assert_fields_equal(&life_sparse, &life_naive);
        (life_sparse, life_naive)
    }

    fn assert_fields_equal(life_sparse: &dyn ToroidalGrid, life_naive: &dyn ToroidalGrid) {
        assert_eq!(life_sparse.bounds(), life_naive.bounds());
        assert_eq!(life_sparse.generation(), life_naive.generation());
        let bounds = life_sparse.bounds();
        let mismatch = bounds
            .coords()
            .find(|&c| life_sparse.get(c) != life_naive.get(c));
        let Some(Coord { x, y }) = mismatch else {
            assert_eq!(life_sparse.population(), life_naive.population());
            return;
        };

        const K: i64 = 10;
        let mut picture = String::new();
        for y in y - K..=y + K {
            for field in [life_sparse, life_naive] {
                picture.push('|');
                picture.extend((x - K..=x + K).map(|x| {
                    if field.get(Coord::new(x, y)) {
                        '#'
                    } else {
                        ' '
                    }
                }));
            }
            picture.push_str("|\n");
        }
        panic!(
            "Mismatch at ({}, {}) in generation {}:\n{}",
            bounds.normalize(Coord::new(x, y)).x,
            bounds.normalize(Coord::new(x, y)).y,
            life_sparse.generation(),
            picture
        );
    }

    #[test]
    fn test_single_updates() {
        for (width, height) in [(32, 32), (64, 48), (17, 5)] {
            let (mut life_sparse, mut life_naive) = randomly_filled(width, height, SEED);
            for _ in 0..64 {
                RuleEngine::step(&mut life_sparse);
                life_naive.update(1);
                assert_fields_equal(&life_sparse, &life_naive);
            }
        }
    }

    #[test]
    fn test_many_seeds() {
        for seed in 0..16 {
            let (mut life_sparse, mut life_naive) = randomly_filled(40, 25, seed);
            RuleEngine::run(&mut life_sparse, 100);
            life_naive.update(100);
            assert_fields_equal(&life_sparse, &life_naive);
        }
    }

    #[test]
    fn test_sparse_rule_on_dense_grid() {
        let (_, mut life_rule) = randomly_filled(50, 50, SEED);
        let (_, mut life_naive) = randomly_filled(50, 50, SEED);
        RuleEngine::run(&mut life_rule, 30);
        life_naive.update(30);
        assert_fields_equal(&life_rule, &life_naive);
    }
}
