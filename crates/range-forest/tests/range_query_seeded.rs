use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use range_forest::BalancedTree;

fn seeds() -> Vec<u64> {
    (0..40).map(|i| 0x5eed_0000 + i * 7919).collect()
}

#[test]
fn range_query_seeded_matches_brute_force() {
    for seed in seeds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let n: usize = rng.gen_range(0..400);
        // Coarse grid so duplicates and exact-boundary hits are common.
        let keys: Vec<f64> = (0..n)
            .map(|_| f64::from(rng.gen_range(-500i32..500)) / 4.0)
            .collect();

        let mut tree = BalancedTree::new();
        for k in &keys {
            tree.insert(*k);
        }
        tree.assert_valid()
            .unwrap_or_else(|e| panic!("invalid tree seed={seed}: {e}"));

        for _ in 0..50 {
            let a = f64::from(rng.gen_range(-520i32..520)) / 4.0;
            let b = f64::from(rng.gen_range(-520i32..520)) / 4.0;
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

            let mut found = tree.query(&lo, &hi);
            found.sort_by(f64::total_cmp);
            let len = found.len();
            found.dedup();
            assert_eq!(found.len(), len, "duplicate keys reported seed={seed}");

            let mut expected: Vec<f64> = keys.iter().copied().filter(|k| lo <= *k && *k <= hi).collect();
            expected.sort_by(f64::total_cmp);
            expected.dedup();
            assert_eq!(found, expected, "range [{lo}, {hi}] seed={seed}");
        }
    }
}

#[test]
fn contains_seeded_matches_inserted_set() {
    for seed in seeds() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let keys: Vec<f64> = (0..200).map(|_| rng.gen_range(-1e3..1e3)).collect();
        let tree: BalancedTree = keys.iter().copied().collect();

        for k in &keys {
            assert!(tree.contains(k), "missing {k} seed={seed}");
        }
        for _ in 0..200 {
            let probe = rng.gen_range(-1e3..1e3);
            assert_eq!(tree.contains(&probe), keys.contains(&probe), "probe {probe} seed={seed}");
        }
    }
}
