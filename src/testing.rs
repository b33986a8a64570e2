use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub fn init_test() {
    drop(env_logger::try_init());
}

/// Deterministic generator, so failures reproduce.
pub fn test_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// A permutation of `0..n`.
pub fn shuffled(n: usize, seed: u64) -> Vec<i64> {
    let mut values: Vec<i64> = (0..n as i64).collect();
    values.shuffle(&mut test_rng(seed));
    values
}
