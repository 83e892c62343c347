//! Uniform random sampling and shuffling for the selection pipeline.

use rand::Rng;

/// Pick `n` distinct elements of `items` uniformly at random, preserving the
/// order in which they were drawn (not their input order). `n` larger than
/// the pool clamps to the pool size, so the loop never chases uniqueness
/// beyond what exists.
pub fn sample_unique<T: Clone, R: Rng>(items: &[T], n: usize, rng: &mut R) -> Vec<T> {
    let n = n.min(items.len());
    let mut picked = vec![false; items.len()];
    let mut result = Vec::with_capacity(n);

    while result.len() < n {
        let idx = rng.random_range(0..items.len());
        if !picked[idx] {
            picked[idx] = true;
            result.push(items[idx].clone());
        }
    }

    result
}

/// In-place Fisher-Yates shuffle: walk from the last index down, swapping each
/// position with a uniformly random earlier-or-equal one.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
