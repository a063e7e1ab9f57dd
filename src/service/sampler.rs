//! Uniform sampling without replacement.

use rand::Rng;

use crate::domain::Number;

/// Shuffle a copy of `candidates` in place (Fisher-Yates).
///
/// The input slice is never modified.
pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, candidates: &[Number]) -> Vec<Number> {
    let mut items = candidates.to_vec();
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
    items
}

/// Choose `min(k, candidates.len())` distinct candidates uniformly at random.
pub fn choose<R: Rng + ?Sized>(rng: &mut R, candidates: &[Number], k: usize) -> Vec<Number> {
    let mut items = shuffled(rng, candidates);
    items.truncate(k);
    items
}
