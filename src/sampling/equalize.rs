use rand::seq::index;
use rand::Rng;

use super::Sample;

/// Down-sample both inputs to their common length without replacement
///
/// Draws `min(a.len(), b.len())` elements from `a` and, separately, from
/// `b`. Each output is in random order; inputs of equal length come back
/// reshuffled.
pub fn equalize<R: Rng + ?Sized>(a: &[f64], b: &[f64], rng: &mut R) -> (Sample, Sample) {
    let m = a.len().min(b.len());
    (subsample(a, m, rng), subsample(b, m, rng))
}

fn subsample<R: Rng + ?Sized>(data: &[f64], amount: usize, rng: &mut R) -> Sample {
    index::sample(rng, data.len(), amount)
        .iter()
        .map(|i| data[i])
        .collect()
}
