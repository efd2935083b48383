//! Weighted random choice over a discrete distribution.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

/// Scales `weights` into probabilities summing to one.
///
/// Returns `None` when the weights cannot form a distribution: a negative,
/// NaN or infinite entry, or no positive entry at all.
pub fn normalize(weights: &[f64]) -> Option<Vec<f64>> {
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return None;
    }
    let scaled = scale_to_max(weights)?;
    let total: f64 = scaled.iter().sum();
    Some(scaled.iter().map(|w| w / total).collect())
}

/// Draws an index with probability proportional to its weight.
///
/// Zero-weight entries are never chosen. If any weight is `+inf` the choice
/// is uniform among the infinite entries. Returns `None` when no index is
/// selectable (empty input, all zero, or a negative/NaN entry).
pub fn sample_index<R: Rng>(weights: &[f64], rng: &mut R) -> Option<usize> {
    if weights.iter().any(|w| w.is_nan() || *w < 0.0) {
        return None;
    }

    let infinite: Vec<usize> = weights
        .iter()
        .enumerate()
        .filter(|(_, w)| w.is_infinite())
        .map(|(i, _)| i)
        .collect();
    if !infinite.is_empty() {
        return Some(infinite[rng.random_range(0..infinite.len())]);
    }

    let probabilities = normalize(weights)?;
    WeightedIndex::<f64>::new(&probabilities)
        .ok()
        .map(|dist| dist.sample(rng))
}

/// Turns log-weights into relative weights in place: `exp(l - max)`.
///
/// The largest finite entry becomes `1`, so no row underflows to all zeros
/// unless every entry is `-inf`. If any entry is `+inf` those entries become
/// `1` and the rest `0`. NaN entries become `0`.
pub fn exp_shifted(logs: &mut [f64]) {
    let peak = logs
        .iter()
        .copied()
        .filter(|l| !l.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);
    for l in logs.iter_mut() {
        *l = if l.is_nan() || peak == f64::NEG_INFINITY {
            0.0
        } else if peak == f64::INFINITY {
            if *l == f64::INFINITY {
                1.0
            } else {
                0.0
            }
        } else {
            (*l - peak).exp()
        };
    }
}

/// Divides finite non-negative weights by their maximum so the total cannot
/// overflow. `None` if no weight is positive.
fn scale_to_max(weights: &[f64]) -> Option<Vec<f64>> {
    let max = weights.iter().copied().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return None;
    }
    Some(weights.iter().map(|w| w / max).collect())
}
