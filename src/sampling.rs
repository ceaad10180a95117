//! Random sources and distribution-sampling helpers
//!
//! Generation draws from two independent seeded generators: `general` covers
//! uniform draws (offsets, ranges, uniform picks, session tokens) and `numeric`
//! covers the statistical distributions (weighted categoricals, exponential,
//! Poisson). Both are created once at startup and threaded through the stages
//! by mutable reference, so a run is reproducible end to end from its seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two seeded random sources shared by all generation stages
#[derive(Debug)]
pub struct RandomSources {
    /// Source for uniform draws and token generation
    pub general: StdRng,
    /// Source for statistical distribution sampling
    pub numeric: StdRng,
}

impl RandomSources {
    /// Create both sources from a single seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            general: StdRng::seed_from_u64(seed),
            numeric: StdRng::seed_from_u64(seed),
        }
    }
}

/// Pick an entry from a weighted categorical distribution
///
/// Walks the cumulative weights against a single uniform roll. Weights are
/// expected to sum to 1 by convention; if the roll overshoots due to rounding
/// the last entry is returned.
pub fn weighted_choice<T: Copy, R: Rng + ?Sized>(rng: &mut R, weights: &[(T, f64)]) -> T {
    let total: f64 = weights.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0.0..total);
    for (item, weight) in weights {
        if roll < *weight {
            return *item;
        }
        roll -= weight;
    }
    weights[weights.len() - 1].0
}

/// Sample an exponential distribution with the given mean
///
/// Inverse-CDF transform over a uniform draw in [0, 1).
pub fn sample_exponential<R: Rng + ?Sized>(rng: &mut R, mean: f64) -> f64 {
    let u: f64 = rng.gen();
    -mean * (1.0 - u).ln()
}

/// Sample a Poisson distribution with the given mean
///
/// Knuth's multiplication method; adequate for the small means used here.
pub fn sample_poisson<R: Rng + ?Sized>(rng: &mut R, mean: f64) -> u32 {
    let limit = (-mean).exp();
    let mut count = 0u32;
    let mut product: f64 = rng.gen();
    while product > limit {
        count += 1;
        product *= rng.gen::<f64>();
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_random_sources_are_seed_deterministic() {
        let mut a = RandomSources::from_seed(42);
        let mut b = RandomSources::from_seed(42);

        for _ in 0..100 {
            assert_eq!(a.general.gen::<u64>(), b.general.gen::<u64>());
            assert_eq!(a.numeric.gen::<u64>(), b.numeric.gen::<u64>());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = RandomSources::from_seed(1);
        let mut b = RandomSources::from_seed(2);
        let draws_a: Vec<u64> = (0..8).map(|_| a.general.gen()).collect();
        let draws_b: Vec<u64> = (0..8).map(|_| b.general.gen()).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn test_weighted_choice_respects_weights() {
        let mut rng = StdRng::seed_from_u64(42);
        let weights = [("a", 0.7), ("b", 0.2), ("c", 0.1)];

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let draws = 20_000;
        for _ in 0..draws {
            *counts.entry(weighted_choice(&mut rng, &weights)).or_insert(0) += 1;
        }

        for (item, weight) in &weights {
            let observed = counts[item] as f64 / draws as f64;
            assert!(
                (observed - weight).abs() < 0.02,
                "{}: observed {:.3}, expected {:.3}",
                item,
                observed,
                weight
            );
        }
    }

    #[test]
    fn test_weighted_choice_single_entry() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(weighted_choice(&mut rng, &[("only", 1.0)]), "only");
    }

    #[test]
    fn test_exponential_mean() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 50_000;
        let sum: f64 = (0..draws).map(|_| sample_exponential(&mut rng, 3.0)).sum();
        let mean = sum / draws as f64;
        assert!((mean - 3.0).abs() < 0.1, "observed mean {:.3}", mean);
    }

    #[test]
    fn test_exponential_is_nonnegative() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(sample_exponential(&mut rng, 3.0) >= 0.0);
        }
    }

    #[test]
    fn test_poisson_mean() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws = 50_000;
        let sum: u64 = (0..draws).map(|_| sample_poisson(&mut rng, 2.0) as u64).sum();
        let mean = sum as f64 / draws as f64;
        assert!((mean - 2.0).abs() < 0.05, "observed mean {:.3}", mean);
    }

    #[test]
    fn test_poisson_small_mean_mostly_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        let zeros = (0..10_000)
            .filter(|_| sample_poisson(&mut rng, 0.01) == 0)
            .count();
        assert!(zeros > 9_800);
    }
}
